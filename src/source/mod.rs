//! File-backed inputs and outputs: player pools, availability adjustments,
//! and saved roster documents.

mod adjustments;
mod pool;
mod roster;

pub use adjustments::{export_adjustments, Adjustments};
pub use pool::load_pool;
pub use roster::{load_roster, save_roster};
