//! Squad-selection domain logic.

pub mod error;
mod ids;
mod money;
mod player;
mod position;
mod roster;
mod rules;
mod scoring;
mod similarity;

pub mod solver;

// Core domain types
pub use ids::PlayerId;
pub use money::{Points, Price};
pub use player::{Player, PlayerPool};
pub use position::Position;
pub use rules::{FormationRange, FormationRules, SquadComposition, SquadRules};
pub use scoring::ValueModel;

// Decoded results and their saved form
pub use roster::{Roster, RosterDocument, RosterEntry, SquadRole, SquadSlot};

// Roster comparison
pub use similarity::{roster_similarity, shared_ids};
