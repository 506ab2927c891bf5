//! Gaffer - Fantasy football squad optimization.
//!
//! This crate picks the provably best 15-player fantasy squad from a
//! candidate pool by encoding the platform's rule book as an integer linear
//! program and handing it to an exact solver.
//!
//! # Architecture
//!
//! Three binary decisions per candidate (selected, starting, captain) are
//! tied together by linking constraints, so one solve answers squad
//! selection, lineup choice, and the captaincy at once:
//!
//! - **[`domain`]** - Rule-book types: players, positions, squad rules,
//!   the value model, and decoded rosters
//! - **[`domain::solver`]** - LP/ILP solver abstraction
//!   - `HiGHSSolver` - Open-source HiGHS via good_lp
//! - **[`optimizer`]** - Variable layout, constraint and objective builders,
//!   and the solution decoder
//! - **[`source`]** - Pool ingestion (CSV/JSON), availability adjustments,
//!   and roster persistence
//! - **[`config`]** - Configuration loading from TOML files
//! - **[`cli`]** - The `gaffer` command-line surface
//! - **[`error`]** - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use gaffer::config::Config;
//! use gaffer::domain::solver::HiGHSSolver;
//! use gaffer::optimizer::SquadOptimizer;
//! use gaffer::source::load_pool;
//!
//! # fn main() -> gaffer::error::Result<()> {
//! let config = Config::default();
//! let optimizer = SquadOptimizer::new(config.squad.clone(), config.scoring)?;
//! let pool = load_pool(Path::new("players.csv"))?;
//! let roster = optimizer.optimize(&pool, &HiGHSSolver::new())?;
//! println!("{} for {}", roster.formation_label(), roster.total_cost());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod optimizer;
pub mod source;
