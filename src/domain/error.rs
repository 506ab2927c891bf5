//! Domain validation and optimization errors.
//!
//! This module defines the failure taxonomy of an optimization run:
//! `ValidationError` for malformed player input, `InfeasibleConfigurationError`
//! for self-contradictory squad rules (caught before solving),
//! `NoSolutionError` when the solver proves the pool cannot satisfy the rules,
//! and `SolverError` for backend-level failures.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use gaffer::domain::error::ValidationError;
//! use gaffer::domain::Position;
//!
//! let result = "winger".parse::<Position>();
//!
//! assert!(matches!(result, Err(ValidationError::UnknownPosition { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::ids::PlayerId;
use crate::domain::position::Position;

/// Errors raised when player input violates domain rules.
///
/// These are per-record failures: they name the offending player, row, or
/// line so the caller can report exactly what to fix.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    /// Position string is not one of the recognized spellings.
    #[error("unknown position {given:?}")]
    UnknownPosition {
        /// The unrecognized position string.
        given: String,
    },

    /// Player names cannot be empty.
    #[error("player name cannot be empty")]
    EmptyName,

    /// Prices are non-negative.
    #[error("player {name}: price must be non-negative, got {price}")]
    NegativePrice {
        /// The offending player.
        name: String,
        /// The invalid price.
        price: Decimal,
    },

    /// Projected values are non-negative.
    #[error("player {name}: projected value must be non-negative, got {points}")]
    NegativePoints {
        /// The offending player.
        name: String,
        /// The invalid projected value.
        points: Decimal,
    },

    /// Availability is a multiplier in [0, 1].
    #[error("player {name}: availability must be within [0, 1], got {availability}")]
    AvailabilityOutOfRange {
        /// The offending player.
        name: String,
        /// The invalid availability factor.
        availability: Decimal,
    },

    /// Ownership is a fraction in [0, 1] once percentage forms are scaled.
    #[error("player {name}: ownership must be within [0, 1], got {ownership}")]
    OwnershipOutOfRange {
        /// The offending player.
        name: String,
        /// The invalid ownership fraction.
        ownership: Decimal,
    },

    /// Pools reject a second player with an id already present.
    #[error("duplicate player id {id}")]
    DuplicatePlayer {
        /// The id that appeared twice.
        id: PlayerId,
    },

    /// A pool file record failed to parse or validate.
    #[error("row {row}: {reason}")]
    MalformedRecord {
        /// 1-based record number within the file.
        row: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// An adjustments file line failed to parse or validate.
    #[error("adjustments line {line}: {reason}")]
    MalformedAdjustment {
        /// 1-based line number within the file.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Pool files are dispatched on extension; this one is not supported.
    #[error("unsupported pool format {path:?} (expected .csv or .json)")]
    UnsupportedFormat {
        /// The path that could not be dispatched.
        path: String,
    },
}

/// Errors raised when the configured squad rules contradict themselves.
///
/// Detected before any solving happens; a pool can never satisfy rules that
/// are structurally impossible, so these are always fatal to the run.
#[derive(Error, Debug, Clone)]
pub enum InfeasibleConfigurationError {
    /// Composition targets must sum to the squad size.
    #[error("composition targets sum to {total}, squad size is {expected}")]
    CompositionTotal {
        /// Sum of the configured per-position targets.
        total: usize,
        /// The required squad size.
        expected: usize,
    },

    /// At least one keeper slot is required to field a starting keeper.
    #[error("composition reserves no keeper slot")]
    NoKeeperSlot,

    /// A formation range with min above max admits no lineup.
    #[error("formation bounds for {position} inverted: min {min} > max {max}")]
    InvertedFormationBounds {
        /// The outfield position with bad bounds.
        position: Position,
        /// Configured minimum starters.
        min: usize,
        /// Configured maximum starters.
        max: usize,
    },

    /// A position cannot start more players than the squad carries.
    #[error("formation requires {min} starting {position}s but composition selects only {target}")]
    FormationMinExceedsTarget {
        /// The outfield position.
        position: Position,
        /// Configured minimum starters.
        min: usize,
        /// Configured selected count for the position.
        target: usize,
    },

    /// Formation minimums (plus the keeper) exceed the starting XI.
    #[error("formation minimums require {required} starters, lineup size is {expected}")]
    FormationMinimumsExceedStarters {
        /// Keeper plus the sum of configured minimums.
        required: usize,
        /// The starting XI size.
        expected: usize,
    },

    /// Formation maximums (plus the keeper) cannot fill the starting XI.
    #[error("formation maximums allow only {achievable} starters, lineup size is {expected}")]
    FormationMaximumsShortOfStarters {
        /// Keeper plus the sum of attainable maximums.
        achievable: usize,
        /// The starting XI size.
        expected: usize,
    },

    /// Budget caps are non-negative.
    #[error("budget cap must be non-negative, got {budget}")]
    NegativeBudget {
        /// The invalid budget cap.
        budget: Decimal,
    },
}

/// The solver proved that no feasible squad exists for this pool.
///
/// Propagated verbatim and never retried: the model is deterministic, so an
/// unchanged pool and configuration would fail identically. Typical causes
/// are too few candidates at a required position or a budget below the
/// cheapest composition-satisfying combination.
#[derive(Error, Debug, Clone)]
#[error("no feasible squad from {pool_size} candidates under budget {budget_cap}")]
pub struct NoSolutionError {
    /// Number of candidate players in the pool.
    pub pool_size: usize,
    /// The configured budget cap.
    pub budget_cap: Decimal,
}

/// The solver itself failed: timeout, numerical trouble, or a status the
/// backend could not classify.
///
/// Distinct from [`NoSolutionError`]: here nothing was proven about the
/// model. The caller may retry with a relaxed configuration; the core never
/// relaxes constraints on its own.
#[derive(Error, Debug, Clone)]
pub enum SolverError {
    /// The backend reported an unbounded model. Never expected with all
    /// variables boolean; indicates a modeling defect.
    #[error("solver reported an unbounded model")]
    Unbounded,

    /// The backend failed with the given status text.
    #[error("solver failed: {status}")]
    Failure {
        /// The backend's status or error text.
        status: String,
    },
}
