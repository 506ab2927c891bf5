//! Playing positions and position-keyed lookup tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

/// A player's position on the pitch.
///
/// Squad composition and formation rules are expressed per position, so this
/// enum is the key of every per-position table in the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Goalkeeper. Exactly one starts in any legal lineup.
    #[serde(rename = "keeper")]
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions, in conventional pitch order.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// The outfield positions, i.e. everything but the keeper.
    pub const OUTFIELD: [Position; 3] =
        [Position::Defender, Position::Midfielder, Position::Forward];

    /// Canonical lowercase name, as used in pool files and roster documents.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "keeper",
            Position::Defender => "defender",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
        }
    }

    /// Short code for table rendering.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }

    /// Whether this is an outfield position.
    #[must_use]
    pub fn is_outfield(&self) -> bool {
        !matches!(self, Position::Goalkeeper)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    /// Parse a position from the spellings the supported platforms emit.
    /// Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keeper" | "goalkeeper" | "gk" | "gkp" => Ok(Position::Goalkeeper),
            "defender" | "def" | "d" => Ok(Position::Defender),
            "midfielder" | "mid" | "m" => Ok(Position::Midfielder),
            "forward" | "fwd" | "f" | "striker" => Ok(Position::Forward),
            _ => Err(ValidationError::UnknownPosition {
                given: s.to_string(),
            }),
        }
    }
}
