//! Player valuation: what each candidate is worth to the objective.
//!
//! Pure arithmetic over a [`Player`] and the configured bench fraction.
//! No mutation, no I/O.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::money::Points;
use crate::domain::player::Player;

/// Scoring weights for an optimization run.
///
/// The only knob is the bench fraction: the share of a player's projected
/// value credited while they sit on the bench. Availability devaluation and
/// captain doubling are fixed parts of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ValueModel {
    /// Fraction of projected value credited to bench players.
    #[serde(default = "default_bench_fraction")]
    pub bench_fraction: Decimal,
}

fn default_bench_fraction() -> Decimal {
    Decimal::new(1, 1) // 0.1
}

impl Default for ValueModel {
    fn default() -> Self {
        Self {
            bench_fraction: default_bench_fraction(),
        }
    }
}

impl ValueModel {
    /// Create a value model with the given bench fraction.
    #[must_use]
    pub const fn new(bench_fraction: Decimal) -> Self {
        Self { bench_fraction }
    }

    /// Expected contribution of a player in the starting lineup.
    ///
    /// `raw value × availability`. An availability of 0 drives this to 0,
    /// which prices an injured player out of the lineup without forbidding
    /// selection (budget or composition may still force them in).
    #[must_use]
    pub fn starting_value(&self, player: &Player) -> Points {
        player.points() * player.availability()
    }

    /// Expected contribution of a player on the bench.
    ///
    /// The starting value discounted by the bench fraction.
    #[must_use]
    pub fn bench_value(&self, player: &Player) -> Points {
        self.starting_value(player) * self.bench_fraction
    }

    /// Extra contribution of captaining a player.
    ///
    /// Equal to the starting value again: a captain's points count double.
    #[must_use]
    pub fn captain_bonus(&self, player: &Player) -> Points {
        self.starting_value(player)
    }
}
