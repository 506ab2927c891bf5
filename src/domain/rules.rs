//! Squad rules: budget, composition targets, and formation bounds.
//!
//! These are the static constraints of a run. [`SquadRules::validate`]
//! rejects self-contradictory configurations before any model is built, so
//! solver-time infeasibility always means the *pool* is the problem, not the
//! rules.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::error::InfeasibleConfigurationError;
use crate::domain::position::Position;

/// Selected-player targets per position. Must sum to the squad size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SquadComposition {
    /// Keepers carried in the squad.
    #[serde(default = "default_keepers")]
    pub keepers: usize,
    /// Defenders carried in the squad.
    #[serde(default = "default_defenders")]
    pub defenders: usize,
    /// Midfielders carried in the squad.
    #[serde(default = "default_midfielders")]
    pub midfielders: usize,
    /// Forwards carried in the squad.
    #[serde(default = "default_forwards")]
    pub forwards: usize,
}

fn default_keepers() -> usize {
    2
}

fn default_defenders() -> usize {
    5
}

fn default_midfielders() -> usize {
    5
}

fn default_forwards() -> usize {
    3
}

impl Default for SquadComposition {
    fn default() -> Self {
        Self {
            keepers: default_keepers(),
            defenders: default_defenders(),
            midfielders: default_midfielders(),
            forwards: default_forwards(),
        }
    }
}

impl SquadComposition {
    /// The selected-count target for a position.
    #[must_use]
    pub fn target(&self, position: Position) -> usize {
        match position {
            Position::Goalkeeper => self.keepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    /// Sum of all targets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.keepers + self.defenders + self.midfielders + self.forwards
    }
}

/// Inclusive starter-count range for one outfield position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FormationRange {
    /// Minimum starters at this position.
    pub min: usize,
    /// Maximum starters at this position.
    pub max: usize,
}

impl FormationRange {
    /// Create a range.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Legal starting-lineup ranges per outfield position.
///
/// The keeper is not configurable: every legal lineup starts exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FormationRules {
    /// Starting defenders range.
    #[serde(default = "default_defender_range")]
    pub defenders: FormationRange,
    /// Starting midfielders range.
    #[serde(default = "default_midfielder_range")]
    pub midfielders: FormationRange,
    /// Starting forwards range.
    #[serde(default = "default_forward_range")]
    pub forwards: FormationRange,
}

fn default_defender_range() -> FormationRange {
    FormationRange::new(3, 5)
}

fn default_midfielder_range() -> FormationRange {
    FormationRange::new(2, 5)
}

fn default_forward_range() -> FormationRange {
    FormationRange::new(1, 3)
}

impl Default for FormationRules {
    fn default() -> Self {
        Self {
            defenders: default_defender_range(),
            midfielders: default_midfielder_range(),
            forwards: default_forward_range(),
        }
    }
}

impl FormationRules {
    /// The starter range for an outfield position.
    ///
    /// The keeper has no range; callers handle it as exactly one starter.
    #[must_use]
    pub fn range(&self, position: Position) -> Option<FormationRange> {
        match position {
            Position::Goalkeeper => None,
            Position::Defender => Some(self.defenders),
            Position::Midfielder => Some(self.midfielders),
            Position::Forward => Some(self.forwards),
        }
    }
}

/// The full static rule set for a run: budget cap, squad composition, and
/// formation bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SquadRules {
    /// Maximum total price of the selected squad.
    #[serde(default = "default_budget")]
    pub budget: Decimal,
    /// Selected-count targets per position.
    #[serde(default)]
    pub composition: SquadComposition,
    /// Starting-lineup bounds per outfield position.
    #[serde(default)]
    pub formation: FormationRules,
}

fn default_budget() -> Decimal {
    Decimal::from(100)
}

impl Default for SquadRules {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            composition: SquadComposition::default(),
            formation: FormationRules::default(),
        }
    }
}

impl SquadRules {
    /// Players in a full squad.
    pub const SQUAD_SIZE: usize = 15;

    /// Players in the starting lineup, keeper included.
    pub const STARTING_SIZE: usize = 11;

    /// Check that the rules admit at least one legal squad shape.
    ///
    /// This is the configuration-time feasibility gate: it catches rule sets
    /// that no pool whatsoever could satisfy. It cannot prove the converse;
    /// a thin or overpriced pool still fails later, at solve time.
    pub fn validate(&self) -> Result<(), InfeasibleConfigurationError> {
        if self.composition.keepers == 0 {
            return Err(InfeasibleConfigurationError::NoKeeperSlot);
        }

        let total = self.composition.total();
        if total != Self::SQUAD_SIZE {
            return Err(InfeasibleConfigurationError::CompositionTotal {
                total,
                expected: Self::SQUAD_SIZE,
            });
        }

        for position in Position::OUTFIELD {
            // range() is Some for every outfield position
            let Some(range) = self.formation.range(position) else {
                continue;
            };
            if range.min > range.max {
                return Err(InfeasibleConfigurationError::InvertedFormationBounds {
                    position,
                    min: range.min,
                    max: range.max,
                });
            }
            let target = self.composition.target(position);
            if range.min > target {
                return Err(InfeasibleConfigurationError::FormationMinExceedsTarget {
                    position,
                    min: range.min,
                    target,
                });
            }
        }

        let min_starters: usize = 1 + Position::OUTFIELD
            .iter()
            .filter_map(|&p| self.formation.range(p))
            .map(|r| r.min)
            .sum::<usize>();
        if min_starters > Self::STARTING_SIZE {
            return Err(InfeasibleConfigurationError::FormationMinimumsExceedStarters {
                required: min_starters,
                expected: Self::STARTING_SIZE,
            });
        }

        let max_starters: usize = 1 + Position::OUTFIELD
            .iter()
            .filter_map(|&p| {
                self.formation
                    .range(p)
                    .map(|r| r.max.min(self.composition.target(p)))
            })
            .sum::<usize>();
        if max_starters < Self::STARTING_SIZE {
            return Err(
                InfeasibleConfigurationError::FormationMaximumsShortOfStarters {
                    achievable: max_starters,
                    expected: Self::STARTING_SIZE,
                },
            );
        }

        if self.budget < Decimal::ZERO {
            return Err(InfeasibleConfigurationError::NegativeBudget {
                budget: self.budget,
            });
        }

        Ok(())
    }
}
