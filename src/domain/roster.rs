//! The decoded optimization result and its saved document form.
//!
//! A [`Roster`] is derived solely from the solver's variable assignment and
//! has no mutation path: the decoder builds it once and callers only read.
//! [`RosterDocument`] is the JSON shape written by `--save` and consumed by
//! `teamdiff`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ids::PlayerId;
use crate::domain::money::{Points, Price};
use crate::domain::player::Player;
use crate::domain::position::Position;

/// Where a selected player ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquadRole {
    /// In the starting lineup.
    Starter,
    /// On the bench.
    Bench,
}

/// One selected player, tagged with role and captaincy.
#[derive(Debug, Clone, PartialEq)]
pub struct SquadSlot {
    player: Player,
    role: SquadRole,
    captain: bool,
    value: Points,
}

impl SquadSlot {
    /// Create a slot. `value` is the player's expected starting contribution
    /// at decode time (raw value × availability).
    #[must_use]
    pub(crate) fn new(player: Player, role: SquadRole, captain: bool, value: Points) -> Self {
        Self {
            player,
            role,
            captain,
            value,
        }
    }

    /// The selected player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Starter or bench.
    #[must_use]
    pub fn role(&self) -> SquadRole {
        self.role
    }

    /// Whether this player wears the armband.
    #[must_use]
    pub fn is_captain(&self) -> bool {
        self.captain
    }

    /// Whether this player starts.
    #[must_use]
    pub fn is_starter(&self) -> bool {
        self.role == SquadRole::Starter
    }

    /// Expected starting contribution used for ordering and display.
    #[must_use]
    pub fn value(&self) -> Points {
        self.value
    }
}

/// The decoded squad: 15 tagged players, the captain, cost and headroom.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    slots: Vec<SquadSlot>,
    captain: PlayerId,
    total_cost: Price,
    budget_cap: Price,
    projected_points: Points,
}

impl Roster {
    /// Assemble a roster from decoded slots.
    ///
    /// Slots are reordered for presentation: starters before bench, pitch
    /// order within each group, higher value first within a position.
    pub(crate) fn new(
        mut slots: Vec<SquadSlot>,
        captain: PlayerId,
        budget_cap: Price,
        projected_points: Points,
    ) -> Self {
        slots.sort_by(|a, b| {
            a.role
                .cmp(&b.role)
                .then(a.player.position().cmp(&b.player.position()))
                .then(b.value.cmp(&a.value))
                .then(a.player.name().cmp(b.player.name()))
        });
        let total_cost = slots.iter().map(|s| s.player.price()).sum();
        Self {
            slots,
            captain,
            total_cost,
            budget_cap,
            projected_points,
        }
    }

    /// All slots, starters first in pitch order.
    #[must_use]
    pub fn slots(&self) -> &[SquadSlot] {
        &self.slots
    }

    /// The starting lineup.
    pub fn starters(&self) -> impl Iterator<Item = &SquadSlot> {
        self.slots.iter().filter(|s| s.is_starter())
    }

    /// The bench.
    pub fn bench(&self) -> impl Iterator<Item = &SquadSlot> {
        self.slots.iter().filter(|s| !s.is_starter())
    }

    /// The captain's id.
    #[must_use]
    pub fn captain(&self) -> &PlayerId {
        &self.captain
    }

    /// The captain's slot.
    #[must_use]
    pub fn captain_slot(&self) -> Option<&SquadSlot> {
        self.slots.iter().find(|s| s.is_captain())
    }

    /// Sum of selected players' prices.
    #[must_use]
    pub fn total_cost(&self) -> Price {
        self.total_cost
    }

    /// The budget cap the roster was optimized under.
    #[must_use]
    pub fn budget_cap(&self) -> Price {
        self.budget_cap
    }

    /// Budget left unspent.
    #[must_use]
    pub fn headroom(&self) -> Price {
        self.budget_cap - self.total_cost
    }

    /// Objective value of the solution: expected points with bench
    /// discounting and the captain's double counted in.
    #[must_use]
    pub fn projected_points(&self) -> Points {
        self.projected_points
    }

    /// Selected players at a position, starters and bench together.
    #[must_use]
    pub fn selected_at(&self, position: Position) -> usize {
        self.slots
            .iter()
            .filter(|s| s.player.position() == position)
            .count()
    }

    /// Starting players at a position.
    #[must_use]
    pub fn starters_at(&self, position: Position) -> usize {
        self.starters()
            .filter(|s| s.player.position() == position)
            .count()
    }

    /// The starting shape as "defenders-midfielders-forwards", e.g. "4-4-2".
    #[must_use]
    pub fn formation_label(&self) -> String {
        format!(
            "{}-{}-{}",
            self.starters_at(Position::Defender),
            self.starters_at(Position::Midfielder),
            self.starters_at(Position::Forward)
        )
    }

    /// Snapshot this roster as a saveable document.
    #[must_use]
    pub fn to_document(&self) -> RosterDocument {
        RosterDocument {
            generated_at: Utc::now(),
            budget_cap: self.budget_cap,
            total_cost: self.total_cost,
            headroom: self.headroom(),
            projected_points: self.projected_points,
            formation: self.formation_label(),
            captain: self.captain.clone(),
            players: self
                .slots
                .iter()
                .map(|s| RosterEntry {
                    id: s.player.id().clone(),
                    name: s.player.name().to_string(),
                    club: s.player.club().to_string(),
                    position: s.player.position(),
                    price: s.player.price(),
                    value: s.value,
                    role: s.role,
                    captain: s.captain,
                })
                .collect(),
        }
    }
}

/// One player line in a saved roster document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Player id.
    pub id: PlayerId,
    /// Player name.
    pub name: String,
    /// Player club.
    pub club: String,
    /// Playing position.
    pub position: Position,
    /// Price at optimization time.
    pub price: Decimal,
    /// Expected starting contribution at optimization time.
    pub value: Decimal,
    /// Starter or bench.
    pub role: SquadRole,
    /// Whether this player is the captain.
    pub captain: bool,
}

/// The saved JSON form of a roster, as written by `--save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterDocument {
    /// When the roster was produced.
    pub generated_at: DateTime<Utc>,
    /// Budget cap of the run.
    pub budget_cap: Decimal,
    /// Total price of the squad.
    pub total_cost: Decimal,
    /// Budget left unspent.
    pub headroom: Decimal,
    /// Objective value of the solution.
    pub projected_points: Decimal,
    /// Starting shape, e.g. "4-4-2".
    pub formation: String,
    /// The captain's id.
    pub captain: PlayerId,
    /// All 15 players, starters first.
    pub players: Vec<RosterEntry>,
}

impl RosterDocument {
    /// Ids of every player in the document.
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }
}
