//! Candidate players and the per-run player pool.
//!
//! A [`Player`] is the validated, immutable record the optimizer works from.
//! Construction goes through [`Player::try_new`], which enforces the domain
//! rules once; everything downstream can then rely on the fields being sane.
//! A [`PlayerPool`] is the deduplicated collection of candidates for one run.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::error::ValidationError;
use crate::domain::ids::PlayerId;
use crate::domain::money::{Points, Price};
use crate::domain::position::Position;

/// A validated candidate player.
///
/// Immutable once constructed. Availability is a devaluation multiplier in
/// [0, 1]: 1 means fully available, 0 means ruled out. Ownership is the
/// fraction of the player base fielding this player and is only consumed by
/// the roster similarity computation; it never affects optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: PlayerId,
    name: String,
    club: String,
    position: Position,
    price: Price,
    points: Points,
    availability: Decimal,
    ownership: Option<Decimal>,
}

impl Player {
    /// Create a validated player record.
    ///
    /// Fails with [`ValidationError`] if the name is empty, the price or
    /// projected value is negative, or availability/ownership fall outside
    /// [0, 1].
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        id: PlayerId,
        name: impl Into<String>,
        club: impl Into<String>,
        position: Position,
        price: Price,
        points: Points,
        availability: Decimal,
        ownership: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice { name, price });
        }
        if points < Decimal::ZERO {
            return Err(ValidationError::NegativePoints { name, points });
        }
        if availability < Decimal::ZERO || availability > Decimal::ONE {
            return Err(ValidationError::AvailabilityOutOfRange { name, availability });
        }
        if let Some(ownership) = ownership {
            if ownership < Decimal::ZERO || ownership > Decimal::ONE {
                return Err(ValidationError::OwnershipOutOfRange { name, ownership });
            }
        }

        Ok(Self {
            id,
            name,
            club: club.into(),
            position,
            price,
            points,
            availability,
            ownership,
        })
    }

    /// Copy of this player with availability replaced.
    ///
    /// Used when applying an adjustments file; the original record is left
    /// untouched. Fails if the override is outside [0, 1].
    pub fn with_availability(&self, availability: Decimal) -> Result<Self, ValidationError> {
        if availability < Decimal::ZERO || availability > Decimal::ONE {
            return Err(ValidationError::AvailabilityOutOfRange {
                name: self.name.clone(),
                availability,
            });
        }
        let mut player = self.clone();
        player.availability = availability;
        Ok(player)
    }

    /// Get the player's id.
    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Get the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the player's club.
    #[must_use]
    pub fn club(&self) -> &str {
        &self.club
    }

    /// Get the player's position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the player's price.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Get the player's raw projected value, before any devaluation.
    #[must_use]
    pub fn points(&self) -> Points {
        self.points
    }

    /// Get the player's availability factor.
    #[must_use]
    pub fn availability(&self) -> Decimal {
        self.availability
    }

    /// Get the player's ownership fraction, when the source provided one.
    #[must_use]
    pub fn ownership(&self) -> Option<Decimal> {
        self.ownership
    }
}

/// The candidate pool for one optimization run.
///
/// Rejects duplicate ids on insertion and keeps an id index for lookup.
/// Never mutated during a run; applying adjustments builds a new pool.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<Player>,
    by_id: HashMap<PlayerId, usize>,
}

impl PlayerPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from a list of players, rejecting duplicate ids.
    pub fn from_players(players: Vec<Player>) -> Result<Self, ValidationError> {
        let mut pool = Self::new();
        for player in players {
            pool.add(player)?;
        }
        Ok(pool)
    }

    /// Add a player to the pool.
    ///
    /// Fails with [`ValidationError::DuplicatePlayer`] if the id is taken.
    pub fn add(&mut self, player: Player) -> Result<(), ValidationError> {
        if self.by_id.contains_key(player.id()) {
            return Err(ValidationError::DuplicatePlayer {
                id: player.id().clone(),
            });
        }
        self.by_id.insert(player.id().clone(), self.players.len());
        self.players.push(player);
        Ok(())
    }

    /// Number of candidates in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All candidates, in insertion order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.by_id.get(id).map(|&idx| &self.players[idx])
    }

    /// Look up a player by exact name.
    ///
    /// Returns the first match; pool files occasionally carry namesakes, in
    /// which case adjustments apply to whichever the source listed first.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Number of candidates at the given position.
    #[must_use]
    pub fn count_at(&self, position: Position) -> usize {
        self.players
            .iter()
            .filter(|p| p.position() == position)
            .count()
    }

    /// Iterate over the candidates.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
