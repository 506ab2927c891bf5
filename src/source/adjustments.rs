//! Availability adjustments: a small CSV overriding availability by name.
//!
//! Produced by `adjustments export` from a pool with trusted availability
//! data, consumed by `optimize --adjustments` before a pool from a source
//! without it is optimized. The file is `name,availability` with a header
//! row; factors are fractions in [0, 1].

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::error::ValidationError;
use crate::domain::{Player, PlayerPool};
use crate::error::Result;

/// Parsed availability overrides, in file order.
#[derive(Debug, Clone, Default)]
pub struct Adjustments {
    overrides: Vec<(String, Decimal)>,
}

impl Adjustments {
    /// Load an adjustments file.
    pub fn load(path: &Path) -> Result<Self> {
        let adjustments = Self::from_reader(File::open(path)?)?;
        info!(
            overrides = adjustments.len(),
            path = %path.display(),
            "loaded adjustments"
        );
        Ok(adjustments)
    }

    fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(rdr);
        let mut overrides = Vec::new();
        for (i, result) in reader.records().enumerate() {
            // The header occupies line 1.
            let line = i + 2;
            let malformed = |reason: String| ValidationError::MalformedAdjustment { line, reason };

            let record = result.map_err(|err| malformed(err.to_string()))?;
            if record.len() != 2 {
                return Err(malformed(format!("expected 2 columns, got {}", record.len())).into());
            }
            let name = record[0].trim().to_string();
            if name.is_empty() {
                return Err(malformed("empty player name".to_string()).into());
            }
            let availability: Decimal = record[1]
                .trim()
                .parse()
                .map_err(|err| malformed(format!("bad availability {:?}: {err}", &record[1])))?;
            if availability < Decimal::ZERO || availability > Decimal::ONE {
                return Err(
                    malformed(format!("availability {availability} outside [0, 1]")).into(),
                );
            }
            overrides.push((name, availability));
        }
        Ok(Self { overrides })
    }

    /// Number of overrides in the file.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether the file had no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Apply the overrides to a pool, producing a new pool.
    ///
    /// Overrides match players by exact name. Names not present in the pool
    /// are logged at warn level and skipped. Returns the new pool and the
    /// number of overrides applied.
    pub fn apply(&self, pool: &PlayerPool) -> Result<(PlayerPool, usize)> {
        let mut players: Vec<Player> = pool.players().to_vec();
        let mut applied = 0;
        for (name, availability) in &self.overrides {
            match players.iter_mut().find(|p| p.name() == name) {
                Some(player) => {
                    *player = player.with_availability(*availability)?;
                    applied += 1;
                }
                None => warn!(player = %name, "adjustment for unknown player skipped"),
            }
        }
        let adjusted = PlayerPool::from_players(players)?;
        info!(applied, total = self.len(), "applied availability adjustments");
        Ok((adjusted, applied))
    }
}

/// Write the adjustments CSV for every player with availability below 1.
///
/// Returns the number of players written.
pub fn export_adjustments<W: Write>(pool: &PlayerPool, writer: W) -> Result<usize> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["name", "availability"])?;
    let mut written = 0;
    for player in pool.iter() {
        if player.availability() < Decimal::ONE {
            let availability = player.availability().to_string();
            w.write_record([player.name(), availability.as_str()])?;
            written += 1;
        }
    }
    w.flush()?;
    Ok(written)
}
