//! Player pool loading.
//!
//! Reads pool files exported from the supported fantasy platforms. The two
//! export shapes disagree on field names and on whether fractions are 0-1 or
//! 0-100, so rows land in a loosely-typed record first (serde aliases, both
//! scalings) and only become [`Player`]s after validation.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::domain::error::ValidationError;
use crate::domain::{Player, PlayerId, PlayerPool, Position};
use crate::error::Result;

/// One pool row as the platforms spell it. Extra columns are absorbed and
/// ignored.
#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "player", alias = "web_name")]
    name: String,
    #[serde(alias = "team")]
    club: String,
    #[serde(alias = "element_type")]
    position: String,
    #[serde(alias = "cost", alias = "now_cost")]
    price: Decimal,
    #[serde(alias = "total_points", alias = "value", alias = "score")]
    points: Decimal,
    #[serde(default, alias = "chance_of_playing", deserialize_with = "blank_optional")]
    availability: Option<Decimal>,
    #[serde(default, alias = "selected_by_percent", deserialize_with = "blank_optional")]
    ownership: Option<Decimal>,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Optional decimal that also treats a blank CSV cell as absent.
fn blank_optional<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(Decimal),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse::<Decimal>()
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}

/// Fractions above 1 are percentages; one platform reports 0-100.
fn scale_fraction(value: Decimal) -> Decimal {
    if value > Decimal::ONE {
        value / Decimal::from(100)
    } else {
        value
    }
}

impl RawPlayer {
    fn into_player(self, row: usize) -> std::result::Result<Player, ValidationError> {
        let malformed = |reason: String| ValidationError::MalformedRecord { row, reason };

        let position: Position = self
            .position
            .parse()
            .map_err(|err: ValidationError| malformed(err.to_string()))?;
        let id = match self.id {
            Some(id) => PlayerId::new(id),
            None => PlayerId::from_name(&self.name),
        };
        let availability = self.availability.map(scale_fraction).unwrap_or(Decimal::ONE);
        let ownership = self.ownership.map(scale_fraction);

        Player::try_new(
            id,
            self.name.trim(),
            self.club.trim(),
            position,
            self.price,
            self.points,
            availability,
            ownership,
        )
        .map_err(|err| malformed(err.to_string()))
    }
}

fn pool_from_csv<R: Read>(rdr: R) -> Result<PlayerPool> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut pool = PlayerPool::new();
    for (i, result) in reader.deserialize::<RawPlayer>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|err| ValidationError::MalformedRecord {
            row,
            reason: err.to_string(),
        })?;
        pool.add(raw.into_player(row)?)?;
    }
    Ok(pool)
}

fn pool_from_json(text: &str) -> Result<PlayerPool> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(text)?;
    let mut pool = PlayerPool::new();
    for (i, value) in rows.into_iter().enumerate() {
        let row = i + 1;
        let raw: RawPlayer =
            serde_json::from_value(value).map_err(|err| ValidationError::MalformedRecord {
                row,
                reason: err.to_string(),
            })?;
        pool.add(raw.into_player(row)?)?;
    }
    Ok(pool)
}

/// Load a player pool from a `.csv` or `.json` file.
pub fn load_pool(path: &Path) -> Result<PlayerPool> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let pool = match extension.as_deref() {
        Some("csv") => pool_from_csv(File::open(path)?)?,
        Some("json") => pool_from_json(&std::fs::read_to_string(path)?)?,
        _ => {
            return Err(ValidationError::UnsupportedFormat {
                path: path.display().to_string(),
            }
            .into());
        }
    };
    info!(players = pool.len(), path = %path.display(), "loaded player pool");
    Ok(pool)
}
