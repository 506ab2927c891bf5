//! Saved roster documents on disk.

use std::path::Path;

use tracing::info;

use crate::domain::RosterDocument;
use crate::error::Result;

/// Write a roster document as pretty-printed JSON.
pub fn save_roster(path: &Path, document: &RosterDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "saved roster document");
    Ok(())
}

/// Read a roster document saved by [`save_roster`].
pub fn load_roster(path: &Path) -> Result<RosterDocument> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
