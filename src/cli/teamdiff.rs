//! Handler for the `teamdiff` command.
//!
//! Loads two saved roster documents, scores their ownership-weighted overlap
//! against a pool, and prints the result.

use serde_json::json;

use crate::cli::command::TeamdiffArgs;
use crate::cli::output;
use crate::domain::{roster_similarity, shared_ids, PlayerId};
use crate::error::Result;
use crate::source::{load_pool, load_roster};

/// Execute `teamdiff`.
pub fn execute(args: TeamdiffArgs) -> Result<()> {
    let document_a = load_roster(&args.roster_a)?;
    let document_b = load_roster(&args.roster_b)?;
    let pool = load_pool(&args.pool)?;

    let ids_a = document_a.player_ids();
    let ids_b = document_b.player_ids();

    let score = roster_similarity(&ids_a, &ids_b, &pool);
    let shared = shared_ids(&ids_a, &ids_b);

    if output::is_json() {
        output::json_output(json!({
            "command": "teamdiff",
            "roster_a": args.roster_a.display().to_string(),
            "roster_b": args.roster_b.display().to_string(),
            "similarity": score,
            "shared": shared.iter().map(PlayerId::as_str).collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Roster similarity");
    output::field("Roster A", args.roster_a.display());
    output::field("Roster B", args.roster_b.display());
    output::field("Similarity", output::highlight(format!("{score:.3}")));
    output::field("Shared", format!("{} of {}", shared.len(), ids_a.len()));

    if output::verbosity() > 0 && !shared.is_empty() {
        output::section("Shared players");
        for id in &shared {
            match pool.get(id) {
                Some(player) => output::note(&format!(
                    "{} ({}, {})",
                    player.name(),
                    player.position().code(),
                    player.club()
                )),
                None => output::note(id.as_str()),
            }
        }
    } else if !shared.is_empty() {
        output::hint("rerun with -v to list the shared players");
    }

    Ok(())
}
