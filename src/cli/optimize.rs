//! Handler for the `optimize` command.
//!
//! Loads configuration and pool, applies availability adjustments, runs the
//! solver behind a spinner, and renders the squad as a table or as a single
//! roster document under `--json`.

use std::cmp::Reverse;
use std::path::Path;

use tabled::{Table, Tabled};

use crate::cli::command::OptimizeArgs;
use crate::cli::{output, paths};
use crate::config::Config;
use crate::domain::solver::Solver;
use crate::domain::{PlayerPool, Roster, RosterDocument, SquadRole, SquadSlot};
use crate::error::Result;
use crate::optimizer::SquadOptimizer;
use crate::source::{load_pool, save_roster, Adjustments};

/// One row of the rendered roster table.
#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "Pos")]
    position: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Club")]
    club: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "C")]
    captain: &'static str,
}

impl RosterRow {
    fn from_slot(slot: &SquadSlot) -> Self {
        Self {
            position: slot.player().position().code(),
            name: slot.player().name().to_string(),
            club: slot.player().club().to_string(),
            price: slot.player().price().to_string(),
            value: slot.value().round_dp(1).to_string(),
            role: match slot.role() {
                SquadRole::Starter => "XI",
                SquadRole::Bench => "bench",
            },
            captain: if slot.is_captain() { "(C)" } else { "" },
        }
    }
}

/// Execute `optimize`.
pub fn execute(args: OptimizeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.init_logging();

    let mut rules = config.squad.clone();
    if let Some(budget) = args.budget {
        rules.budget = budget;
    }
    let mut model = config.scoring;
    if let Some(bench_fraction) = args.bench_fraction {
        model.bench_fraction = bench_fraction;
    }

    let optimizer = SquadOptimizer::new(rules, model)?;

    if !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
    }

    let pool = load_pool(&args.pool)?;
    let (pool, applied) = match &args.adjustments {
        Some(path) => {
            let adjustments = Adjustments::load(path)?;
            adjustments.apply(&pool)?
        }
        None => (pool, 0),
    };

    let solver = config.solver.solver();
    let roster = solve(&optimizer, &pool, &solver)?;

    let document = roster.to_document();
    if let Some(save_path) = &args.save {
        save_roster(save_path, &document)?;
    }

    render(&roster, &document, applied, args.save.as_deref())
}

/// Resolve the effective configuration for this run.
///
/// An explicit `-c` path must load; the default path is used only when the
/// file exists, and built-in defaults apply otherwise.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let default = paths::default_config();
            if default.exists() {
                Config::load(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Run the optimizer behind a spinner in human mode.
fn solve<S: Solver>(optimizer: &SquadOptimizer, pool: &PlayerPool, solver: &S) -> Result<Roster> {
    // JSON mode keeps stdout to the single roster document.
    if output::is_json() {
        return optimizer.optimize(pool, solver);
    }

    let spinner = output::spinner(&format!("Optimizing over {} candidates", pool.len()));
    match optimizer.optimize(pool, solver) {
        Ok(roster) => {
            output::spinner_success(
                &spinner,
                &format!("Solved a {} squad", roster.formation_label()),
            );
            Ok(roster)
        }
        Err(error) => {
            output::spinner_fail(&spinner, "Optimization failed");
            Err(error)
        }
    }
}

/// Render the squad: a table plus summary fields, or one JSON document.
fn render(
    roster: &Roster,
    document: &RosterDocument,
    applied: usize,
    saved: Option<&Path>,
) -> Result<()> {
    if output::is_json() {
        output::json_output(serde_json::to_value(document)?);
        return Ok(());
    }

    let mut slots: Vec<&SquadSlot> = roster.slots().iter().collect();
    slots.sort_by_key(|slot| (slot.role(), slot.player().position(), Reverse(slot.value())));

    output::section(&format!("Optimal squad ({})", roster.formation_label()));
    let rows: Vec<RosterRow> = slots.iter().map(|slot| RosterRow::from_slot(slot)).collect();
    let table = Table::new(rows).to_string();
    output::lines(&table);

    let captain = roster
        .captain_slot()
        .map(|slot| slot.player().name().to_string())
        .unwrap_or_default();

    output::section("Summary");
    output::field("Captain", captain);
    output::field("Total cost", roster.total_cost().round_dp(1));
    output::field("Budget", roster.budget_cap().round_dp(1));
    output::field(
        "Headroom",
        output::positive(roster.headroom().round_dp(1)),
    );
    output::field(
        "Projected",
        format!("{} pts", roster.projected_points().round_dp(1)),
    );

    if applied > 0 {
        output::note(&format!("{applied} availability adjustments applied"));
    }
    if let Some(path) = saved {
        output::success(&format!("Roster saved to {}", path.display()));
    }

    Ok(())
}
