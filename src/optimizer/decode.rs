//! Turns a solver assignment back into a [`Roster`].
//!
//! This is also where the backend's verdict is interpreted: a proven
//! infeasibility becomes [`NoSolutionError`] and is never retried, while an
//! unbounded model is reported as a solver failure since a priced squad
//! objective can never be unbounded.

use rust_decimal_macros::dec;

use crate::domain::error::{NoSolutionError, SolverError};
use crate::domain::solver::{LpSolution, SolutionStatus};
use crate::domain::{PlayerPool, Roster, SquadRole, SquadRules, SquadSlot, ValueModel};
use crate::error::Result;

use super::variables::VariableLayout;

pub(crate) fn decode_solution(
    solution: &LpSolution,
    pool: &PlayerPool,
    rules: &SquadRules,
    model: &ValueModel,
    layout: VariableLayout,
) -> Result<Roster> {
    match solution.status {
        SolutionStatus::Optimal => {}
        SolutionStatus::Infeasible => {
            return Err(NoSolutionError {
                pool_size: pool.len(),
                budget_cap: rules.budget,
            }
            .into());
        }
        SolutionStatus::Unbounded => return Err(SolverError::Unbounded.into()),
    }

    // Binary variables come back as floats near 0 or 1; split at one half.
    let threshold = dec!(0.5);

    let mut slots = Vec::with_capacity(SquadRules::SQUAD_SIZE);
    let mut captain = None;
    for (i, player) in pool.iter().enumerate() {
        if solution.values[layout.selected(i)] <= threshold {
            continue;
        }
        let starting = solution.values[layout.starting(i)] > threshold;
        let is_captain = solution.values[layout.captain(i)] > threshold;
        if is_captain {
            captain = Some(player.id().clone());
        }
        let role = if starting {
            SquadRole::Starter
        } else {
            SquadRole::Bench
        };
        slots.push(SquadSlot::new(
            player.clone(),
            role,
            is_captain,
            model.starting_value(player),
        ));
    }

    // The captaincy equality guarantees one captain in any optimal
    // assignment; its absence means the backend returned garbage.
    let Some(captain) = captain else {
        return Err(SolverError::Failure {
            status: "optimal assignment carries no captain".to_string(),
        }
        .into());
    };

    Ok(Roster::new(slots, captain, rules.budget, -solution.objective))
}
