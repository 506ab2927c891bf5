//! Linear constraints tying the squad variables to the selection rules.

use rust_decimal::Decimal;

use crate::domain::solver::Constraint;
use crate::domain::{PlayerPool, Position, SquadRules};

use super::variables::VariableLayout;

/// Builds the complete constraint set for a pool under `rules`.
///
/// Emits, in order: one composition equality per position, the budget cap,
/// the starting-eleven total, the starting-keeper equality, formation bounds
/// for each outfield position, the per-player linking rows, and the single
/// captaincy row.
pub(crate) fn build_constraints(
    pool: &PlayerPool,
    rules: &SquadRules,
    layout: VariableLayout,
) -> Vec<Constraint> {
    let n = layout.players();
    let mut constraints = Vec::with_capacity(14 + 2 * n);

    // Squad composition: exactly `target` selected per position.
    for position in Position::ALL {
        let mut coefficients = vec![Decimal::ZERO; layout.num_vars()];
        for (i, player) in pool.iter().enumerate() {
            if player.position() == position {
                coefficients[layout.selected(i)] = Decimal::ONE;
            }
        }
        let target = Decimal::from(rules.composition.target(position));
        constraints.push(Constraint::eq(coefficients, target));
    }

    // Budget: total price of the selected fifteen stays within the cap.
    let mut budget = vec![Decimal::ZERO; layout.num_vars()];
    for (i, player) in pool.iter().enumerate() {
        budget[layout.selected(i)] = player.price();
    }
    constraints.push(Constraint::leq(budget, rules.budget));

    // Exactly eleven starters.
    let mut starters = vec![Decimal::ZERO; layout.num_vars()];
    for i in 0..n {
        starters[layout.starting(i)] = Decimal::ONE;
    }
    constraints.push(Constraint::eq(
        starters,
        Decimal::from(SquadRules::STARTING_SIZE),
    ));

    // Exactly one starting keeper.
    let mut keepers = vec![Decimal::ZERO; layout.num_vars()];
    for (i, player) in pool.iter().enumerate() {
        if player.position() == Position::Goalkeeper {
            keepers[layout.starting(i)] = Decimal::ONE;
        }
    }
    constraints.push(Constraint::eq(keepers, Decimal::ONE));

    // Formation bounds on the outfield starters.
    for position in Position::OUTFIELD {
        let Some(range) = rules.formation.range(position) else {
            continue;
        };
        let mut row = vec![Decimal::ZERO; layout.num_vars()];
        for (i, player) in pool.iter().enumerate() {
            if player.position() == position {
                row[layout.starting(i)] = Decimal::ONE;
            }
        }
        constraints.push(Constraint::geq(row.clone(), Decimal::from(range.min)));
        constraints.push(Constraint::leq(row, Decimal::from(range.max)));
    }

    // Linking: a starter must be selected, a captain must start.
    for i in 0..n {
        let mut starts_selected = vec![Decimal::ZERO; layout.num_vars()];
        starts_selected[layout.starting(i)] = Decimal::ONE;
        starts_selected[layout.selected(i)] = -Decimal::ONE;
        constraints.push(Constraint::leq(starts_selected, Decimal::ZERO));

        let mut captain_starts = vec![Decimal::ZERO; layout.num_vars()];
        captain_starts[layout.captain(i)] = Decimal::ONE;
        captain_starts[layout.starting(i)] = -Decimal::ONE;
        constraints.push(Constraint::leq(captain_starts, Decimal::ZERO));
    }

    // Exactly one captain.
    let mut captains = vec![Decimal::ZERO; layout.num_vars()];
    for i in 0..n {
        captains[layout.captain(i)] = Decimal::ONE;
    }
    constraints.push(Constraint::eq(captains, Decimal::ONE));

    constraints
}
