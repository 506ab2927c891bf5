//! Objective coefficients for the roster model.
//!
//! Projected squad value is linear in the three booleans once split into
//! increments: selecting a player earns their bench value, promoting them to
//! the lineup adds the difference up to their starting value, and the
//! captaincy adds the starting value once more. The backend minimises, so
//! every coefficient is negated here and the decoder negates the optimum
//! back.

use rust_decimal::Decimal;

use crate::domain::{PlayerPool, ValueModel};

use super::variables::VariableLayout;

pub(crate) fn build_objective(
    pool: &PlayerPool,
    model: &ValueModel,
    layout: VariableLayout,
) -> Vec<Decimal> {
    let mut objective = vec![Decimal::ZERO; layout.num_vars()];
    for (i, player) in pool.iter().enumerate() {
        let starting = model.starting_value(player);
        let bench = model.bench_value(player);
        objective[layout.selected(i)] = -bench;
        objective[layout.starting(i)] = -(starting - bench);
        objective[layout.captain(i)] = -model.captain_bonus(player);
    }
    objective
}
