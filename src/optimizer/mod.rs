//! Squad optimization: assembles the integer program, hands it to a
//! [`Solver`], and decodes the assignment into a [`Roster`].
//!
//! The model carries three booleans per candidate (selected, starting,
//! captain) tied together by linking rows, so one solve picks the fifteen,
//! the lineup, and the armband together. See [`constraints`] for the full
//! row set and [`objective`] for the value linearization.

mod constraints;
mod decode;
mod objective;
mod variables;

use tracing::{debug, info};

use crate::domain::error::{InfeasibleConfigurationError, NoSolutionError};
use crate::domain::solver::{IlpProblem, LpProblem, Solver};
use crate::domain::{PlayerPool, Position, Roster, SquadRules, ValueModel};
use crate::error::Result;

use self::constraints::build_constraints;
use self::decode::decode_solution;
use self::objective::build_objective;
use self::variables::VariableLayout;

/// One-shot squad optimizer for a fixed rule set and value model.
///
/// Construction validates the rules, so a held optimizer always describes a
/// satisfiable squad shape. Solve-time failures are then about the pool.
#[derive(Debug, Clone)]
pub struct SquadOptimizer {
    rules: SquadRules,
    value_model: ValueModel,
}

impl SquadOptimizer {
    /// Create an optimizer, rejecting self-contradictory rules up front.
    pub fn new(
        rules: SquadRules,
        value_model: ValueModel,
    ) -> std::result::Result<Self, InfeasibleConfigurationError> {
        rules.validate()?;
        Ok(Self { rules, value_model })
    }

    /// The validated rules this optimizer enforces.
    #[must_use]
    pub fn rules(&self) -> &SquadRules {
        &self.rules
    }

    /// The value model scoring each candidate.
    #[must_use]
    pub fn value_model(&self) -> &ValueModel {
        &self.value_model
    }

    /// Pick the optimal squad from `pool`.
    ///
    /// Returns [`NoSolutionError`] when the pool cannot fill a legal squad,
    /// either proven by the backend or evident from the position counts.
    pub fn optimize<S: Solver>(&self, pool: &PlayerPool, solver: &S) -> Result<Roster> {
        self.check_pool(pool)?;

        let layout = VariableLayout::new(pool.len());
        let mut lp = LpProblem::new(layout.num_vars());
        lp.objective = build_objective(pool, &self.value_model, layout);
        lp.constraints = build_constraints(pool, &self.rules, layout);
        let num_constraints = lp.constraints.len();
        let problem = IlpProblem::all_binary(lp);

        debug!(
            players = pool.len(),
            variables = layout.num_vars(),
            constraints = num_constraints,
            "assembled squad model"
        );

        let solution = solver.solve_ilp(&problem)?;
        let roster = decode_solution(&solution, pool, &self.rules, &self.value_model, layout)?;

        info!(
            solver = solver.name(),
            formation = %roster.formation_label(),
            captain = %roster.captain(),
            cost = %roster.total_cost(),
            points = %roster.projected_points(),
            "optimized squad"
        );
        Ok(roster)
    }

    /// Cheap counting gate before the solve.
    ///
    /// The backend would prove these infeasible anyway; catching them here
    /// gives the same error without a solver round-trip and covers the empty
    /// pool, which builds a degenerate zero-variable model.
    fn check_pool(&self, pool: &PlayerPool) -> Result<()> {
        let mut short = pool.len() < SquadRules::SQUAD_SIZE;
        for position in Position::ALL {
            if pool.count_at(position) < self.rules.composition.target(position) {
                short = true;
            }
        }
        if short {
            return Err(NoSolutionError {
                pool_size: pool.len(),
                budget_cap: self.rules.budget,
            }
            .into());
        }
        Ok(())
    }
}
