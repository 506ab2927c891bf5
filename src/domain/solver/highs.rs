//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming
//! solver. This implementation wraps it using the good_lp crate for ergonomic
//! Rust usage.

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{ConstraintSense, IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};
use crate::domain::error::SolverError;

/// HiGHS-based ILP solver.
///
/// Stateless apart from its options; one instance can serve any number of
/// runs.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver {
    time_limit: Option<f64>,
}

impl HiGHSSolver {
    /// Create a new HiGHS solver instance with no time limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver that gives up after `seconds` of wall time.
    ///
    /// Hitting the limit surfaces as [`SolverError::Failure`] with the
    /// backend's status text; no partial solution is returned.
    #[must_use]
    pub fn with_time_limit(seconds: f64) -> Self {
        Self {
            time_limit: Some(seconds),
        }
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution, SolverError> {
        solve_with_good_lp(&problem.lp, &problem.integer_vars, self.time_limit)
    }
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(
    problem: &LpProblem,
    integer_vars: &[usize],
    time_limit: Option<f64>,
) -> Result<LpSolution, SolverError> {
    let n = problem.num_vars();

    // Handle empty problem
    if n == 0 {
        return Ok(LpSolution {
            values: vec![],
            objective: Decimal::ZERO,
            status: SolutionStatus::Optimal,
        });
    }

    // Create variables
    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for (i, bounds) in problem.bounds.iter().enumerate() {
        let mut v = variable();

        // Apply bounds
        if let Some(lb) = bounds.lower {
            v = v.min(lb.to_f64().unwrap_or(0.0));
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
        }

        // Mark as integer if needed
        if integer_vars.contains(&i) {
            v = v.integer();
        }

        var_list.push(vars.add(v));
    }

    // Build objective function
    let objective: Expression = var_list
        .iter()
        .zip(problem.objective.iter())
        .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
        .sum();

    // Start building the model. The banner HiGHS prints by default would
    // interleave with CLI output, so keep it quiet.
    let mut model = vars.minimise(&objective).using(highs);
    model.set_verbose(false);
    if let Some(limit) = time_limit {
        model = model.set_time_limit(limit);
    }

    // Add constraints
    for constr in &problem.constraints {
        let lhs: Expression = var_list
            .iter()
            .zip(constr.coefficients.iter())
            .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
            .sum();

        let rhs = constr.rhs.to_f64().unwrap_or(0.0);

        match constr.sense {
            ConstraintSense::GreaterEqual => {
                model = model.with(constraint!(lhs >= rhs));
            }
            ConstraintSense::LessEqual => {
                model = model.with(constraint!(lhs <= rhs));
            }
            ConstraintSense::Equal => {
                model = model.with(constraint!(lhs == rhs));
            }
        }
    }

    // Solve
    match model.solve() {
        Ok(solution) => {
            let values: Vec<Decimal> = var_list
                .iter()
                .map(|v| Decimal::try_from(solution.value(*v)).unwrap_or(Decimal::ZERO))
                .collect();

            // Re-evaluate the objective over Decimal values; the backend's
            // f64 optimum carries float noise the caller should not see.
            let objective: Decimal = values
                .iter()
                .zip(problem.objective.iter())
                .map(|(v, c)| *v * *c)
                .sum();

            Ok(LpSolution {
                values,
                objective,
                status: SolutionStatus::Optimal,
            })
        }
        Err(ResolutionError::Infeasible) => Ok(LpSolution {
            values: vec![],
            objective: Decimal::ZERO,
            status: SolutionStatus::Infeasible,
        }),
        Err(ResolutionError::Unbounded) => Ok(LpSolution {
            values: vec![],
            objective: Decimal::ZERO,
            status: SolutionStatus::Unbounded,
        }),
        Err(err) => Err(SolverError::Failure {
            status: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solver::{Constraint, VariableBounds};
    use rust_decimal_macros::dec;

    #[test]
    fn test_solver_name() {
        let solver = HiGHSSolver::new();
        assert_eq!(solver.name(), "highs");
    }

    #[test]
    fn test_binary_ilp() {
        // Minimize: -x - y (maximize x + y)
        // Subject to: x + y <= 1
        //            x, y in {0, 1}
        let solver = HiGHSSolver::new();

        let lp = LpProblem {
            objective: vec![-Decimal::ONE, -Decimal::ONE],
            constraints: vec![Constraint::leq(
                vec![Decimal::ONE, Decimal::ONE],
                Decimal::ONE,
            )],
            bounds: vec![VariableBounds::binary(); 2],
        };

        let ilp = IlpProblem::all_binary(lp);
        let solution = solver.solve_ilp(&ilp).unwrap();

        assert!(solution.is_optimal());
        // Optimal: one variable is 1, the other is 0
        let sum: Decimal = solution.values.iter().sum();
        assert!(
            (sum - Decimal::ONE).abs() < dec!(0.01),
            "Sum should be 1, got {}",
            sum
        );
        assert!((solution.objective + Decimal::ONE).abs() < dec!(0.01));
    }

    #[test]
    fn test_relaxation_allows_fractional_values() {
        // Minimize: x subject to x >= 0.5, x in [0, 1] but NOT integer.
        let solver = HiGHSSolver::new();

        let lp = LpProblem {
            objective: vec![Decimal::ONE],
            constraints: vec![Constraint::geq(vec![Decimal::ONE], dec!(0.5))],
            bounds: vec![VariableBounds::binary()],
        };

        let solution = solver.solve_ilp(&IlpProblem::new(lp, vec![])).unwrap();

        assert!(solution.is_optimal());
        assert!(
            (solution.values[0] - dec!(0.5)).abs() < dec!(0.01),
            "x should be ~0.5, got {}",
            solution.values[0]
        );
    }

    #[test]
    fn test_equality_constraint() {
        // Minimize: x
        // Subject to: x + y = 2
        //            x, y >= 0
        let solver = HiGHSSolver::new();

        let lp = LpProblem {
            objective: vec![Decimal::ONE, Decimal::ZERO],
            constraints: vec![Constraint::eq(vec![Decimal::ONE, Decimal::ONE], dec!(2))],
            bounds: vec![VariableBounds::default(); 2],
        };

        let solution = solver.solve_ilp(&IlpProblem::new(lp, vec![])).unwrap();

        assert!(solution.is_optimal());
        // Optimal: x=0, y=2
        assert!(
            solution.values[0].abs() < dec!(0.01),
            "x should be ~0, got {}",
            solution.values[0]
        );
        assert!(
            (solution.values[1] - dec!(2)).abs() < dec!(0.01),
            "y should be ~2, got {}",
            solution.values[1]
        );
    }

    #[test]
    fn test_infeasible_is_a_status_not_an_error() {
        // x in {0, 1} with x >= 2 has no solution.
        let solver = HiGHSSolver::new();

        let lp = LpProblem {
            objective: vec![Decimal::ONE],
            constraints: vec![Constraint::geq(vec![Decimal::ONE], dec!(2))],
            bounds: vec![VariableBounds::binary()],
        };

        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert_eq!(solution.status, SolutionStatus::Infeasible);
        assert!(solution.values.is_empty());
    }

    #[test]
    fn test_empty_problem() {
        let solver = HiGHSSolver::new();
        let solution = solver
            .solve_ilp(&IlpProblem::all_binary(LpProblem::new(0)))
            .unwrap();

        assert!(solution.is_optimal());
        assert!(solution.values.is_empty());
    }

    #[test]
    fn test_time_limit_does_not_break_small_solves() {
        let solver = HiGHSSolver::with_time_limit(10.0);

        let lp = LpProblem {
            objective: vec![-Decimal::ONE],
            constraints: vec![],
            bounds: vec![VariableBounds::binary()],
        };

        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();
        assert!(solution.is_optimal());
        assert!(
            (solution.values[0] - Decimal::ONE).abs() < dec!(0.01),
            "x should be ~1, got {}",
            solution.values[0]
        );
    }
}
