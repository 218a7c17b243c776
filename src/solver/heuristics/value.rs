//! Value-ordering for the branch-and-bound search.

use crate::{formula::VarId, solver::engine::Solver};

/// Number of hard clauses that become fully assigned and violated if `var`
/// takes `value` on top of the current assignment.
fn violation_count(solver: &Solver<'_>, var: VarId, value: bool) -> usize {
    let mut scratch = solver.assignment().clone();
    scratch.insert(var, value);

    solver
        .formula()
        .hard_clauses()
        .iter()
        .filter(|clause| clause.is_fully_assigned(&scratch) && !clause.is_satisfied(&scratch))
        .count()
}

/// Least-constraining-value choice: the value with the lower violation
/// count, preferring `true` on ties.
pub(crate) fn least_constraining_value(solver: &Solver<'_>, var: VarId) -> bool {
    violation_count(solver, var, true) <= violation_count(solver, var, false)
}
