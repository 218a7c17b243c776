//! Variable-ordering strategies for the branch-and-bound search.

use crate::{formula::VarId, solver::engine::Solver};

/// Strategy for choosing which unassigned variable to branch on next.
///
/// MRV and MCV are alternatives, not composable flags; making the choice an
/// enum keeps the conflicting combination unrepresentable. The boolean-flag
/// constructor [`Solver::with_flags`] still rejects it at run time for
/// callers configuring heuristics individually.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VariableOrdering {
    /// First unassigned variable in declaration order.
    #[default]
    DeclarationOrder,
    /// Minimum remaining values: the variable with the fewest candidate
    /// values that survive a consistency check. A fail-first strategy.
    MinimumRemainingValues,
    /// Most constraining variable: the one appearing in the greatest number
    /// of hard clauses not yet satisfied by the current assignment alone.
    MostConstraining,
}

/// Minimum-remaining-values selection.
///
/// The comparison is strict, so among equally constrained variables the one
/// declared first wins.
pub(crate) fn minimum_remaining_values(solver: &Solver<'_>) -> Option<VarId> {
    let mut selected: Option<(VarId, usize)> = None;
    for var in solver.unassigned_variables() {
        let legal = solver
            .domain(var)
            .iter()
            .filter(|&&value| solver.is_consistent(var, value))
            .count();
        if selected.map_or(true, |(_, min)| legal < min) {
            selected = Some((var, legal));
        }
    }
    selected.map(|(var, _)| var)
}

/// Most-constraining-variable selection.
///
/// Degree counts hard clauses mentioning the variable in either polarity,
/// skipping clauses the current assignment already satisfies. Ties keep the
/// first variable in declaration order.
pub(crate) fn most_constraining(solver: &Solver<'_>) -> Option<VarId> {
    let mut selected: Option<(VarId, usize)> = None;
    for var in solver.unassigned_variables() {
        let degree = solver
            .formula()
            .hard_clauses()
            .iter()
            .filter(|clause| !clause.is_satisfied(solver.assignment()))
            .filter(|clause| clause.mentions(var))
            .count();
        if selected.map_or(true, |(_, max)| degree > max) {
            selected = Some((var, degree));
        }
    }
    selected.map(|(var, _)| var)
}
