//! Auxiliary constraints checked during forward checking.
//!
//! Beyond the formula's hard clauses, a solver can carry arbitrary
//! predicates over the assignment. Each constraint declares its variable
//! scope; the solver indexes constraints per variable so a consistency check
//! only evaluates the ones touching the variable under test, and only once
//! their full scope is assigned.

use std::fmt;

use crate::formula::{Assignment, VarId};

/// A rule over the current assignment that must hold in any solution.
pub trait Constraint: fmt::Debug {
    /// The variables this constraint ranges over.
    fn variables(&self) -> &[VarId];

    /// Evaluates the constraint against an assignment covering its scope.
    fn eval(&self, assignment: &Assignment) -> bool;

    /// True iff every variable in scope is bound in `assignment`.
    ///
    /// Constraints with unassigned scope are presumed satisfiable and never
    /// block the search.
    fn is_fully_scoped(&self, assignment: &Assignment) -> bool {
        self.variables()
            .iter()
            .all(|var| assignment.contains_key(var))
    }
}

/// A [`Constraint`] backed by an arbitrary predicate closure.
pub struct PredicateConstraint<F>
where
    F: Fn(&Assignment) -> bool,
{
    vars: Vec<VarId>,
    predicate: F,
}

impl<F> PredicateConstraint<F>
where
    F: Fn(&Assignment) -> bool,
{
    pub fn new(vars: Vec<VarId>, predicate: F) -> Self {
        Self { vars, predicate }
    }
}

impl<F> Constraint for PredicateConstraint<F>
where
    F: Fn(&Assignment) -> bool,
{
    fn variables(&self) -> &[VarId] {
        &self.vars
    }

    fn eval(&self, assignment: &Assignment) -> bool {
        (self.predicate)(assignment)
    }
}

impl<F> fmt::Debug for PredicateConstraint<F>
where
    F: Fn(&Assignment) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateConstraint")
            .field("vars", &self.vars)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Constraint, PredicateConstraint};
    use crate::formula::Assignment;

    #[test]
    fn is_fully_scoped_requires_every_scope_variable() {
        let constraint = PredicateConstraint::new(vec![0, 1], |_| true);

        let mut assignment = Assignment::new();
        assignment.insert(0, true);
        assert!(!constraint.is_fully_scoped(&assignment));

        assignment.insert(1, false);
        assert!(constraint.is_fully_scoped(&assignment));
    }

    #[test]
    fn eval_sees_the_assignment_passed_in() {
        let constraint =
            PredicateConstraint::new(vec![0, 1], |a: &Assignment| a.get(&0) != a.get(&1));

        let mut assignment = Assignment::new();
        assignment.insert(0, true);
        assignment.insert(1, true);
        assert!(!constraint.eval(&assignment));

        assignment.insert(1, false);
        assert!(constraint.eval(&assignment));
    }
}
