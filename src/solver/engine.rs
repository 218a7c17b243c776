//! The branch-and-bound search engine.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    formula::{Assignment, Formula, VarId},
    solver::{
        constraint::{Constraint, PredicateConstraint},
        heuristics::{value, variable, variable::VariableOrdering},
        stats::SearchStats,
    },
};

pub type ConstraintId = usize;

/// Weight reported when no hard-clause-consistent complete assignment
/// exists. Doubles as the initial incumbent weight, so any feasible
/// assignment strictly improves on it.
pub const INFEASIBLE_WEIGHT: i64 = -1;

/// Exact solver for a weighted partial [`Formula`].
///
/// The solver owns a partial assignment, a heuristic configuration and an
/// optional set of auxiliary constraints, and performs an exhaustive
/// depth-first branch-and-bound search over the assignment space. The
/// formula is consumed purely through its evaluation primitives and never
/// mutated.
///
/// [`solve`](Self::solve) is the end-to-end entry point; the remaining
/// operations are reusable primitives for embedding the search in a
/// different traversal strategy.
pub struct Solver<'f> {
    formula: &'f Formula,
    /// Search variables in declaration order.
    variables: Vec<VarId>,
    domains: HashMap<VarId, Vec<bool>>,
    assignment: Assignment,
    constraints: Vec<Box<dyn Constraint>>,
    constraints_by_var: HashMap<VarId, Vec<ConstraintId>>,
    variable_ordering: VariableOrdering,
    use_lcv: bool,
    best_assignment: Option<Assignment>,
    best_weight: i64,
    stats: SearchStats,
}

impl<'f> Solver<'f> {
    /// Creates a solver over `formula` with every declared variable ranging
    /// over `[false, true]`.
    pub fn new(formula: &'f Formula, variable_ordering: VariableOrdering, use_lcv: bool) -> Self {
        let variables: Vec<VarId> = formula.variables().collect();
        let domains = variables
            .iter()
            .map(|&var| (var, vec![false, true]))
            .collect();

        Self {
            formula,
            variables,
            domains,
            assignment: Assignment::new(),
            constraints: Vec::new(),
            constraints_by_var: HashMap::new(),
            variable_ordering,
            use_lcv,
            best_assignment: None,
            best_weight: INFEASIBLE_WEIGHT,
            stats: SearchStats::default(),
        }
    }

    /// Boolean-flag constructor for callers configuring each heuristic
    /// individually.
    ///
    /// MRV and MCV are mutually exclusive; requesting both is a
    /// configuration error and no solver is constructed.
    pub fn with_flags(
        formula: &'f Formula,
        use_mcv: bool,
        use_mrv: bool,
        use_lcv: bool,
    ) -> Result<Self> {
        if use_mcv && use_mrv {
            return Err(Error::conflicting_heuristics());
        }
        let ordering = if use_mrv {
            VariableOrdering::MinimumRemainingValues
        } else if use_mcv {
            VariableOrdering::MostConstraining
        } else {
            VariableOrdering::DeclarationOrder
        };
        Ok(Self::new(formula, ordering, use_lcv))
    }

    pub fn formula(&self) -> &'f Formula {
        self.formula
    }

    /// The current working assignment. Empty outside of a search run.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Counters from the most recent [`solve`](Self::solve) run.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Candidate values for `var`; empty if the variable is not registered.
    pub fn domain(&self, var: VarId) -> &[bool] {
        self.domains.get(&var).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Search variables not bound in the working assignment, in declaration
    /// order.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = VarId> + '_ {
        self.variables
            .iter()
            .copied()
            .filter(|var| !self.assignment.contains_key(var))
    }

    /// Registers a variable or overrides its candidate values.
    ///
    /// Accepts any variable interned by the formula, including ones that
    /// only occur inside clauses; registering such a variable promotes it
    /// into the search.
    pub fn set_domain(&mut self, var: VarId, domain: Vec<bool>) {
        if !self.domains.contains_key(&var) {
            self.variables.push(var);
        }
        self.domains.insert(var, domain);
    }

    /// Registers an auxiliary constraint, indexing it under every variable
    /// in its scope.
    pub fn add_constraint(&mut self, constraint: impl Constraint + 'static) -> ConstraintId {
        let id = self.constraints.len();
        for &var in constraint.variables() {
            self.constraints_by_var.entry(var).or_default().push(id);
        }
        self.constraints.push(Box::new(constraint));
        id
    }

    /// Registers a predicate over the assignment, scoped to `variables`.
    pub fn add_predicate<F>(&mut self, variables: Vec<VarId>, predicate: F) -> ConstraintId
    where
        F: Fn(&Assignment) -> bool + 'static,
    {
        self.add_constraint(PredicateConstraint::new(variables, predicate))
    }

    /// Binds `var` to `value` in the working assignment.
    ///
    /// The search assigns on frame entry and unassigns on every exit path;
    /// callers embedding these primitives in their own traversal must keep
    /// the same stack discipline.
    pub fn assign(&mut self, var: VarId, value: bool) {
        self.assignment.insert(var, value);
    }

    /// Removes `var` from the working assignment.
    pub fn unassign(&mut self, var: VarId) {
        self.assignment.remove(&var);
    }

    /// Speculatively checks whether binding `var` to `value` is compatible
    /// with every constraint that the resulting assignment fully determines.
    ///
    /// Hard clauses and auxiliary constraints with unassigned variables in
    /// scope are presumed satisfiable and never block. Non-mutating: works
    /// on a scratch copy of the assignment.
    pub fn is_consistent(&self, var: VarId, value: bool) -> bool {
        let mut scratch = self.assignment.clone();
        scratch.insert(var, value);

        for clause in self.formula.hard_clauses() {
            if clause.is_fully_assigned(&scratch) && !clause.is_satisfied(&scratch) {
                return false;
            }
        }

        if let Some(ids) = self.constraints_by_var.get(&var) {
            for &id in ids {
                let constraint = &self.constraints[id];
                if constraint.is_fully_scoped(&scratch) && !constraint.eval(&scratch) {
                    return false;
                }
            }
        }

        true
    }

    /// True iff every search variable is assigned.
    pub fn is_complete(&self) -> bool {
        self.variables
            .iter()
            .all(|var| self.assignment.contains_key(var))
    }

    /// Picks the next variable to branch on according to the configured
    /// ordering, falling back to declaration order when the heuristic
    /// yields nothing.
    pub fn select_unassigned_variable(&self) -> Option<VarId> {
        let chosen = match self.variable_ordering {
            VariableOrdering::MinimumRemainingValues => variable::minimum_remaining_values(self),
            VariableOrdering::MostConstraining => variable::most_constraining(self),
            VariableOrdering::DeclarationOrder => None,
        };
        chosen.or_else(|| self.unassigned_variables().next())
    }

    /// The value whose assignment would violate the fewest hard clauses,
    /// preferring `true` on ties.
    pub fn least_constraining_value(&self, var: VarId) -> bool {
        value::least_constraining_value(self, var)
    }

    /// Admissible upper bound on the total weight reachable from
    /// `assignment`.
    ///
    /// Fully assigned soft clauses count their weight iff satisfied; every
    /// other soft clause counts in full, optimistically assumed satisfiable.
    /// The bound never under-counts the weight of any completion, so pruning
    /// on it is safe; it can over-count when a partially assigned clause is
    /// in fact already lost, which only costs pruning power.
    pub fn optimistic_bound(&self, assignment: &Assignment) -> i64 {
        self.formula
            .soft_clauses()
            .iter()
            .map(|soft| {
                if soft.clause().is_fully_assigned(assignment) {
                    if soft.clause().is_satisfied(assignment) {
                        soft.weight()
                    } else {
                        0
                    }
                } else {
                    soft.weight()
                }
            })
            .sum()
    }

    /// Runs the exhaustive branch-and-bound search.
    ///
    /// Returns the best complete assignment satisfying every hard clause
    /// together with its total soft weight, or `(None, INFEASIBLE_WEIGHT)`
    /// when no such assignment exists. The working assignment is empty
    /// again when this returns, and the search statistics are reset at
    /// entry.
    pub fn solve(&mut self) -> (Option<Assignment>, i64) {
        self.best_assignment = None;
        self.best_weight = INFEASIBLE_WEIGHT;
        self.assignment = Assignment::new();
        self.stats = SearchStats::default();

        self.backtrack();

        debug!(
            best_weight = self.best_weight,
            nodes = self.stats.nodes_visited,
            "search finished"
        );
        (self.best_assignment.clone(), self.best_weight)
    }

    fn backtrack(&mut self) {
        self.stats.nodes_visited += 1;

        // Forward checking: a fully assigned hard clause that is unsatisfied
        // cannot be repaired further down this branch.
        let conflicted = self.formula.hard_clauses().iter().any(|clause| {
            clause.is_fully_assigned(&self.assignment) && !clause.is_satisfied(&self.assignment)
        });
        if conflicted {
            self.stats.hard_conflict_prunes += 1;
            return;
        }

        // Branch and bound: a branch that at best ties the incumbent is not
        // worth exploring.
        if self.optimistic_bound(&self.assignment) <= self.best_weight {
            self.stats.bound_prunes += 1;
            trace!(depth = self.assignment.len(), "bound prune");
            return;
        }

        if self.is_complete() {
            let weight = self.formula.total_weight(&self.assignment);
            if weight > self.best_weight {
                self.best_weight = weight;
                self.best_assignment = Some(self.assignment.clone());
                self.stats.incumbents += 1;
                debug!(weight, "new incumbent");
            }
            return;
        }

        let Some(var) = self.select_unassigned_variable() else {
            return;
        };

        let preferred = if self.use_lcv {
            self.least_constraining_value(var)
        } else {
            true
        };

        for candidate in [preferred, !preferred] {
            if !self.domain(var).contains(&candidate) {
                continue;
            }
            self.stats.consistency_checks += 1;
            if self.is_consistent(var, candidate) {
                self.assign(var, candidate);
                self.backtrack();
                self.unassign(var);
            }
        }
        self.stats.backtracks += 1;
    }
}
