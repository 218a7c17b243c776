//! Pondus is an exact solver for weighted partial satisfiability problems.
//!
//! Given a set of boolean variables, a set of *hard* clauses that must all
//! hold and a set of weighted *soft* clauses, the solver finds a complete
//! assignment that satisfies every hard clause while maximizing the total
//! weight of the satisfied soft clauses. The search is an exhaustive
//! depth-first branch-and-bound traversal with forward checking and
//! configurable variable/value ordering heuristics.
//!
//! # Core Concepts
//!
//! - **[`Formula`](formula::Formula)**: an immutable container of variables,
//!   hard clauses and weighted soft clauses, supplying the clause-satisfaction
//!   and weight-aggregation primitives. It knows nothing about search.
//! - **[`Solver`](solver::engine::Solver)**: owns a partial assignment, a
//!   heuristic configuration and optional auxiliary
//!   [`Constraint`](solver::constraint::Constraint)s, and runs the
//!   branch-and-bound loop over the formula's evaluation primitives.
//! - **[`VariableOrdering`](solver::heuristics::variable::VariableOrdering)**:
//!   which unassigned variable to branch on next (declaration order, MRV or
//!   MCV); value ordering (LCV) is an independent switch.
//!
//! Literals are variable names with optional leading negation markers (`-`,
//! `~` or `¬`). Evaluation defaults an unassigned variable to `false`, so a
//! negated literal over an unassigned variable reads as satisfied; see
//! [`formula`] for why that default is load-bearing.
//!
//! # Example
//!
//! ```
//! use pondus::formula::Formula;
//! use pondus::solver::engine::Solver;
//! use pondus::solver::heuristics::variable::VariableOrdering;
//!
//! // At least one of a, b must hold (hard). Prefer a true (weight 3) and
//! // b false (weight 2).
//! let formula = Formula::new(
//!     &["a", "b"],
//!     &[vec!["a", "b"]],
//!     &[(vec!["a"], 3.0), (vec!["-b"], 2.0)],
//! );
//!
//! let mut solver = Solver::new(&formula, VariableOrdering::MinimumRemainingValues, true);
//! let (solution, weight) = solver.solve();
//!
//! let solution = solution.unwrap();
//! assert_eq!(weight, 5);
//! assert_eq!(solution.get(&formula.var("a").unwrap()), Some(&true));
//! assert_eq!(solution.get(&formula.var("b").unwrap()), Some(&false));
//! ```

pub mod error;
pub mod formula;
pub mod solver;
