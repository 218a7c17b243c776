//! Weighted partial CNF formulas and their evaluation primitives.
//!
//! A [`Formula`] is an immutable triple of variables, hard clauses and
//! weighted soft clauses. Hard clauses must all hold in a solution; each
//! soft clause contributes its weight to the objective iff it is satisfied.
//!
//! Literals are written textually as a variable name with any number of
//! leading negation markers (`-`, `~` or `¬`); they are parsed once at
//! construction into a `(variable, polarity)` pair so evaluation never
//! re-scans strings.
//!
//! Evaluation treats an unassigned variable as `false`. A positive literal
//! over an unassigned variable is therefore unsatisfied, while a *negated*
//! literal over an unassigned variable reads as satisfied. This permissive
//! default is what lets the solver's optimistic bound treat partially
//! assigned clauses as still winnable, and it is relied on throughout the
//! search.

use std::collections::HashMap;

/// Index of a variable in a [`Formula`]'s name table.
pub type VarId = u32;

/// A partial mapping from variables to booleans.
///
/// A persistent map, so the speculative copies taken during forward checking
/// and the incumbent snapshots taken during search are cheap
/// structural-sharing clones.
pub type Assignment = im::HashMap<VarId, bool>;

/// Characters that mark a literal as negated.
const NEGATION_MARKERS: &[char] = &['-', '~', '¬'];

/// A variable reference with a polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    var: VarId,
    negated: bool,
}

impl Literal {
    pub fn new(var: VarId, negated: bool) -> Self {
        Self { var, negated }
    }

    pub fn var(&self) -> VarId {
        self.var
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// True iff this literal holds under `assignment`.
    ///
    /// An unassigned variable reads as `false`.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        if self.negated {
            self.negation_satisfied(assignment)
        } else {
            assignment.get(&self.var).copied().unwrap_or(false)
        }
    }

    /// The logical complement of the variable's (default-false) value.
    ///
    /// Holds for any unassigned variable.
    pub fn negation_satisfied(&self, assignment: &Assignment) -> bool {
        !assignment.get(&self.var).copied().unwrap_or(false)
    }
}

/// A disjunction of literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// True iff at least one literal is satisfied under `assignment`.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.literals.iter().any(|lit| lit.is_satisfied(assignment))
    }

    /// True iff every variable referenced by the clause is assigned.
    ///
    /// An empty clause is trivially fully assigned (and never satisfied).
    pub fn is_fully_assigned(&self, assignment: &Assignment) -> bool {
        self.literals
            .iter()
            .all(|lit| assignment.contains_key(&lit.var))
    }

    /// True iff the clause references `var`, in either polarity.
    pub fn mentions(&self, var: VarId) -> bool {
        self.literals.iter().any(|lit| lit.var == var)
    }
}

/// A clause that contributes `weight` to the objective iff satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftClause {
    clause: Clause,
    weight: i64,
}

impl SoftClause {
    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }
}

/// An immutable weighted partial CNF formula.
///
/// Built once and never mutated; the solver holds a shared reference and
/// consumes it purely through the evaluation primitives.
#[derive(Debug, Clone)]
pub struct Formula {
    /// Variable names, declared variables first in declaration order, then
    /// variables that only occur inside clauses.
    names: Vec<String>,
    index: HashMap<String, VarId>,
    declared: usize,
    hard: Vec<Clause>,
    soft: Vec<SoftClause>,
}

impl Formula {
    /// Builds a formula from textual variables and clauses.
    ///
    /// Declared variable names are stripped of negation markers and
    /// deduplicated, keeping first-occurrence order. Variables that appear
    /// only inside clauses are interned for evaluation but are not part of
    /// the search; they read as `false` wherever a clause mentions them.
    ///
    /// Soft-clause weights are truncated toward zero (`3.9` becomes `3`,
    /// `-2.7` becomes `-2`). This is a truncation policy, not
    /// nearest-integer rounding.
    pub fn new(
        variables: &[&str],
        hard_clauses: &[Vec<&str>],
        soft_clauses: &[(Vec<&str>, f64)],
    ) -> Self {
        let mut names = Vec::new();
        let mut index = HashMap::new();

        for raw in variables {
            intern(&mut names, &mut index, raw.trim_start_matches(NEGATION_MARKERS));
        }
        let declared = names.len();

        let hard = hard_clauses
            .iter()
            .map(|clause| parse_clause(&mut names, &mut index, clause))
            .collect();

        let soft = soft_clauses
            .iter()
            .map(|(clause, weight)| SoftClause {
                clause: parse_clause(&mut names, &mut index, clause),
                weight: *weight as i64,
            })
            .collect();

        Self {
            names,
            index,
            declared,
            hard,
            soft,
        }
    }

    /// Declared variables, in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = VarId> + '_ {
        0..self.declared as VarId
    }

    /// Number of declared variables.
    pub fn num_variables(&self) -> usize {
        self.declared
    }

    /// Looks up a variable by name, declared or clause-only.
    pub fn var(&self, name: &str) -> Option<VarId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, var: VarId) -> &str {
        &self.names[var as usize]
    }

    pub fn hard_clauses(&self) -> &[Clause] {
        &self.hard
    }

    pub fn soft_clauses(&self) -> &[SoftClause] {
        &self.soft
    }

    /// Total weight of the soft clauses satisfied under `assignment`.
    pub fn total_weight(&self, assignment: &Assignment) -> i64 {
        self.soft
            .iter()
            .filter(|soft| soft.clause.is_satisfied(assignment))
            .map(|soft| soft.weight)
            .sum()
    }
}

fn intern(names: &mut Vec<String>, index: &mut HashMap<String, VarId>, name: &str) -> VarId {
    if let Some(&id) = index.get(name) {
        return id;
    }
    let id = names.len() as VarId;
    index.insert(name.to_owned(), id);
    names.push(name.to_owned());
    id
}

fn parse_clause(
    names: &mut Vec<String>,
    index: &mut HashMap<String, VarId>,
    literals: &[&str],
) -> Clause {
    let literals = literals
        .iter()
        .map(|text| {
            let name = text.trim_start_matches(NEGATION_MARKERS);
            Literal {
                var: intern(names, index, name),
                negated: name.len() != text.len(),
            }
        })
        .collect();
    Clause { literals }
}
