use std::backtrace::Backtrace;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while configuring a solver.
///
/// The search itself never fails mid-traversal: infeasible or empty problem
/// spaces are reported through the solve result, not through this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// MRV and MCV are mutually exclusive variable orderings.
    #[error("MRV and MCV cannot be used together; select one variable ordering\n{backtrace}")]
    ConflictingHeuristics { backtrace: Box<Backtrace> },
}

impl Error {
    pub(crate) fn conflicting_heuristics() -> Self {
        Error::ConflictingHeuristics {
            backtrace: Box::new(Backtrace::capture()),
        }
    }
}
