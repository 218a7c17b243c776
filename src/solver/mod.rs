pub mod constraint;
pub mod engine;
pub mod heuristics;
pub mod stats;
