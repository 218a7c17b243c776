//! Weighted task selection.
//!
//! Five tasks compete for a sprint. Each selected task earns its value
//! (soft clauses); some tasks conflict and some depend on others (hard
//! clauses). The solver picks the selection with the highest total value.
//!
//! Run with `cargo run --example task_selection`.

use pondus::formula::Formula;
use pondus::solver::engine::Solver;
use pondus::solver::heuristics::variable::VariableOrdering;
use pondus::solver::stats::render_stats_table;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let formula = Formula::new(
        &["refactor", "feature", "docs", "benchmarks", "release"],
        &[
            // The release requires the feature to be done.
            vec!["-release", "feature"],
            // Benchmarks depend on the refactor landing first.
            vec!["-benchmarks", "refactor"],
            // The refactor and the feature cannot both fit in the sprint.
            vec!["-refactor", "-feature"],
        ],
        &[
            (vec!["refactor"], 4.0),
            (vec!["feature"], 6.0),
            (vec!["docs"], 2.0),
            (vec!["benchmarks"], 3.0),
            (vec!["release"], 5.0),
        ],
    );

    let mut solver = Solver::new(&formula, VariableOrdering::MinimumRemainingValues, true);
    let (solution, weight) = solver.solve();

    match solution {
        Some(solution) => {
            println!("Best selection (value {weight}):");
            for var in formula.variables() {
                let picked = solution.get(&var).copied().unwrap_or(false);
                println!("  {:<12} {}", formula.name(var), if picked { "yes" } else { "no" });
            }
        }
        None => println!("No selection satisfies the hard constraints."),
    }

    println!("\n{}", render_stats_table(solver.stats()));
}
