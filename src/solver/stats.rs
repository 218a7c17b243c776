//! Counters describing the work done by a search run.

use prettytable::{Cell, Row, Table};

/// Statistics accumulated over a single [`solve`](crate::solver::engine::Solver::solve)
/// run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Search frames entered, including pruned ones.
    pub nodes_visited: u64,
    /// Frames whose value loop was exhausted.
    pub backtracks: u64,
    /// Frames cut because a fully assigned hard clause was violated.
    pub hard_conflict_prunes: u64,
    /// Frames cut because the optimistic bound could not beat the incumbent.
    pub bound_prunes: u64,
    /// Speculative consistency checks issued by the search loop.
    pub consistency_checks: u64,
    /// Times a new best assignment was recorded.
    pub incumbents: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Counter"), Cell::new("Value")]));

    let rows = [
        ("Nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Hard-conflict prunes", stats.hard_conflict_prunes),
        ("Bound prunes", stats.bound_prunes),
        ("Consistency checks", stats.consistency_checks),
        ("Incumbents", stats.incumbents),
    ];
    for (name, value) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&value.to_string()),
        ]));
    }

    table.to_string()
}
