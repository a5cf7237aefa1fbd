//! Column layout for the join/concatenation editor.
//!
//! Orders each table's public selection so that joined columns line up across
//! table thumbnails: classify columns against the operator groups, sort each
//! bucket, propagate join partners' order, then concatenate the buckets.
//! The computation is pure and deterministic; identical input yields identical output.

pub mod assemble;
pub mod classify;
pub mod errors;
pub mod graph;
pub mod propagate;
pub mod sort;

pub use classify::TableNode;
pub use errors::*;

use log::debug;

use crate::models::structs::{OperatorGroup, Table, TableLayout};

/// Ordered column list per table, in input table order.
pub fn compute_layout(tables: &[Table], groups: &[OperatorGroup]) -> Vec<TableLayout> {
    debug!(
        "computing column layout for {} tables, {} operator groups",
        tables.len(),
        groups.len()
    );
    let cycles = graph::find_join_cycles(groups);
    if !cycles.is_empty() {
        debug!("join graph has cycles: {:?}", cycles);
    }

    let mut arena = propagate::NodeArena::build(tables, groups);
    propagate::propagate(&mut arena, groups);
    arena.into_nodes().into_iter().map(assemble::assemble).collect()
}

/// Classified and sorted buckets for one table, before any propagation.
pub fn classify_table(table: &Table, groups: &[OperatorGroup]) -> TableNode {
    let mut node = classify::classify(table, groups);
    sort::sort_node(&mut node);
    node
}
