use std::collections::HashMap;

use log::debug;

use super::classify::{TableNode, classify};
use super::sort::sort_node;
use crate::models::structs::{OperatorGroup, Table};

/// Which columns of a group's left table feed the order applied to its right table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sweep {
    /// Out-only columns.
    Seed,
    /// Out-only plus in-out columns already fixed by a partner.
    Chain,
    /// Everything outbound, including in-out columns nobody fixed yet.
    Drain,
}

/// One classified and sorted node per input table, indexed by table name.
pub struct NodeArena {
    nodes: Vec<TableNode>,
    index: HashMap<String, usize>,
}

impl NodeArena {
    pub fn build(tables: &[Table], groups: &[OperatorGroup]) -> Self {
        let mut nodes = Vec::with_capacity(tables.len());
        let mut index = HashMap::new();
        for (idx, table) in tables.iter().enumerate() {
            let mut node = classify(table, groups);
            sort_node(&mut node);
            nodes.push(node);
            // first table wins when a name repeats
            index.entry(table.name.clone()).or_insert(idx);
        }
        Self { nodes, index }
    }

    pub fn get(&self, table: &str) -> Option<&TableNode> {
        self.index.get(table).map(|&idx| &self.nodes[idx])
    }

    pub fn into_nodes(self) -> Vec<TableNode> {
        self.nodes
    }

    fn pending(&self) -> usize {
        self.nodes.iter().map(TableNode::pending).sum()
    }

    /// One pass over the groups in server order. Returns the number of columns moved.
    pub fn sweep(&mut self, groups: &[OperatorGroup], sweep: Sweep) -> usize {
        let mut moved = 0;
        for group in groups {
            let (Some(&left), Some(&right)) = (
                self.index.get(&group.left_table),
                self.index.get(&group.right_table),
            ) else {
                if sweep == Sweep::Seed {
                    debug!(
                        "skipping operator group {} -> {}: table not in view",
                        group.left_table, group.right_table
                    );
                }
                continue;
            };
            let source = source_order(&self.nodes[left], sweep);
            let targets = targets_for(group, &source);
            moved += apply_targets(&mut self.nodes[right], &targets);
        }
        moved
    }

    /// Move whatever no partner claimed into the processed buckets.
    fn drain_remaining(&mut self) {
        for node in &mut self.nodes {
            let in_out = std::mem::take(&mut node.in_out);
            node.processed_in_out.extend(in_out);
            let in_only = std::mem::take(&mut node.in_only);
            node.processed_in_only.extend(in_only);
        }
    }
}

/// Left-table columns, in their established order, that a sweep reads from.
fn source_order(node: &TableNode, sweep: Sweep) -> Vec<String> {
    let mut names: Vec<String> = node.out_only.iter().map(|c| c.name.clone()).collect();
    if sweep != Sweep::Seed {
        names.extend(node.processed_in_out.iter().map(|c| c.name.clone()));
    }
    if sweep == Sweep::Drain {
        names.extend(node.in_out.iter().map(|c| c.name.clone()));
    }
    names
}

/// Right-side columns of `group`, ordered by where their left partner sits in `source`.
pub fn targets_for(group: &OperatorGroup, source: &[String]) -> Vec<String> {
    let mut targets = Vec::new();
    for name in source {
        for pair in &group.pairs {
            if &pair.left == name {
                targets.push(pair.right.clone());
            }
        }
    }
    targets
}

/// Fix the order of the named columns in `node`. A column is only ever moved
/// out of a raw bucket once, which bounds propagation on cyclic join graphs.
pub fn apply_targets(node: &mut TableNode, targets: &[String]) -> usize {
    let mut moved = 0;
    for name in targets {
        if let Some(pos) = node.in_out.iter().position(|c| &c.name == name) {
            let column = node.in_out.remove(pos);
            node.processed_in_out.push(column);
            moved += 1;
        } else if let Some(pos) = node.in_only.iter().position(|c| &c.name == name) {
            let column = node.in_only.remove(pos);
            node.processed_in_only.push(column);
            moved += 1;
        }
    }
    moved
}

/// Run the seed, chain and drain sweeps. Afterwards every raw in-out and
/// in-only bucket is empty.
pub fn propagate(arena: &mut NodeArena, groups: &[OperatorGroup]) {
    let seeded = arena.sweep(groups, Sweep::Seed);
    debug!("seed sweep fixed {} columns", seeded);

    // each productive pass moves at least one pending column
    let max_passes = arena.pending() + 1;
    for pass in 0..max_passes {
        let moved = arena.sweep(groups, Sweep::Chain);
        debug!("chain pass {} fixed {} columns", pass, moved);
        if moved == 0 {
            break;
        }
    }

    let drained = arena.sweep(groups, Sweep::Drain);
    debug!("drain sweep fixed {} columns", drained);
    arena.drain_remaining();
}
