use std::collections::HashSet;

use crate::models::enums::ColumnRole;
use crate::models::structs::{Column, OperatorGroup, Table};

/// Per-table scratch record for one layout computation.
///
/// The four raw buckets come out of [`classify`]; the two `processed_*`
/// buckets receive columns as the propagator fixes their order from a join
/// partner. A column lives in exactly one bucket at any time.
#[derive(Clone, Debug, Default)]
pub struct TableNode {
    pub table: String,
    pub out_only: Vec<Column>,
    pub in_out: Vec<Column>,
    pub in_only: Vec<Column>,
    pub non_join: Vec<Column>,
    pub processed_in_out: Vec<Column>,
    pub processed_in_only: Vec<Column>,
    /// Outbound columns whose partner table joins further on.
    pub forwarding: HashSet<String>,
}

impl TableNode {
    pub fn forwards(&self, column: &str) -> bool {
        self.forwarding.contains(column)
    }

    /// Raw classification of a column; `None` once it has been propagated or if unknown.
    pub fn role_of(&self, column: &str) -> Option<ColumnRole> {
        let has = |bucket: &[Column]| bucket.iter().any(|c| c.name == column);
        if has(&self.out_only) {
            Some(ColumnRole::OutOnly)
        } else if has(&self.in_out) {
            Some(ColumnRole::InOut)
        } else if has(&self.in_only) {
            Some(ColumnRole::InOnly)
        } else if has(&self.non_join) {
            Some(ColumnRole::NonJoin)
        } else {
            None
        }
    }

    pub fn column_count(&self) -> usize {
        self.out_only.len()
            + self.in_out.len()
            + self.in_only.len()
            + self.non_join.len()
            + self.processed_in_out.len()
            + self.processed_in_only.len()
    }

    /// Columns still waiting for an order from a join partner.
    pub fn pending(&self) -> usize {
        self.in_out.len() + self.in_only.len()
    }
}

/// Split a table's public selection into out-only, in-out, in-only and non-join buckets.
pub fn classify(table: &Table, groups: &[OperatorGroup]) -> TableNode {
    debug_assert!(
        table.duplicate_column().is_none(),
        "duplicate column in table '{}'",
        table.name
    );

    let mut outbound: HashSet<&str> = HashSet::new();
    let mut inbound: HashSet<&str> = HashSet::new();
    let mut forwarding = HashSet::new();

    for (idx, group) in groups.iter().enumerate() {
        if group.left_table == table.name {
            let forwards = forwards_further(groups, idx);
            for pair in &group.pairs {
                outbound.insert(pair.left.as_str());
                if forwards {
                    forwarding.insert(pair.left.clone());
                }
            }
        }
        if group.right_table == table.name {
            for pair in &group.pairs {
                inbound.insert(pair.right.as_str());
            }
        }
    }

    let mut node = TableNode {
        table: table.name.clone(),
        forwarding,
        ..Default::default()
    };

    for column in &table.columns {
        let out = outbound.contains(column.name.as_str());
        let inb = inbound.contains(column.name.as_str());
        let bucket = match (out, inb) {
            (true, true) => &mut node.in_out,
            (true, false) => &mut node.out_only,
            (false, true) => &mut node.in_only,
            (false, false) => &mut node.non_join,
        };
        bucket.push(column.clone());
    }

    node
}

/// Whether the right table of `groups[idx]` is itself the left side of another group.
fn forwards_further(groups: &[OperatorGroup], idx: usize) -> bool {
    let target = &groups[idx].right_table;
    groups
        .iter()
        .enumerate()
        .any(|(i, g)| i != idx && &g.left_table == target)
}
