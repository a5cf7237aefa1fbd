use std::cmp::Ordering;
use std::collections::HashSet;

use super::classify::TableNode;
use crate::models::structs::Column;

/// Case-sensitive label order, falling back to the column name on equal labels.
pub fn compare_labels(a: &Column, b: &Column) -> Ordering {
    a.label().cmp(b.label()).then_with(|| a.name.cmp(&b.name))
}

/// Forwarding join columns first, then label order.
pub fn compare_join_columns(a: &Column, b: &Column, forwarding: &HashSet<String>) -> Ordering {
    let fa = forwarding.contains(&a.name);
    let fb = forwarding.contains(&b.name);
    fb.cmp(&fa).then_with(|| compare_labels(a, b))
}

/// Establish the initial deterministic order of a freshly classified node.
/// In-only columns keep their encounter order; propagation decides them later.
pub fn sort_node(node: &mut TableNode) {
    let forwarding = &node.forwarding;
    node.out_only.sort_by(|a, b| compare_join_columns(a, b, forwarding));
    node.in_out.sort_by(|a, b| compare_join_columns(a, b, forwarding));
    node.non_join.sort_by(compare_labels);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let mut cols = vec![Column::new("b", ""), Column::new("B", ""), Column::new("a", "")];
        cols.sort_by(compare_labels);
        let names: Vec<_> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["B", "a", "b"]);
    }

    #[test]
    fn alias_drives_label_order() {
        let mut cols = vec![
            Column::new("a_col", "").with_alias("zeta"),
            Column::new("z_col", "").with_alias("alpha"),
        ];
        cols.sort_by(compare_labels);
        assert_eq!(cols[0].name, "z_col");
    }

    #[test]
    fn forwarding_columns_lead() {
        let forwarding: HashSet<String> = ["m".to_string()].into_iter().collect();
        let mut cols = vec![Column::new("a", ""), Column::new("m", ""), Column::new("b", "")];
        cols.sort_by(|a, b| compare_join_columns(a, b, &forwarding));
        let names: Vec<_> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["m", "a", "b"]);
    }
}
