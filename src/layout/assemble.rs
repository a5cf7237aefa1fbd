use super::classify::TableNode;
use crate::models::structs::TableLayout;

/// Concatenate a fully propagated node's buckets into the final column order:
/// out-only, processed in-out, processed in-only, non-join.
pub fn assemble(node: TableNode) -> TableLayout {
    debug_assert_eq!(node.pending(), 0, "assembling an undrained node");
    let TableNode {
        table,
        out_only,
        processed_in_out,
        processed_in_only,
        non_join,
        ..
    } = node;

    let mut columns = Vec::with_capacity(
        out_only.len() + processed_in_out.len() + processed_in_only.len() + non_join.len(),
    );
    columns.extend(out_only);
    columns.extend(processed_in_out);
    columns.extend(processed_in_only);
    columns.extend(non_join);

    TableLayout { table, columns }
}
