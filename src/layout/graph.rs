//! Table-level join graph (left table -> right table per operator group).

use std::collections::HashMap;

use crate::models::structs::OperatorGroup;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Directed cycles in the table graph, each listed from the table the cycle
/// closes on. Tables are visited in the order groups first mention them.
pub fn find_join_cycles(groups: &[OperatorGroup]) -> Vec<Vec<String>> {
    let mut order: Vec<&str> = Vec::new();
    let mut edges: HashMap<&str, Vec<&str>> = HashMap::new();
    for group in groups {
        for name in [group.left_table.as_str(), group.right_table.as_str()] {
            if !edges.contains_key(name) {
                edges.insert(name, Vec::new());
                order.push(name);
            }
        }
        let targets = edges.entry(group.left_table.as_str()).or_default();
        if !targets.contains(&group.right_table.as_str()) {
            targets.push(group.right_table.as_str());
        }
    }

    let mut state: HashMap<&str, Visit> = HashMap::new();
    let mut stack: Vec<&str> = Vec::new();
    let mut cycles = Vec::new();
    for &start in &order {
        if !state.contains_key(start) {
            visit(start, &edges, &mut state, &mut stack, &mut cycles);
        }
    }
    cycles
}

pub fn has_join_cycle(groups: &[OperatorGroup]) -> bool {
    !find_join_cycles(groups).is_empty()
}

fn visit<'a>(
    node: &'a str,
    edges: &HashMap<&'a str, Vec<&'a str>>,
    state: &mut HashMap<&'a str, Visit>,
    stack: &mut Vec<&'a str>,
    cycles: &mut Vec<Vec<String>>,
) {
    state.insert(node, Visit::InProgress);
    stack.push(node);
    if let Some(targets) = edges.get(node) {
        for &next in targets {
            match state.get(next).copied() {
                Some(Visit::InProgress) => {
                    if let Some(pos) = stack.iter().position(|n| *n == next) {
                        cycles.push(stack[pos..].iter().map(|n| n.to_string()).collect());
                    }
                }
                Some(Visit::Done) => {}
                None => visit(next, edges, state, stack, cycles),
            }
        }
    }
    stack.pop();
    state.insert(node, Visit::Done);
}
