use crate::capacity::Flow;
use crate::edmonds_karp::FlowAssignment;
use crate::graph::Graph;

/// One row of the flow analysis: realized flow on a declared edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEntry {
    pub origin: String,
    pub destination: String,
    pub amount: Flow,
}

// Pure read-side view: zero-flow edges are dropped, declaration order is
// kept, the assignment itself is untouched.
pub fn decompose(graph: &Graph, assignment: &FlowAssignment) -> Vec<FlowEntry> {
    assignment
        .iter()
        .filter(|&(_, amount)| amount > 0)
        .map(|(edge_id, amount)| {
            let edge = graph.edge(edge_id);
            FlowEntry {
                origin: graph.label(edge.from).to_string(),
                destination: graph.label(edge.to).to_string(),
                amount,
            }
        })
        .collect()
}
