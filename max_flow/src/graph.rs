use std::collections::HashMap;

use crate::capacity::Capacity;
use crate::error::FlowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Capacity,
}

/// Directed capacity graph over string-labeled nodes. Labels are interned
/// to dense indices on first use; edges keep insertion order, at most one
/// per ordered (from, to) pair.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<String>,
    ids: HashMap<String, NodeId>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = NodeId(self.labels.len());
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        capacity: Capacity,
    ) -> Result<EdgeId, FlowError> {
        if let Capacity::Finite(value) = capacity {
            if value < 0 {
                return Err(FlowError::InvalidCapacity {
                    from: from.to_string(),
                    to: to.to_string(),
                    capacity: value,
                });
            }
        }

        let from = self.add_node(from);
        let to = self.add_node(to);
        let duplicate = self.outgoing[from.index()]
            .iter()
            .any(|&edge| self.edges[edge.index()].to == to);
        if duplicate {
            return Err(FlowError::DuplicateEdge {
                from: self.labels[from.index()].clone(),
                to: self.labels[to.index()].clone(),
            });
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { from, to, capacity });
        self.outgoing[from.index()].push(id);
        Ok(id)
    }

    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node.index()]
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.index()]
    }

    // insertion-ordered outgoing edges; empty slice for pure targets
    pub fn edges_from(&self, node: NodeId) -> &[EdgeId] {
        &self.outgoing[node.index()]
    }
}
