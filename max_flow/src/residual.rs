use std::ops::Range;

use crate::capacity::{Capacity, Flow};
use crate::error::FlowError;
use crate::graph::{EdgeId, Graph, NodeId};

#[derive(Debug)]
pub struct ResidualArc {
    pub to: NodeId,
    pub remaining: Capacity,
    pub rev: usize,
}

/// Residual network in CSR form, rebuilt for every solver run. Every
/// original edge contributes a forward arc at full capacity and a paired
/// reverse arc at zero; `forward_remaining + reverse_remaining` equals the
/// original capacity of each finite pair at all times.
#[derive(Debug)]
pub struct ResidualNetwork {
    num_nodes: usize,
    start: Vec<usize>,
    arcs: Vec<ResidualArc>,
    forward: Vec<usize>,
}

impl ResidualNetwork {
    pub fn build(graph: &Graph) -> Self {
        let num_nodes = graph.num_nodes();
        let num_edges = graph.num_edges();

        let mut start = vec![0usize; num_nodes + 1];
        for edge in graph.edges() {
            start[edge.from.index() + 1] += 1;
            start[edge.to.index() + 1] += 1;
        }
        for u in 1..=num_nodes {
            start[u] += start[u - 1];
        }

        let mut arcs: Vec<ResidualArc> = (0..2 * num_edges)
            .map(|_| ResidualArc {
                to: NodeId(0),
                remaining: Capacity::Finite(0),
                rev: 0,
            })
            .collect();
        let mut forward = vec![0usize; num_edges];

        // stable placement: arcs within a node keep edge insertion order,
        // which fixes the BFS tie-break
        let mut counter = start.clone();
        for (i, edge) in graph.edges().iter().enumerate() {
            let fwd = counter[edge.from.index()];
            counter[edge.from.index()] += 1;
            let bwd = counter[edge.to.index()];
            counter[edge.to.index()] += 1;

            arcs[fwd] = ResidualArc {
                to: edge.to,
                remaining: edge.capacity,
                rev: bwd,
            };
            arcs[bwd] = ResidualArc {
                to: edge.from,
                remaining: Capacity::Finite(0),
                rev: fwd,
            };
            forward[i] = fwd;
        }

        ResidualNetwork {
            num_nodes,
            start,
            arcs,
            forward,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn arc_range(&self, u: NodeId) -> Range<usize> {
        self.start[u.index()]..self.start[u.index() + 1]
    }

    #[inline]
    pub fn head(&self, arc: usize) -> NodeId {
        self.arcs[arc].to
    }

    #[inline]
    pub fn remaining(&self, arc: usize) -> Capacity {
        self.arcs[arc].remaining
    }

    pub fn forward_arc(&self, edge: EdgeId) -> usize {
        self.forward[edge.index()]
    }

    pub fn push_flow(&mut self, arc: usize, amount: Flow) -> Result<(), FlowError> {
        debug_assert!(amount >= 0);
        let updated = match self.arcs[arc].remaining {
            Capacity::Unbounded => Capacity::Unbounded,
            Capacity::Finite(available) => {
                if amount > available {
                    return Err(FlowError::CapacityExceeded {
                        requested: amount,
                        available,
                    });
                }
                Capacity::Finite(available - amount)
            }
        };
        self.arcs[arc].remaining = updated;

        let rev = self.arcs[arc].rev;
        self.arcs[rev].remaining = self.arcs[rev].remaining.increase(amount);
        Ok(())
    }

    // realized flow on an original edge: everything pushed forward ends up
    // as remaining capacity on the paired reverse arc
    pub fn edge_flow(&self, edge: EdgeId) -> Flow {
        let rev = self.arcs[self.forward[edge.index()]].rev;
        match self.arcs[rev].remaining {
            Capacity::Finite(flow) => flow,
            Capacity::Unbounded => unreachable!("reverse arcs start finite and stay finite"),
        }
    }
}
