use std::collections::VecDeque;

use crate::capacity::Capacity;
use crate::graph::NodeId;
use crate::residual::ResidualNetwork;

/// Augmenting path as a sequence of residual arc indices, source to sink.
/// Transient: recomputed for every augmentation, never kept across pushes.
#[derive(Debug)]
pub struct Path {
    arcs: Vec<usize>,
}

impl Path {
    pub fn arcs(&self) -> &[usize] {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn bottleneck(&self, residual: &ResidualNetwork) -> Capacity {
        self.arcs
            .iter()
            .fold(Capacity::Unbounded, |acc, &arc| {
                acc.min(residual.remaining(arc))
            })
    }
}

// Breadth-first search over arcs with positive remaining capacity. Each
// node is visited at most once, so the returned path has the fewest arcs
// among all augmenting paths; ties go to the arc visited first, which CSR
// construction fixes to edge insertion order.
pub fn find_path(residual: &ResidualNetwork, source: NodeId, sink: NodeId) -> Option<Path> {
    if source == sink {
        return None;
    }

    let mut prev: Vec<Option<(NodeId, usize)>> = vec![None; residual.num_nodes()];
    let mut visited = vec![false; residual.num_nodes()];
    visited[source.index()] = true;

    let mut queue = VecDeque::from([source]);
    'bfs: while let Some(u) = queue.pop_front() {
        for arc in residual.arc_range(u) {
            let to = residual.head(arc);
            if visited[to.index()] || !residual.remaining(arc).is_positive() {
                continue;
            }
            visited[to.index()] = true;
            prev[to.index()] = Some((u, arc));
            if to == sink {
                break 'bfs;
            }
            queue.push_back(to);
        }
    }

    if !visited[sink.index()] {
        return None;
    }

    let mut arcs = Vec::new();
    let mut v = sink;
    while let Some((u, arc)) = prev[v.index()] {
        arcs.push(arc);
        v = u;
    }
    debug_assert_eq!(v, source);
    arcs.reverse();
    Some(Path { arcs })
}
