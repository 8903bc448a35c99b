use tracing::{debug, info, trace};

use crate::capacity::{Capacity, Flow};
use crate::error::FlowError;
use crate::graph::{EdgeId, Graph};
use crate::residual::ResidualNetwork;
use crate::search::find_path;

/// Final per-edge flow values, read-only once the solver returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowAssignment {
    total: Flow,
    edge_flows: Vec<Flow>,
    augmentations: usize,
}

impl FlowAssignment {
    pub fn total(&self) -> Flow {
        self.total
    }

    pub fn flow(&self, edge: EdgeId) -> Flow {
        self.edge_flows[edge.index()]
    }

    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, Flow)> + '_ {
        self.edge_flows
            .iter()
            .enumerate()
            .map(|(i, &flow)| (EdgeId(i), flow))
    }
}

/// Edmonds-Karp: shortest augmenting paths until source and sink are
/// disconnected in the residual network. The BFS refinement bounds the
/// number of augmentations by |nodes| * |edges|.
#[derive(Debug, Default)]
pub struct EdmondsKarp;

impl EdmondsKarp {
    pub fn new() -> Self {
        EdmondsKarp
    }

    pub fn solve(
        &self,
        graph: &Graph,
        source: &str,
        sink: &str,
    ) -> Result<FlowAssignment, FlowError> {
        if graph.is_empty() {
            return Err(FlowError::EmptyGraph);
        }
        let source = graph
            .node_id(source)
            .ok_or_else(|| FlowError::UnknownNode {
                label: source.to_string(),
            })?;
        let sink = graph.node_id(sink).ok_or_else(|| FlowError::UnknownNode {
            label: sink.to_string(),
        })?;

        info!(
            source = graph.label(source),
            sink = graph.label(sink),
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            "solving maximum flow"
        );

        let mut residual = ResidualNetwork::build(graph);
        let bound = graph.num_nodes().saturating_mul(graph.num_edges());
        let mut total: Flow = 0;
        let mut augmentations = 0usize;

        while let Some(path) = find_path(&residual, source, sink) {
            trace!(arcs = ?path.arcs(), "augmenting path");
            let delta = match path.bottleneck(&residual) {
                Capacity::Finite(delta) => delta,
                Capacity::Unbounded => return Err(FlowError::UnboundedFlow),
            };
            debug_assert!(delta > 0);

            for &arc in path.arcs() {
                residual.push_flow(arc, delta)?;
            }
            total += delta;
            augmentations += 1;
            debug!(augmentations, length = path.len(), delta, total, "augmented");

            // Edmonds-Karp bound; exceeding it means the residual updates
            // are inconsistent
            assert!(augmentations <= bound);
        }

        info!(total, augmentations, "maximum flow found");
        let edge_flows = (0..graph.num_edges())
            .map(|i| residual.edge_flow(EdgeId(i)))
            .collect();
        Ok(FlowAssignment {
            total,
            edge_flows,
            augmentations,
        })
    }
}
