use tracing::debug;

use crate::capacity::Capacity;
use crate::edmonds_karp::{EdmondsKarp, FlowAssignment};
use crate::error::FlowError;
use crate::graph::Graph;

pub const SUPER_SOURCE: &str = "Super Source";
pub const SUPER_SINK: &str = "Super Sink";

/// Derived graph with a synthetic source wired to every true source and
/// every true sink wired to a synthetic sink, all over unbounded arcs.
/// The caller's graph is left untouched; synthetic arcs are appended after
/// the original edges, so edge ids of the original declaration survive.
#[derive(Debug)]
pub struct SuperNetwork {
    graph: Graph,
}

impl SuperNetwork {
    pub fn attach(
        graph: &Graph,
        sources: &[&str],
        sinks: &[&str],
    ) -> Result<SuperNetwork, FlowError> {
        for &label in sources.iter().chain(sinks.iter()) {
            if !graph.contains(label) {
                return Err(FlowError::UnknownNode {
                    label: label.to_string(),
                });
            }
        }

        let mut derived = graph.clone();
        derived.add_node(SUPER_SOURCE);
        derived.add_node(SUPER_SINK);
        for &source in sources {
            derived.add_edge(SUPER_SOURCE, source, Capacity::Unbounded)?;
        }
        for &sink in sinks {
            derived.add_edge(sink, SUPER_SINK, Capacity::Unbounded)?;
        }
        debug!(
            sources = sources.len(),
            sinks = sinks.len(),
            "attached super-source and super-sink"
        );
        Ok(SuperNetwork { graph: derived })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn source(&self) -> &'static str {
        SUPER_SOURCE
    }

    pub fn sink(&self) -> &'static str {
        SUPER_SINK
    }

    pub fn solve(&self) -> Result<FlowAssignment, FlowError> {
        EdmondsKarp::new().solve(&self.graph, SUPER_SOURCE, SUPER_SINK)
    }
}
