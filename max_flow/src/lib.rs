pub mod capacity;
pub mod decompose;
pub mod edmonds_karp;
pub mod error;
pub mod graph;
pub mod residual;
pub mod search;
pub mod super_node;

pub use capacity::{Capacity, Flow};
pub use decompose::{decompose, FlowEntry};
pub use edmonds_karp::{EdmondsKarp, FlowAssignment};
pub use error::FlowError;
pub use graph::{Edge, EdgeId, Graph, NodeId};
pub use residual::ResidualNetwork;
pub use search::{find_path, Path};
pub use super_node::{SuperNetwork, SUPER_SINK, SUPER_SOURCE};
