use crate::capacity::Flow;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("edge {from} -> {to} has negative capacity {capacity}")]
    InvalidCapacity {
        from: String,
        to: String,
        capacity: Flow,
    },

    #[error("edge {from} -> {to} is already declared")]
    DuplicateEdge { from: String, to: String },

    #[error("the graph has no nodes")]
    EmptyGraph,

    #[error("node '{label}' is not in the graph")]
    UnknownNode { label: String },

    // internal invariant violation: the bottleneck computation must keep
    // every push within the remaining capacity of its arc
    #[error("push of {requested} exceeds remaining capacity {available}")]
    CapacityExceeded { requested: Flow, available: Flow },

    #[error("augmenting path with no finite arc; the maximum flow is unbounded")]
    UnboundedFlow,
}
