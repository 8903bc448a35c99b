use std::fmt::Write;

use max_flow::{FlowEntry, Graph};

// "Terminal 1 -> Warehouse 1, capacity: 25", one line per declared edge
pub fn capacity_listing(graph: &Graph) -> String {
    let mut out = String::new();
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "{} -> {}, capacity: {}",
            graph.label(edge.from),
            graph.label(edge.to),
            edge.capacity
        );
    }
    out
}

pub fn flow_table(entries: &[FlowEntry]) -> String {
    let mut origin_width = "Origin".len();
    let mut destination_width = "Destination".len();
    let mut amount_width = "Flow".len();
    for entry in entries {
        origin_width = origin_width.max(entry.origin.len());
        destination_width = destination_width.max(entry.destination.len());
        amount_width = amount_width.max(entry.amount.to_string().len());
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:origin_width$}  {:destination_width$}  {:>amount_width$}",
        "Origin", "Destination", "Flow"
    );
    let _ = writeln!(
        out,
        "{}  {}  {}",
        "-".repeat(origin_width),
        "-".repeat(destination_width),
        "-".repeat(amount_width)
    );
    for entry in entries {
        let _ = writeln!(
            out,
            "{:origin_width$}  {:destination_width$}  {:>amount_width$}",
            entry.origin, entry.destination, entry.amount
        );
    }
    out
}
