use max_flow::{Capacity, Flow, FlowError, Graph, SuperNetwork};

// terminal -> warehouse and warehouse -> shop capacities of the
// distribution system
pub const EDGES: [(&str, &str, Flow); 20] = [
    ("Terminal 1", "Warehouse 1", 25),
    ("Terminal 1", "Warehouse 2", 20),
    ("Terminal 1", "Warehouse 3", 15),
    ("Terminal 2", "Warehouse 3", 15),
    ("Terminal 2", "Warehouse 4", 30),
    ("Terminal 2", "Warehouse 2", 10),
    ("Warehouse 1", "Shop 1", 15),
    ("Warehouse 1", "Shop 2", 10),
    ("Warehouse 1", "Shop 3", 20),
    ("Warehouse 2", "Shop 4", 15),
    ("Warehouse 2", "Shop 5", 10),
    ("Warehouse 2", "Shop 6", 25),
    ("Warehouse 3", "Shop 7", 20),
    ("Warehouse 3", "Shop 8", 15),
    ("Warehouse 3", "Shop 9", 10),
    ("Warehouse 4", "Shop 10", 20),
    ("Warehouse 4", "Shop 11", 10),
    ("Warehouse 4", "Shop 12", 15),
    ("Warehouse 4", "Shop 13", 5),
    ("Warehouse 4", "Shop 14", 10),
];

pub const TERMINALS: [&str; 2] = ["Terminal 1", "Terminal 2"];

pub fn shops() -> Vec<String> {
    (1..=14).map(|i| format!("Shop {i}")).collect()
}

pub fn distribution_network() -> Result<Graph, FlowError> {
    let mut graph = Graph::new();
    for (from, to, capacity) in EDGES {
        graph.add_edge(from, to, Capacity::Finite(capacity))?;
    }
    Ok(graph)
}

/// Distribution network collapsed to a single source and sink: the super
/// source feeds both terminals, every shop drains into the super sink.
pub fn aggregated_network() -> Result<SuperNetwork, FlowError> {
    let graph = distribution_network()?;
    let shops = shops();
    let shop_refs: Vec<&str> = shops.iter().map(String::as_str).collect();
    SuperNetwork::attach(&graph, &TERMINALS, &shop_refs)
}

#[cfg(test)]
mod test {
    use crate::network::{aggregated_network, distribution_network, EDGES, TERMINALS};
    use max_flow::{decompose, Capacity, Flow};
    use rstest::*;

    #[fixture]
    fn solved() -> (max_flow::SuperNetwork, max_flow::FlowAssignment) {
        let network = aggregated_network().unwrap();
        let assignment = network.solve().unwrap();
        (network, assignment)
    }

    // regression baseline: each warehouse passes min(inflow, outflow),
    // 25 + 30 + 30 + 30, and the terminals can supply all 115 of it
    #[rstest]
    fn maximum_flow_is_115(solved: (max_flow::SuperNetwork, max_flow::FlowAssignment)) {
        let (_, assignment) = solved;
        assert_eq!(assignment.total(), 115);
    }

    #[rstest]
    fn every_terminal_arc_is_saturated(solved: (max_flow::SuperNetwork, max_flow::FlowAssignment)) {
        let (network, assignment) = solved;
        let graph = network.graph();
        for (edge_id, flow) in assignment.iter() {
            let edge = graph.edge(edge_id);
            if TERMINALS.contains(&graph.label(edge.from)) {
                assert_eq!(Capacity::Finite(flow), edge.capacity);
            }
        }
    }

    #[rstest]
    fn realized_flow_stays_within_capacity(
        solved: (max_flow::SuperNetwork, max_flow::FlowAssignment),
    ) {
        let (network, assignment) = solved;
        for (edge_id, flow) in assignment.iter() {
            assert!(flow >= 0);
            if let Capacity::Finite(capacity) = network.graph().edge(edge_id).capacity {
                assert!(flow <= capacity);
            }
        }
    }

    #[rstest]
    fn decomposition_covers_the_whole_network(
        solved: (max_flow::SuperNetwork, max_flow::FlowAssignment),
    ) {
        let (network, assignment) = solved;
        let entries = decompose(network.graph(), &assignment);

        for entry in &entries {
            assert!(entry.amount > 0);
        }

        // at 115 units every terminal arc is saturated, so the first six
        // rows are the terminal -> warehouse edges in declaration order
        for (entry, &(from, to, capacity)) in entries.iter().zip(&EDGES[..6]) {
            assert_eq!(entry.origin, from);
            assert_eq!(entry.destination, to);
            assert_eq!(entry.amount, capacity);
        }

        let terminal_total: Flow = entries
            .iter()
            .filter(|entry| TERMINALS.contains(&entry.origin.as_str()))
            .map(|entry| entry.amount)
            .sum();
        assert_eq!(terminal_total, 115);
    }

    #[test]
    fn the_original_network_stays_untouched() {
        let graph = distribution_network().unwrap();
        let shops = crate::network::shops();
        let shop_refs: Vec<&str> = shops.iter().map(String::as_str).collect();
        let network = max_flow::SuperNetwork::attach(&graph, &TERMINALS, &shop_refs).unwrap();
        assert_eq!(graph.num_edges(), EDGES.len());
        assert!(!graph.contains(max_flow::SUPER_SOURCE));
        assert_eq!(
            network.graph().num_edges(),
            EDGES.len() + TERMINALS.len() + shop_refs.len()
        );
    }
}
