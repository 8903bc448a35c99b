use max_flow::{Capacity, EdmondsKarp, Flow, Graph};
use proptest::prelude::*;

fn build(edges: &[(u8, u8, Flow)]) -> Graph {
    let mut graph = Graph::new();
    for &(from, to, capacity) in edges {
        let from = format!("N{from}");
        let to = format!("N{to}");
        // duplicate (from, to) pairs from the generator are simply skipped
        let _ = graph.add_edge(&from, &to, Capacity::Finite(capacity));
    }
    graph
}

// brute-force minimum cut over all source/sink separating partitions;
// only feasible because the generator keeps graphs at six nodes
fn minimum_cut(graph: &Graph, source: &str, sink: &str) -> Flow {
    let source = graph.node_id(source).unwrap();
    let sink = graph.node_id(sink).unwrap();
    let n = graph.num_nodes();
    assert!(n <= 16);

    let mut best = Flow::MAX;
    for mask in 0u32..(1 << n) {
        if mask & (1 << source.index()) == 0 || mask & (1 << sink.index()) != 0 {
            continue;
        }
        let mut cut = 0;
        for edge in graph.edges() {
            let from_inside = mask & (1 << edge.from.index()) != 0;
            let to_inside = mask & (1 << edge.to.index()) != 0;
            if from_inside && !to_inside {
                match edge.capacity {
                    Capacity::Finite(capacity) => cut += capacity,
                    Capacity::Unbounded => {
                        cut = Flow::MAX;
                        break;
                    }
                }
            }
        }
        best = best.min(cut);
    }
    best
}

proptest! {
    #[test]
    fn flow_respects_capacities_and_conservation(
        edges in prop::collection::vec((0u8..6, 0u8..6, 0i64..20), 1..16)
    ) {
        let graph = build(&edges);
        prop_assume!(graph.contains("N0") && graph.contains("N5"));

        let assignment = EdmondsKarp::new().solve(&graph, "N0", "N5").unwrap();
        prop_assert!(assignment.total() >= 0);

        let mut balance = vec![0 as Flow; graph.num_nodes()];
        for (edge_id, flow) in assignment.iter() {
            let edge = graph.edge(edge_id);
            prop_assert!(flow >= 0);
            if let Capacity::Finite(capacity) = edge.capacity {
                prop_assert!(flow <= capacity);
            }
            balance[edge.from.index()] -= flow;
            balance[edge.to.index()] += flow;
        }

        let source = graph.node_id("N0").unwrap();
        let sink = graph.node_id("N5").unwrap();
        for node in graph.nodes() {
            if node != source && node != sink {
                prop_assert_eq!(balance[node.index()], 0);
            }
        }
        prop_assert_eq!(balance[sink.index()], assignment.total());
    }

    #[test]
    fn total_flow_equals_minimum_cut(
        edges in prop::collection::vec((0u8..6, 0u8..6, 0i64..20), 1..16)
    ) {
        let graph = build(&edges);
        prop_assume!(graph.contains("N0") && graph.contains("N5"));

        let assignment = EdmondsKarp::new().solve(&graph, "N0", "N5").unwrap();
        prop_assert_eq!(assignment.total(), minimum_cut(&graph, "N0", "N5"));
    }

    #[test]
    fn total_flow_is_deterministic_across_fresh_residuals(
        edges in prop::collection::vec((0u8..6, 0u8..6, 0i64..20), 1..16)
    ) {
        let graph = build(&edges);
        prop_assume!(graph.contains("N0") && graph.contains("N5"));

        let first = EdmondsKarp::new().solve(&graph, "N0", "N5").unwrap();
        let second = EdmondsKarp::new().solve(&graph, "N0", "N5").unwrap();
        prop_assert_eq!(first.total(), second.total());
    }

    #[test]
    fn zero_capacity_edge_never_changes_the_total(
        edges in prop::collection::vec((0u8..6, 0u8..6, 0i64..20), 1..16),
        extra_from in 0u8..6,
        extra_to in 0u8..6,
    ) {
        let graph = build(&edges);
        prop_assume!(graph.contains("N0") && graph.contains("N5"));
        let baseline = EdmondsKarp::new().solve(&graph, "N0", "N5").unwrap();

        let mut padded = graph.clone();
        let from = format!("N{extra_from}");
        let to = format!("N{extra_to}");
        let _ = padded.add_edge(&from, &to, Capacity::Finite(0));
        let assignment = EdmondsKarp::new().solve(&padded, "N0", "N5").unwrap();
        prop_assert_eq!(assignment.total(), baseline.total());
    }
}
