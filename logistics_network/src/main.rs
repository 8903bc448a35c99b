use anyhow::Result;
use max_flow::decompose;
use tracing_subscriber::EnvFilter;

use logistics_network::{network, report};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let graph = network::distribution_network()?;
    println!("Edges in the graph with capacities:");
    print!("{}", report::capacity_listing(&graph));

    let aggregated = network::aggregated_network()?;
    let assignment = aggregated.solve()?;

    println!();
    println!(
        "Maximum Flow in the Logistics Network: {} units",
        assignment.total()
    );
    println!();
    println!("Flow Analysis Table:");
    print!(
        "{}",
        report::flow_table(&decompose(aggregated.graph(), &assignment))
    );
    Ok(())
}
