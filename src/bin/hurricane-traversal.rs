use hurricane::config::SpiralParams;
use hurricane::hurricane::{AdjacencyStrategy, Hurricane};
use hurricane::HurricaneError;

const DEMO_NODES: usize = 10;
const LAYER_SIZE: f64 = 0.2;

fn main() -> Result<(), HurricaneError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let spiral = SpiralParams::default().spiral();
    let mut h = Hurricane::new("center", "center node", spiral, AdjacencyStrategy::Chain);
    for i in 1..=DEMO_NODES {
        if let Err(e) = h.add_node(format!("n{i}"), format!("node {i}")) {
            tracing::warn!("{}", e);
        }
    }

    tracing::info!("Spiral traversal:");
    for node in h.spiral_traversal() {
        tracing::info!(
            "  id={}, r={:.2}, theta={:.2}, z={:.2}",
            node.id,
            node.r,
            node.theta,
            node.z
        );
    }

    tracing::info!("Layered traversal:");
    for (i, layer) in h.layered_traversal(LAYER_SIZE)?.iter().enumerate() {
        tracing::info!("  layer {}:", i);
        for node in layer {
            tracing::info!("    id={}, z={:.2}", node.id, node.z);
        }
    }

    let center = h.center().id.clone();
    let bfs: Vec<&str> = h.bfs(&center)?.iter().map(|n| n.id.as_str()).collect();
    tracing::info!("BFS traversal: {}", bfs.join(" -> "));

    let dfs: Vec<&str> = h.dfs(&center)?.iter().map(|n| n.id.as_str()).collect();
    tracing::info!("DFS traversal: {}", dfs.join(" -> "));

    Ok(())
}
