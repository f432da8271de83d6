use hurricane::config::{PlotStyle, SpiralParams};
use hurricane::generator::generate_spiral;
use hurricane::visualization::show_scatter;
use hurricane::RenderError;

fn main() -> Result<(), RenderError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Hurricane Visualizer");

    let points = generate_spiral(&SpiralParams::default());
    show_scatter(&points.x, &points.y, &points.z, PlotStyle::default())
}
