//! Spiral ("hurricane") point sets and a GPU 3D scatter view of them.
//!
//! [`generator::generate_spiral`] computes the points for a [`config::SpiralParams`];
//! [`visualization::show_scatter`] opens a window plotting them. The
//! [`hurricane`] module lays an id-addressed graph out on the same spiral laws.

pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod hurricane;
pub mod spiral;
pub mod visualization;

pub use error::{HurricaneError, RenderError};
