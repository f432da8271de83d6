//! Error types for the hurricane crate.

use thiserror::Error;

/// Errors raised while building or walking a [`crate::hurricane::Hurricane`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HurricaneError {
    /// A node with the given id already exists.
    #[error("node '{0}' already exists")]
    DuplicateNode(String),

    /// No node with the given id exists.
    #[error("node '{0}' not found")]
    UnknownNode(String),

    /// Layer height must be finite and strictly positive.
    #[error("invalid layer size {0}: must be finite and positive")]
    InvalidLayerSize(f64),

    /// A node falls in a layer at or beyond the layer cap.
    #[error("node falls in layer {layer}, at or beyond the cap of {max} layers")]
    TooManyLayers { layer: f64, max: usize },
}

/// Errors raised by the scatter renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The coordinate sequences differ in length.
    #[error("coordinate length mismatch: x={x}, y={y}, z={z}")]
    LengthMismatch { x: usize, y: usize, z: usize },

    /// The windowing or GPU backend failed.
    #[error("display backend error: {0}")]
    Backend(String),
}
