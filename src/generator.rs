//! Point generation along a spiral.

use crate::config::SpiralParams;
use crate::spiral::Spiral;

/// Three index-aligned coordinate columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpiralPoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl SpiralPoints {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, [x, y, z]: [f64; 3]) {
        self.x.push(x);
        self.y.push(y);
        self.z.push(z);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates the points in index order.
    pub fn iter(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| [x, y, z])
    }
}

/// Generates `params.num_nodes` points on the linear spiral described by `params`.
pub fn generate_spiral(params: &SpiralParams) -> SpiralPoints {
    generate_with(&params.spiral(), params.num_nodes)
}

/// Generates `num_nodes` points on an arbitrary spiral law, index 0 first.
pub fn generate_with<S: Spiral + ?Sized>(spiral: &S, num_nodes: usize) -> SpiralPoints {
    let mut points = SpiralPoints::with_capacity(num_nodes);
    for i in 0..num_nodes {
        points.push(spiral.polar(i).to_cartesian());
    }

    tracing::debug!("Generated {} spiral points", points.len());

    points
}
