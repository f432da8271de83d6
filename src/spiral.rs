//! Spiral laws: where the node at a given index sits in cylindrical coordinates.

/// Cylindrical position of one node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    pub r: f64,
    pub theta: f64,
    pub z: f64,
}

impl Polar {
    pub fn new(r: f64, theta: f64, z: f64) -> Self {
        Self { r, theta, z }
    }

    /// Returns `[r cos θ, r sin θ, z]`.
    pub fn to_cartesian(self) -> [f64; 3] {
        let (sin, cos) = self.theta.sin_cos();
        [self.r * cos, self.r * sin, self.z]
    }
}

/// Maps a node index to its position on the spiral.
pub trait Spiral {
    fn polar(&self, index: usize) -> Polar;
}

impl<F> Spiral for F
where
    F: Fn(usize) -> Polar,
{
    fn polar(&self, index: usize) -> Polar {
        self(index)
    }
}

/// Radius, angle and height all grow linearly with the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSpiral {
    pub radius_step: f64,
    pub theta_step: f64,
    pub height_step: f64,
}

impl Spiral for LinearSpiral {
    fn polar(&self, index: usize) -> Polar {
        let i = index as f64;
        Polar::new(i * self.radius_step, i * self.theta_step, i * self.height_step)
    }
}

/// `r = a * e^(b * θ)` with `θ = i * b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSpiral {
    pub a: f64,
    pub b: f64,
    pub height_step: f64,
}

impl Spiral for LogSpiral {
    fn polar(&self, index: usize) -> Polar {
        let i = index as f64;
        let theta = i * self.b;
        Polar::new(self.a * (self.b * theta).exp(), theta, i * self.height_step)
    }
}

/// `r = a + b * θ` with `θ = i * b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchimedeanSpiral {
    pub a: f64,
    pub b: f64,
    pub height_step: f64,
}

impl Spiral for ArchimedeanSpiral {
    fn polar(&self, index: usize) -> Polar {
        let i = index as f64;
        let theta = i * self.b;
        Polar::new(self.a + self.b * theta, theta, i * self.height_step)
    }
}
