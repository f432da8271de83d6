use std::f64::consts::PI;

use crate::spiral::LinearSpiral;

pub const DEFAULT_NUM_NODES: usize = 100;
pub const DEFAULT_RADIUS_STEP: f64 = 0.2;
pub const DEFAULT_HEIGHT_STEP: f64 = 0.1;
pub const DEFAULT_THETA_STEP: f64 = PI / 10.0;

/// Parameters of one generation run. Fixed at startup, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    pub num_nodes: usize,
    pub radius_step: f64,
    pub height_step: f64,
    pub theta_step: f64,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES,
            radius_step: DEFAULT_RADIUS_STEP,
            height_step: DEFAULT_HEIGHT_STEP,
            theta_step: DEFAULT_THETA_STEP,
        }
    }
}

impl SpiralParams {
    pub fn spiral(&self) -> LinearSpiral {
        LinearSpiral {
            radius_step: self.radius_step,
            theta_step: self.theta_step,
            height_step: self.height_step,
        }
    }
}

/// Fixed look of the scatter window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    // 8x6 figure at 100 px per unit
    pub window_size: [f32; 2],
    pub marker_color: [f32; 3],
    pub marker_radius: f32,
    pub line_width: f32,
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub z_label: &'static str,
    pub title: &'static str,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            window_size: [800.0, 600.0],
            marker_color: [0.0, 0.0, 1.0],
            marker_radius: 3.0,
            line_width: 1.0,
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
            x_label: "X (cos 0)",
            y_label: "Y (sin 0)",
            z_label: "Z (Height)",
            title: "3D Spiral (Hurricane Structure)",
        }
    }
}

impl PlotStyle {
    /// On-screen marker radius in points, edge stroke included.
    pub fn effective_marker_radius(&self) -> f32 {
        self.marker_radius + self.line_width * 0.5
    }
}
