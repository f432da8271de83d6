//! Geometry of the 3D axes: data fitting, orbit camera, box edges and label anchors.
//!
//! World space is z-up. Data is fitted into a box centred on the origin with
//! half extents [`BOX_HALF_EXTENTS`], which is what the camera orbits.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Half extents of the plot box in world units (4:4:3 aspect).
pub const BOX_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 1.0, 0.75);

const DATA_MARGIN: f32 = 0.05;
const DEGENERATE_HALF_WIDTH: f32 = 0.5;
const LABEL_OFFSET: f32 = 1.3;

const CAMERA_DISTANCE: f32 = 4.5;
const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
const ORBIT_RADIANS_PER_POINT: f32 = 0.01;
const MAX_ELEVATION: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Axis-aligned bounds of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    /// Bounds over the finite points only. `None` when there are none.
    pub fn from_points(points: &[[f32; 3]]) -> Option<Self> {
        points
            .iter()
            .map(|&p| Vec3::from_array(p))
            .filter(|p| p.is_finite())
            .fold(None, |bounds: Option<Self>, p| {
                Some(match bounds {
                    Some(b) => Self {
                        min: b.min.min(p),
                        max: b.max.max(p),
                    },
                    None => Self { min: p, max: p },
                })
            })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half widths with a small margin; flat axes get a fixed width.
    pub fn half_extents(&self) -> Vec3 {
        let half = (self.max - self.min) * 0.5 * (1.0 + DATA_MARGIN);
        Vec3::select(
            half.cmpgt(Vec3::splat(f32::EPSILON)),
            half,
            Vec3::splat(DEGENERATE_HALF_WIDTH),
        )
    }

    /// Model matrix taking these bounds onto the plot box.
    pub fn fit_to_box(&self) -> Mat4 {
        Mat4::from_scale(BOX_HALF_EXTENTS / self.half_extents())
            * Mat4::from_translation(-self.center())
    }
}

/// Camera orbiting the origin at fixed distance, z up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Radians above the xy plane.
    pub elevation: f32,
    /// Radians counter-clockwise from +x.
    pub azimuth: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub fn from_degrees(elevation: f32, azimuth: f32) -> Self {
        Self {
            elevation: elevation.to_radians().clamp(-MAX_ELEVATION, MAX_ELEVATION),
            azimuth: azimuth.to_radians(),
            distance: CAMERA_DISTANCE,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_e, cos_e) = self.elevation.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        Vec3::new(cos_e * cos_a, cos_e * sin_a, sin_e) * self.distance
    }

    pub fn view_proj(&self, aspect_ratio: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Z);
        let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect_ratio.max(1e-3), 0.1, 100.0);
        proj * view
    }

    /// Applies a pointer drag, in screen points.
    pub fn orbit(&mut self, drag: Vec2) {
        self.azimuth -= drag.x * ORBIT_RADIANS_PER_POINT;
        self.elevation = (self.elevation + drag.y * ORBIT_RADIANS_PER_POINT)
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }
}

/// The 12 edges of the plot box.
pub fn box_edges() -> [(Vec3, Vec3); 12] {
    let h = BOX_HALF_EXTENTS;
    let corner = |sx: f32, sy: f32, sz: f32| Vec3::new(sx * h.x, sy * h.y, sz * h.z);

    [
        // along x
        (corner(-1.0, -1.0, -1.0), corner(1.0, -1.0, -1.0)),
        (corner(-1.0, 1.0, -1.0), corner(1.0, 1.0, -1.0)),
        (corner(-1.0, -1.0, 1.0), corner(1.0, -1.0, 1.0)),
        (corner(-1.0, 1.0, 1.0), corner(1.0, 1.0, 1.0)),
        // along y
        (corner(-1.0, -1.0, -1.0), corner(-1.0, 1.0, -1.0)),
        (corner(1.0, -1.0, -1.0), corner(1.0, 1.0, -1.0)),
        (corner(-1.0, -1.0, 1.0), corner(-1.0, 1.0, 1.0)),
        (corner(1.0, -1.0, 1.0), corner(1.0, 1.0, 1.0)),
        // along z
        (corner(-1.0, -1.0, -1.0), corner(-1.0, -1.0, 1.0)),
        (corner(1.0, -1.0, -1.0), corner(1.0, -1.0, 1.0)),
        (corner(-1.0, 1.0, -1.0), corner(-1.0, 1.0, 1.0)),
        (corner(1.0, 1.0, -1.0), corner(1.0, 1.0, 1.0)),
    ]
}

/// World positions for the three axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchors {
    pub x: Vec3,
    pub y: Vec3,
    pub z: Vec3,
}

/// Puts the x and y labels beside the bottom edges facing the camera and the
/// z label beside the vertical edge furthest left on screen.
pub fn label_anchors(camera: &OrbitCamera, view_proj: &Mat4) -> LabelAnchors {
    let h = BOX_HALF_EXTENTS;
    let eye = camera.eye();
    let side_x = if eye.x >= 0.0 { 1.0 } else { -1.0 };
    let side_y = if eye.y >= 0.0 { 1.0 } else { -1.0 };

    let x = Vec3::new(0.0, side_y * h.y * LABEL_OFFSET, -h.z);
    let y = Vec3::new(side_x * h.x * LABEL_OFFSET, 0.0, -h.z);

    let leftmost = [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]
        .into_iter()
        .map(|(sx, sy)| Vec3::new(sx * h.x, sy * h.y, 0.0))
        .min_by(|a, b| {
            let ax = clip_x(view_proj, *a);
            let bx = clip_x(view_proj, *b);
            ax.total_cmp(&bx)
        })
        .unwrap_or(Vec3::new(-h.x, -h.y, 0.0));
    let z = leftmost * Vec3::new(LABEL_OFFSET, LABEL_OFFSET, 1.0);

    LabelAnchors { x, y, z }
}

fn clip_x(view_proj: &Mat4, point: Vec3) -> f32 {
    let clip = *view_proj * point.extend(1.0);
    clip.x / clip.w.max(f32::EPSILON)
}

/// Projects a world point into `rect`. `None` when it is behind the camera.
pub fn project_to_rect(view_proj: &Mat4, point: Vec3, rect: egui::Rect) -> Option<egui::Pos2> {
    let clip: Vec4 = *view_proj * point.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;

    Some(egui::pos2(
        rect.left() + (ndc.x + 1.0) * 0.5 * rect.width(),
        rect.top() + (1.0 - ndc.y) * 0.5 * rect.height(),
    ))
}
