pub mod axes;
pub mod renderer;

use crate::app::HurricaneApp;
use crate::config::PlotStyle;
use crate::error::RenderError;

/// Packs three index-aligned columns into GPU vertices.
pub fn scatter_vertices(x: &[f64], y: &[f64], z: &[f64]) -> Result<Vec<[f32; 3]>, RenderError> {
    if x.len() != y.len() || x.len() != z.len() {
        return Err(RenderError::LengthMismatch {
            x: x.len(),
            y: y.len(),
            z: z.len(),
        });
    }

    Ok(x
        .iter()
        .zip(y)
        .zip(z)
        .map(|((&x, &y), &z)| [x as f32, y as f32, z as f32])
        .collect())
}

/// Opens the scatter window and blocks until it is closed.
pub fn show_scatter(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    style: PlotStyle,
) -> Result<(), RenderError> {
    let vertices = scatter_vertices(x, y, z)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(style.window_size)
            .with_title(style.title),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        style.title,
        options,
        Box::new(move |cc| Box::new(HurricaneApp::new(cc, vertices, style))),
    )
    .map_err(|e| RenderError::Backend(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_become_vertices() {
        let vertices = scatter_vertices(&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]).unwrap();
        assert_eq!(vertices, vec![[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]);
    }

    #[test]
    fn empty_columns_are_fine() {
        assert!(scatter_vertices(&[], &[], &[]).unwrap().is_empty());
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let err = scatter_vertices(&[1.0, 2.0], &[3.0], &[5.0, 6.0]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::LengthMismatch { x: 2, y: 1, z: 2 }
        ));
        assert_eq!(err.to_string(), "coordinate length mismatch: x=2, y=1, z=2");
    }
}
