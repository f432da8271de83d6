use crate::config::PlotStyle;
use crate::visualization::axes::{box_edges, label_anchors, project_to_rect};
use crate::visualization::renderer::{ScatterUniforms, ScatterWgpuPrimitive, WgpuScatterRenderer};
use eframe::{egui, egui_wgpu, App, Frame};
use glam::Vec2;
use parking_lot::Mutex;
use std::sync::Arc;

const BOX_COLOR: egui::Color32 = egui::Color32::from_gray(170);
const LABEL_FONT_SIZE: f32 = 13.0;

struct ScatterPaintCallback {
    primitive: Arc<ScatterWgpuPrimitive>,
    uniforms: ScatterUniforms,
}

impl egui_wgpu::CallbackTrait for ScatterPaintCallback {
    fn prepare(
        &self,
        _device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        _resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        WgpuScatterRenderer::write_uniforms(&self.primitive, &self.uniforms, queue);
        Vec::new()
    }

    fn paint<'a>(
        &'a self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'a>,
        _resources: &'a egui_wgpu::CallbackResources,
    ) {
        WgpuScatterRenderer::paint_primitive(&self.primitive, render_pass);
    }
}

pub struct HurricaneApp {
    style: PlotStyle,
    scatter_renderer: Arc<Mutex<WgpuScatterRenderer>>,
}

impl HurricaneApp {
    pub fn new(cc: &eframe::CreationContext<'_>, points: Vec<[f32; 3]>, style: PlotStyle) -> Self {
        let mut local_renderer = WgpuScatterRenderer::new(points, &style);
        if let Some(wgpu_render_state) = &cc.wgpu_render_state {
            if let Err(e) =
                local_renderer.prepare(&wgpu_render_state.device, wgpu_render_state.target_format)
            {
                tracing::error!("Failed to prepare WGPU scatter renderer: {}", e);
            }
        } else {
            tracing::warn!("WGPU render state not available at creation.");
        }

        Self {
            style,
            scatter_renderer: Arc::new(Mutex::new(local_renderer)),
        }
    }

    fn draw_plot(&self, ui: &mut egui::Ui) {
        let desired_size = ui.available_size_before_wrap();
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::drag());
        if rect.width() < 1.0 || rect.height() < 1.0 {
            return;
        }

        let mut renderer_guard = self.scatter_renderer.lock();
        if response.dragged() {
            let delta = response.drag_delta();
            renderer_guard.camera.orbit(Vec2::new(delta.x, delta.y));
        }

        let view_proj = renderer_guard.view_proj(rect.aspect_ratio());
        let painter = ui.painter_at(rect);

        // Box first so the markers sit on top of it
        let stroke = egui::Stroke::new(1.0, BOX_COLOR);
        for (a, b) in box_edges() {
            if let (Some(a), Some(b)) = (
                project_to_rect(&view_proj, a, rect),
                project_to_rect(&view_proj, b, rect),
            ) {
                painter.line_segment([a, b], stroke);
            }
        }

        match renderer_guard.get_primitive_arc() {
            Some(primitive) => {
                let uniforms = renderer_guard.uniforms(Vec2::new(rect.width(), rect.height()));
                let cb = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    ScatterPaintCallback {
                        primitive,
                        uniforms,
                    },
                );
                painter.add(cb);
            }
            None => {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Renderer N/A",
                    egui::FontId::default(),
                    egui::Color32::DARK_RED,
                );
            }
        }

        let anchors = label_anchors(&renderer_guard.camera, &view_proj);
        for (anchor, text) in [
            (anchors.x, self.style.x_label),
            (anchors.y, self.style.y_label),
            (anchors.z, self.style.z_label),
        ] {
            if let Some(pos) = project_to_rect(&view_proj, anchor, rect) {
                painter.text(
                    pos,
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(LABEL_FONT_SIZE),
                    egui::Color32::BLACK,
                );
            }
        }
    }
}

impl App for HurricaneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(self.style.title)
                            .heading()
                            .color(egui::Color32::BLACK),
                    );
                });
                self.draw_plot(ui);
            });
    }
}
