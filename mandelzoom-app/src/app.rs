use std::time::Duration;

use eframe::egui;
use tracing::{debug, info};

use mandelzoom_core::{Complex, FractalParams, ZoomDirection};
use mandelzoom_render::{coordinate_readout, MandelbrotRenderer};

use crate::hint::ZoomHint;
use crate::preferences::AppPreferences;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const WINDOW_TITLE: &str = "Fractal Got Back";
/// Uniform border between the toolbar and its contents.
const TOOLBAR_MARGIN: i8 = 16;
const ICON_SIZE: u32 = 32;
/// Prefix of the coordinate readout.
const FORMULA_LABEL: &str = "z = z*z + c";

// ---------------------------------------------------------------------------
// Window icon
// ---------------------------------------------------------------------------

/// The icon is a small rendering of the home view.
pub(crate) fn window_icon(params: FractalParams) -> egui::IconData {
    let result = MandelbrotRenderer::new(params).render(ICON_SIZE, ICON_SIZE);
    egui::IconData {
        rgba: result.buffer.to_rgba(),
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct MandelZoomApp {
    renderer: MandelbrotRenderer,
    preferences: AppPreferences,

    texture: Option<egui::TextureHandle>,
    render_time: Duration,
    needs_render: bool,
    panel_size: [u32; 2],

    hint: ZoomHint,
    readout: String,
}

impl MandelZoomApp {
    pub(crate) fn new(prefs: AppPreferences) -> Self {
        Self {
            renderer: MandelbrotRenderer::new(prefs.fractal),
            preferences: prefs,
            texture: None,
            render_time: Duration::ZERO,
            needs_render: true,
            panel_size: [0, 0],
            hint: ZoomHint::default(),
            readout: coordinate_readout(Complex::ZERO),
        }
    }

    fn check_resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 && (width != self.panel_size[0] || height != self.panel_size[1])
        {
            debug!(width, height, "Panel resized");
            self.panel_size = [width, height];
            self.needs_render = true;
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let [w, h] = self.panel_size;
        let result = self.renderer.render(w, h);
        self.render_time = result.elapsed;
        let image = egui::ColorImage::from_rgb(
            [result.buffer.width as usize, result.buffer.height as usize],
            &result.buffer.pixels,
        );
        match self.texture {
            Some(ref mut tex) => tex.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("fractal", image, egui::TextureOptions::NEAREST));
            }
        }
        self.needs_render = false;
    }

    /// Convert a screen position to panel pixel coordinates inside `rect`.
    fn panel_pixel(&self, pos: egui::Pos2, rect: egui::Rect) -> (u32, u32) {
        let [w, h] = self.panel_size;
        let px = ((pos.x - rect.min.x).max(0.0) as u32).min(w.saturating_sub(1));
        let py = ((pos.y - rect.min.y).max(0.0) as u32).min(h.saturating_sub(1));
        (px, py)
    }

    fn zoom(&mut self, px: u32, py: u32, direction: ZoomDirection) {
        let [w, h] = self.panel_size;
        self.hint = self.hint.after_zoom(direction, self.renderer.zoom_factor());
        self.renderer.zoom(px, py, w, h, direction);
    }

    fn reset_zoom(&mut self) {
        self.renderer.reset_zoom();
        self.hint = ZoomHint::default();
    }

    fn handle_canvas_input(&mut self, response: &egui::Response) {
        if let Some(pos) = response.hover_pos() {
            let (px, py) = self.panel_pixel(pos, response.rect);
            let [w, h] = self.panel_size;
            self.readout = coordinate_readout(self.renderer.fractal_coord_at(px, py, w, h));
        }

        let direction = if response.clicked() {
            Some(ZoomDirection::In)
        } else if response.secondary_clicked() {
            Some(ZoomDirection::Out)
        } else {
            None
        };
        if let (Some(direction), Some(pos)) = (direction, response.interact_pointer_pos()) {
            let (px, py) = self.panel_pixel(pos, response.rect);
            self.zoom(px, py, direction);
        }
    }

    fn draw_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("toolbar")
            .frame(
                egui::Frame::NONE
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::same(TOOLBAR_MARGIN)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("{FORMULA_LABEL}    {}", self.readout));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Reset Zoom").clicked() {
                            self.reset_zoom();
                        }
                        ui.label(format!(
                            "Zoom: \u{00d7}{}   ({} ms)",
                            self.renderer.zoom_factor(),
                            self.render_time.as_millis()
                        ));
                    });
                });
            });
    }

    fn draw_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_size();
                self.check_resize(available.x.max(1.0) as u32, available.y.max(1.0) as u32);

                if self.needs_render || self.renderer.needs_repaint() {
                    self.refresh_texture(ctx);
                }

                let (response, painter) = ui.allocate_painter(available, egui::Sense::click());
                if let Some(ref tex) = self.texture {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(tex.id(), response.rect, uv, egui::Color32::WHITE);
                }

                let mut response = response.on_hover_cursor(egui::CursorIcon::Crosshair);
                if let Some(text) = self.hint.text() {
                    response = response.on_hover_text(text);
                }
                self.handle_canvas_input(&response);
            });
    }
}

impl eframe::App for MandelZoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_toolbar(ctx);
        self.draw_canvas(ctx);

        // A zoom or reset this frame is rendered on the next one.
        if self.renderer.needs_repaint() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.preferences.save();
        info!("Saved preferences on exit");
    }
}
