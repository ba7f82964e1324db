use std::time::{Duration, Instant};

use tracing::{debug, info};

use mandelzoom_core::{Complex, FractalParams, Mandelbrot, PanelSize, ViewState, ZoomDirection};

use crate::buffer::RenderBuffer;
use crate::colour::colour_for;

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// The result of a full-frame render.
pub struct RenderResult {
    pub buffer: RenderBuffer,
    pub elapsed: Duration,
    pub escaped: usize,
    pub bounded: usize,
}

// ---------------------------------------------------------------------------
// Full-frame render
// ---------------------------------------------------------------------------

/// Render every pixel of `panel` for the given view, row-major, on the
/// calling thread.
///
/// The whole frame is recomputed on every call. Pixel `(col, row)` samples
/// `x_min + col * x_scale`, `y_min + row * y_scale`.
pub fn render(fractal: &Mandelbrot, view: &ViewState, panel: PanelSize) -> RenderResult {
    let start = Instant::now();
    let params = fractal.params();
    let (x_scale, y_scale) = view.scales(panel);
    debug!(
        width = panel.width(),
        height = panel.height(),
        zoom_factor = view.zoom_factor(),
        "Starting render"
    );

    let mut buffer = RenderBuffer::new(panel.width(), panel.height());
    let mut escaped = 0;
    for row in 0..panel.height() {
        let y = view.y_min() + row as f64 * y_scale;
        for col in 0..panel.width() {
            let x = view.x_min() + col as f64 * x_scale;
            let result = fractal.iterate(Complex::new(x, y));
            if result.is_escaped() {
                escaped += 1;
            }
            buffer.set_pixel(col, row, colour_for(&result, params));
        }
    }

    let bounded = panel.pixel_count() - escaped;
    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        escaped, bounded, "Render complete"
    );

    RenderResult {
        buffer,
        elapsed,
        escaped,
        bounded,
    }
}

/// Text for the pointer coordinate readout.
pub fn coordinate_readout(c: Complex) -> String {
    format!("c = {:.6} + {:.6}i", c.re, c.im)
}

// ---------------------------------------------------------------------------
// Renderer handle
// ---------------------------------------------------------------------------

/// The one object a host window talks to.
///
/// Owns the view state and iteration parameters. Commands that change the
/// view raise a repaint flag the host polls with [`needs_repaint`]; the
/// renderer holds no reference back to the host.
///
/// [`needs_repaint`]: Self::needs_repaint
#[derive(Debug, Clone)]
pub struct MandelbrotRenderer {
    fractal: Mandelbrot,
    view: ViewState,
    repaint_pending: bool,
}

impl MandelbrotRenderer {
    pub fn new(params: FractalParams) -> Self {
        Self {
            fractal: Mandelbrot::new(params),
            view: ViewState::new(),
            repaint_pending: true,
        }
    }

    pub fn params(&self) -> &FractalParams {
        self.fractal.params()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn zoom_factor(&self) -> f64 {
        self.view.zoom_factor()
    }

    /// `true` after a zoom or reset until the next [`render`](Self::render).
    pub fn needs_repaint(&self) -> bool {
        self.repaint_pending
    }

    /// Render a full frame. Zero dimensions are treated as 1.
    pub fn render(&mut self, width: u32, height: u32) -> RenderResult {
        self.repaint_pending = false;
        render(&self.fractal, &self.view, PanelSize::new(width, height))
    }

    pub fn fractal_coord_at(&self, panel_x: u32, panel_y: u32, width: u32, height: u32) -> Complex {
        self.view
            .fractal_coord_at(panel_x, panel_y, PanelSize::new(width, height))
    }

    pub fn zoom(
        &mut self,
        click_x: u32,
        click_y: u32,
        width: u32,
        height: u32,
        direction: ZoomDirection,
    ) {
        self.view
            .zoom(click_x, click_y, PanelSize::new(width, height), direction);
        self.repaint_pending = true;
    }

    pub fn reset_zoom(&mut self) {
        self.view.reset();
        self.repaint_pending = true;
    }
}

impl Default for MandelbrotRenderer {
    fn default() -> Self {
        Self::new(FractalParams::default())
    }
}
