use tracing::debug;

use crate::complex::Complex;

/// Corner of the window (both axes) at zoom 1.
pub const ORIGIN: f64 = -2.24;

/// Side length of the window at zoom 1.
pub const ABS_LENGTH: f64 = 2.26 - ORIGIN;

/// Pixel dimensions of the drawing surface.
///
/// Both dimensions are clamped to at least 1 so no coordinate conversion
/// or render pass can divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSize {
    width: u32,
    height: u32,
}

impl PanelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// The visible square window onto the complex plane.
///
/// The window spans `[x_min, x_min + side_length) × [y_min, y_min + side_length)`
/// and `side_length == ABS_LENGTH / zoom_factor` after every mutation.
/// Each axis maps onto the panel with its own scale, so a non-square panel
/// shows a stretched image rather than a letterboxed one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    x_min: f64,
    y_min: f64,
    side_length: f64,
    zoom_factor: f64,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            x_min: ORIGIN,
            y_min: ORIGIN,
            side_length: ABS_LENGTH,
            zoom_factor: 1.0,
        }
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    #[inline]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Map a panel column to the real axis.
    #[inline]
    pub fn fractal_x(&self, panel_x: u32, panel: PanelSize) -> f64 {
        self.x_min + (panel_x as f64 / panel.width() as f64) * self.side_length
    }

    /// Map a panel row to the imaginary axis.
    ///
    /// Row 0 maps to `y_min`; the imaginary axis grows downwards.
    #[inline]
    pub fn fractal_y(&self, panel_y: u32, panel: PanelSize) -> f64 {
        self.y_min + (panel_y as f64 / panel.height() as f64) * self.side_length
    }

    #[inline]
    pub fn fractal_coord_at(&self, panel_x: u32, panel_y: u32, panel: PanelSize) -> Complex {
        Complex::new(self.fractal_x(panel_x, panel), self.fractal_y(panel_y, panel))
    }

    /// Complex-plane units per pixel along each axis: `(x_scale, y_scale)`.
    #[inline]
    pub fn scales(&self, panel: PanelSize) -> (f64, f64) {
        (
            self.side_length / panel.width() as f64,
            self.side_length / panel.height() as f64,
        )
    }

    /// Zoom by a factor of two so the clicked point becomes the centre of
    /// the new window.
    ///
    /// The click is converted with the pre-zoom side length. No bound is
    /// placed on the zoom factor.
    pub fn zoom(&mut self, click_x: u32, click_y: u32, panel: PanelSize, direction: ZoomDirection) {
        self.x_min = self.fractal_x(click_x, panel);
        self.y_min = self.fractal_y(click_y, panel);
        match direction {
            ZoomDirection::Out => self.zoom_factor /= 2.0,
            ZoomDirection::In => self.zoom_factor *= 2.0,
        }
        self.side_length = ABS_LENGTH / self.zoom_factor;
        self.x_min -= self.side_length / 2.0;
        self.y_min -= self.side_length / 2.0;
        debug!(
            ?direction,
            zoom_factor = self.zoom_factor,
            center_re = self.x_min + self.side_length / 2.0,
            center_im = self.y_min + self.side_length / 2.0,
            "Zoomed"
        );
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("View reset");
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
