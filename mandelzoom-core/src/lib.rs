pub mod complex;
pub mod error;
pub mod fractal;
pub mod mandelbrot;
pub mod view;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use fractal::{FractalParams, IterationResult};
pub use mandelbrot::Mandelbrot;
pub use view::{PanelSize, ViewState, ZoomDirection};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
