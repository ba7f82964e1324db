use thiserror::Error;

/// Errors originating from the core fractal engine.
///
/// Only configuration can fail; iteration and view mutation never do.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid max iterations: {0} (must be >= 1)")]
    InvalidMaxIterations(u32),

    #[error("invalid escape modulus: {0} (must be finite and > 0.0)")]
    InvalidEscapeModulus(f64),
}
