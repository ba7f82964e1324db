use crate::error::CoreError;

/// The result of iterating a single point.
///
/// Both variants carry `|z|` at the moment the loop stopped; the bounded
/// colorer needs it and the escaped colorer ignores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationResult {
    /// `|z|` exceeded the escape modulus after `iterations` steps.
    Escaped { iterations: u32, modulus: f64 },

    /// The orbit stayed within the escape modulus for every one of
    /// `max_iterations` steps.
    Bounded { modulus: f64 },
}

impl IterationResult {
    /// Number of steps the loop ran. A bounded point always ran the full cap.
    #[inline]
    pub fn iterations(&self, max_iterations: u32) -> u32 {
        match self {
            Self::Escaped { iterations, .. } => *iterations,
            Self::Bounded { .. } => max_iterations,
        }
    }

    /// `|z|` when the loop stopped.
    #[inline]
    pub fn modulus(&self) -> f64 {
        match self {
            Self::Escaped { modulus, .. } | Self::Bounded { modulus } => *modulus,
        }
    }

    #[inline]
    pub fn is_escaped(&self) -> bool {
        matches!(self, Self::Escaped { .. })
    }
}

/// Parameters controlling escape-time iteration.
///
/// Deserialization goes through [`FractalParams::new`] so a hand-edited
/// preferences file can never produce a zero iteration cap.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FractalParams {
    /// Maximum number of steps before declaring a point bounded.
    pub max_iterations: u32,

    /// A point has escaped once `|z|` is strictly greater than this.
    pub escape_modulus: f64,
}

impl<'de> serde::Deserialize<'de> for FractalParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            #[serde(default = "default_max_iterations")]
            max_iterations: u32,
            #[serde(default = "default_escape_modulus")]
            escape_modulus: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.max_iterations, raw.escape_modulus).map_err(serde::de::Error::custom)
    }
}

fn default_max_iterations() -> u32 {
    FractalParams::DEFAULT_MAX_ITERATIONS
}

fn default_escape_modulus() -> f64 {
    FractalParams::DEFAULT_ESCAPE_MODULUS
}

impl FractalParams {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 32;
    pub const DEFAULT_ESCAPE_MODULUS: f64 = 2.0;

    pub fn new(max_iterations: u32, escape_modulus: f64) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        if escape_modulus <= 0.0 || !escape_modulus.is_finite() {
            return Err(CoreError::InvalidEscapeModulus(escape_modulus));
        }
        Ok(Self {
            max_iterations,
            escape_modulus,
        })
    }

    /// Return a copy with a different `max_iterations` value.
    pub fn with_max_iterations(self, max_iterations: u32) -> crate::Result<Self> {
        Self::new(max_iterations, self.escape_modulus)
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            escape_modulus: Self::DEFAULT_ESCAPE_MODULUS,
        }
    }
}
