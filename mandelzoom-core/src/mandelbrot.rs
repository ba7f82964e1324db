use crate::complex::Complex;
use crate::fractal::{FractalParams, IterationResult};

/// The Mandelbrot set: `z_{n+1} = z_n² + c`, starting from `z₀ = 0`.
///
/// The point `c` is the coordinate on the complex plane.
#[derive(Debug, Clone)]
pub struct Mandelbrot {
    params: FractalParams,
}

impl Mandelbrot {
    pub fn new(params: FractalParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    /// Iterate a single point.
    ///
    /// The step runs before the test, so even a point far outside the set
    /// reports one iteration. Escape means `|z|` strictly greater than the
    /// escape modulus; landing exactly on it keeps iterating.
    pub fn iterate(&self, c: Complex) -> IterationResult {
        let escape_modulus = self.params.escape_modulus;
        let max_iter = self.params.max_iterations;

        let mut z = Complex::ZERO;
        let mut iterations = 0;
        loop {
            z = z * z + c;
            let modulus = z.modulus();
            iterations += 1;
            if modulus > escape_modulus {
                return IterationResult::Escaped {
                    iterations,
                    modulus,
                };
            }
            if iterations >= max_iter {
                return IterationResult::Bounded { modulus };
            }
        }
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new(FractalParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mb() -> Mandelbrot {
        Mandelbrot::default()
    }

    #[test]
    fn origin_is_bounded_with_zero_modulus() {
        assert_eq!(
            mb().iterate(Complex::ZERO),
            IterationResult::Bounded { modulus: 0.0 }
        );
    }

    #[test]
    fn far_point_still_runs_one_step() {
        assert_eq!(
            mb().iterate(Complex::new(10.0, 0.0)),
            IterationResult::Escaped {
                iterations: 1,
                modulus: 10.0
            }
        );
    }

    #[test]
    fn known_escape_count() {
        // c = 1: z₁ = 1, z₂ = 2 (not > 2), z₃ = 5 → escapes on step 3.
        assert_eq!(
            mb().iterate(Complex::new(1.0, 0.0)),
            IterationResult::Escaped {
                iterations: 3,
                modulus: 5.0
            }
        );
    }

    #[test]
    fn modulus_on_threshold_is_not_escape() {
        // c = -2: orbit -2, 2, 2, 2 … sits exactly on |z| = 2 forever.
        assert_eq!(
            mb().iterate(Complex::new(-2.0, 0.0)),
            IterationResult::Bounded { modulus: 2.0 }
        );
    }

    #[test]
    fn period_two_orbit_ends_on_even_step() {
        // c = -1: 0 → -1 → 0 → -1 … and 32 is even.
        assert_eq!(
            mb().iterate(Complex::new(-1.0, 0.0)),
            IterationResult::Bounded { modulus: 0.0 }
        );
    }

    #[test]
    fn imaginary_unit_cycle() {
        // c = i: i, -1+i, -i, -1+i, -i … step 32 lands on -1+i.
        assert_eq!(
            mb().iterate(Complex::new(0.0, 1.0)),
            IterationResult::Bounded {
                modulus: 2.0f64.sqrt()
            }
        );
    }

    #[test]
    fn iteration_count_within_cap() {
        let m = mb();
        for i in -30..30 {
            for j in -30..30 {
                let c = Complex::new(i as f64 * 0.1, j as f64 * 0.1);
                let n = m.iterate(c).iterations(32);
                assert!((1..=32).contains(&n), "{n} iterations for {c:?}");
            }
        }
    }

    #[test]
    fn smaller_cap_is_respected() {
        let m = Mandelbrot::new(FractalParams::new(1, 2.0).unwrap());
        assert_eq!(
            m.iterate(Complex::new(1.0, 0.0)),
            IterationResult::Bounded { modulus: 1.0 }
        );
        assert_eq!(m.iterate(Complex::new(3.0, 0.0)).iterations(1), 1);
    }

    #[test]
    fn nan_orbit_counts_as_bounded() {
        let result = mb().iterate(Complex::new(f64::NAN, 0.0));
        assert!(!result.is_escaped());
        assert!(result.modulus().is_nan());
    }

    #[test]
    fn deterministic_results() {
        let m = mb();
        let points = [
            Complex::new(0.0, 0.0),
            Complex::new(-0.75, 0.1),
            Complex::new(0.3, 0.5),
            Complex::new(-2.0, 0.0),
            Complex::new(1.0, 1.0),
        ];
        let run1: Vec<_> = points.iter().map(|&c| m.iterate(c)).collect();
        let run2: Vec<_> = points.iter().map(|&c| m.iterate(c)).collect();
        assert_eq!(run1, run2, "iteration results must be deterministic");
    }
}
