use mandelzoom_core::{
    Complex, FractalParams, IterationResult, Mandelbrot, PanelSize, ViewState, ZoomDirection,
};

/// Iterate every pixel of the panel and collect results into a flat Vec.
fn iterate_grid(fractal: &Mandelbrot, view: &ViewState, panel: PanelSize) -> Vec<IterationResult> {
    let (x_scale, y_scale) = view.scales(panel);
    let mut results = Vec::with_capacity(panel.pixel_count());
    for row in 0..panel.height() {
        let y = view.y_min() + row as f64 * y_scale;
        for col in 0..panel.width() {
            let x = view.x_min() + col as f64 * x_scale;
            results.push(fractal.iterate(Complex::new(x, y)));
        }
    }
    results
}

#[test]
fn headless_grid_has_both_classes() {
    let mandelbrot = Mandelbrot::default();
    let view = ViewState::new();
    let panel = PanelSize::new(100, 100);

    let results = iterate_grid(&mandelbrot, &view, panel);

    assert_eq!(results.len(), 100 * 100);

    let escaped = results.iter().filter(|r| r.is_escaped()).count();
    let bounded = results.len() - escaped;

    assert!(escaped > 0, "should have some escaped points");
    assert!(bounded > 0, "should have some bounded points");
    for r in &results {
        let n = r.iterations(mandelbrot.params().max_iterations);
        assert!((1..=32).contains(&n));
        if !r.is_escaped() {
            assert!(r.modulus() <= 2.0 || r.modulus().is_nan());
        }
    }
}

#[test]
fn headless_grid_is_deterministic() {
    let mandelbrot = Mandelbrot::default();
    let mut view = ViewState::new();
    let panel = PanelSize::new(80, 60);
    view.zoom(30, 30, panel, ZoomDirection::In);

    let run1 = iterate_grid(&mandelbrot, &view, panel);
    let run2 = iterate_grid(&mandelbrot, &view, panel);

    assert_eq!(
        run1, run2,
        "two identical passes must produce identical results"
    );
}

#[test]
fn raising_the_cap_never_turns_escape_into_bounded() {
    let low = Mandelbrot::new(FractalParams::new(8, 2.0).unwrap());
    let high = Mandelbrot::default();
    let view = ViewState::new();
    let panel = PanelSize::new(64, 64);

    let a = iterate_grid(&low, &view, panel);
    let b = iterate_grid(&high, &view, panel);

    for (lo, hi) in a.iter().zip(&b) {
        if let IterationResult::Escaped { iterations, .. } = lo {
            assert_eq!(hi.iterations(32), *iterations);
        }
    }
    let escaped_low = a.iter().filter(|r| r.is_escaped()).count();
    let escaped_high = b.iter().filter(|r| r.is_escaped()).count();
    assert!(escaped_high >= escaped_low);
}
