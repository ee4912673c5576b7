mod fractal;
mod metrics;
mod pathing;

fn assert_approx(actual: f64, expected: f64, precision: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= precision,
        "Value mismatch: {} != {} (diff: {})",
        actual,
        expected,
        diff
    );
}
