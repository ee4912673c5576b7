//! Log-log regression of box counts on scale.
//!
//! Box count `i` is paired with scale index `i + 1` so that the zero scale can be
//! log transformed. The fractal dimension is the absolute slope of the ordinary
//! least-squares line through `(ln(i + 1), ln(count_i))`.
use crate::errors::MultiscaleError;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogLogFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl LogLogFit {
    pub fn dimension(&self) -> f64 {
        self.slope.abs()
    }
}

/// Fit `ln(count) = slope * ln(scale index) + intercept`.
///
/// # Errors
///
/// - [`MultiscaleError::DegenerateDiameter`] for fewer than two counts;
/// - [`MultiscaleError::InsufficientScales`] for exactly two counts, which any line
///   passes through;
/// - [`MultiscaleError::InvalidBoxCount`] for counts that are not finite and positive.
pub fn log_log_fit<T: ToPrimitive>(box_counts: &[T]) -> Result<LogLogFit, MultiscaleError> {
    let diameter = box_counts.len().saturating_sub(1);
    match box_counts.len() {
        0 | 1 => return Err(MultiscaleError::DegenerateDiameter { diameter }),
        2 => return Err(MultiscaleError::InsufficientScales { diameter }),
        _ => {}
    }

    let mut xs = Vec::with_capacity(box_counts.len());
    let mut ys = Vec::with_capacity(box_counts.len());
    for (index, count) in box_counts.iter().enumerate() {
        let count = count.to_f64().unwrap_or(f64::NAN);
        if !(count.is_finite() && count > 0.0) {
            return Err(MultiscaleError::InvalidBoxCount { index, count });
        }
        xs.push(((index + 1) as f64).ln());
        ys.push(count.ln());
    }
    Ok(ordinary_least_squares(&xs, &ys))
}

/// Absolute log-log slope of the box-count sequence.
pub fn fractal_dimension<T: ToPrimitive>(box_counts: &[T]) -> Result<f64, MultiscaleError> {
    log_log_fit(box_counts).map(|fit| fit.dimension())
}

fn ordinary_least_squares(xs: &[f64], ys: &[f64]) -> LogLogFit {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let sxy: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let sxx: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    let syy: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (y - (intercept + slope * x)).powi(2))
        .sum();
    let r_squared = if syy > 0.0 { 1.0 - ss_res / syy } else { 1.0 };

    LogLogFit {
        slope,
        intercept,
        r_squared,
    }
}
