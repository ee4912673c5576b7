//! Four parameter logistic curve fitting.
//!
//! Fits `y = L / (1 + exp(-k (x - x0))) + b` with Levenberg-Marquardt. The solver is
//! seeded with `L = max(y)`, `x0 = median(x)`, `k = 1`, `b = min(y)` and gives up
//! after a bounded number of iterations, so every call returns promptly with either
//! a fit or a [`FitError`].
use crate::errors::FitError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

const PARAMETERS: usize = 4;
const MIN_SAMPLES: usize = 2;
const MIN_DAMPING: f64 = 1e-12;
const MAX_DAMPING: f64 = 1e16;
const PIVOT_EPSILON: f64 = 1e-300;

type Vector = [f64; PARAMETERS];
type Matrix = [[f64; PARAMETERS]; PARAMETERS];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigmoidFitOptions {
    pub max_iterations: usize,
    /// Relative cost reduction below which the fit has converged.
    pub ftol: f64,
    /// Relative step size below which the fit has converged.
    pub xtol: f64,
    /// Largest gradient component below which the fit has converged.
    pub gtol: f64,
    pub initial_damping: f64,
}

impl Default for SigmoidFitOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100 * PARAMETERS,
            ftol: 1e-10,
            xtol: 1e-10,
            gtol: 1e-10,
            initial_damping: 1e-3,
        }
    }
}

impl SigmoidFitOptions {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmoidParams {
    /// `L`, height of the step.
    pub amplitude: f64,
    /// `x0`, position of the inflection point.
    pub midpoint: f64,
    /// `k`, steepness of the step.
    pub steepness: f64,
    /// `b`, vertical offset.
    pub offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmoidFit {
    pub params: SigmoidParams,
    /// Half the sum of squared residuals at `params`.
    pub cost: f64,
    pub iterations: usize,
}

fn logistic(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl SigmoidParams {
    pub fn new(amplitude: f64, midpoint: f64, steepness: f64, offset: f64) -> Self {
        Self {
            amplitude,
            midpoint,
            steepness,
            offset,
        }
    }

    /// Starting point of the solver for the given samples.
    pub fn initial_guess(xs: &[f64], ys: &[f64]) -> Self {
        let amplitude = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let offset = ys.iter().copied().fold(f64::INFINITY, f64::min);
        Self::new(amplitude, median(xs), 1.0, offset)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.amplitude * logistic(self.steepness * (x - self.midpoint)) + self.offset
    }

    fn gradient(&self, x: f64) -> Vector {
        let s = logistic(self.steepness * (x - self.midpoint));
        let ds = s * (1.0 - s);
        [
            s,
            -self.amplitude * self.steepness * ds,
            self.amplitude * (x - self.midpoint) * ds,
            1.0,
        ]
    }

    fn to_vector(self) -> Vector {
        [self.amplitude, self.midpoint, self.steepness, self.offset]
    }

    fn from_vector(v: Vector) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    fn is_finite(&self) -> bool {
        self.to_vector().iter().all(|p| p.is_finite())
    }
}

fn median(xs: &[f64]) -> f64 {
    let sorted = xs.iter().copied().sorted_by(f64::total_cmp).collect_vec();
    let m = sorted.len();
    if m == 0 {
        f64::NAN
    } else if m % 2 == 1 {
        sorted[m / 2]
    } else {
        (sorted[m / 2 - 1] + sorted[m / 2]) / 2.0
    }
}

fn cost(params: &SigmoidParams, xs: &[f64], ys: &[f64]) -> f64 {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| (y - params.evaluate(*x)).powi(2))
        .sum::<f64>()
        / 2.0
}

fn norm(v: &Vector) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Solve `a x = b` by Gaussian elimination with partial pivoting.
fn solve(mut a: Matrix, mut b: Vector) -> Option<Vector> {
    for col in 0..PARAMETERS {
        let pivot = (col..PARAMETERS).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < PIVOT_EPSILON {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        for row in (col + 1)..PARAMETERS {
            let factor = a[row][col] / a[col][col];
            for k in col..PARAMETERS {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }
    let mut x = [0.0; PARAMETERS];
    for row in (0..PARAMETERS).rev() {
        let tail: f64 = ((row + 1)..PARAMETERS).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}

/// Normal equations `J^T J` and `J^T r` at `params`.
fn normal_equations(params: &SigmoidParams, xs: &[f64], ys: &[f64]) -> (Matrix, Vector) {
    let mut jtj = [[0.0; PARAMETERS]; PARAMETERS];
    let mut jtr = [0.0; PARAMETERS];
    for (x, y) in xs.iter().zip(ys) {
        let grad = params.gradient(*x);
        let residual = y - params.evaluate(*x);
        for i in 0..PARAMETERS {
            jtr[i] += grad[i] * residual;
            for j in 0..PARAMETERS {
                jtj[i][j] += grad[i] * grad[j];
            }
        }
    }
    (jtj, jtr)
}

/// Fit a logistic curve through `(xs[i], ys[i])`.
///
/// Every trial step counts against `options.max_iterations`, accepted or not.
///
/// # Errors
///
/// Fails with fewer than two samples, with mismatched or non-finite samples,
/// with a damping factor that is not a positive number, when the parameters stop
/// being finite and when the iteration cap in `options` is reached before
/// convergence.
pub fn fit_sigmoid(
    xs: &[f64],
    ys: &[f64],
    options: &SigmoidFitOptions,
) -> Result<SigmoidFit, FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    // a single sample sits on the initial midpoint where the steepness has no gradient
    if xs.len() < MIN_SAMPLES {
        return Err(FitError::TooFewSamples {
            required: MIN_SAMPLES,
            actual: xs.len(),
        });
    }
    if let Some(i) = xs
        .iter()
        .zip(ys)
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(FitError::NonFiniteSample(i));
    }
    if !(options.initial_damping.is_finite() && options.initial_damping > 0.0) {
        return Err(FitError::InvalidDamping(options.initial_damping));
    }

    let mut params = SigmoidParams::initial_guess(xs, ys);
    let mut current_cost = cost(&params, xs, ys);
    let mut damping = options.initial_damping;
    let (mut jtj, mut jtr) = ([[0.0; PARAMETERS]; PARAMETERS], [0.0; PARAMETERS]);
    let mut moved = true;

    for iteration in 0..options.max_iterations {
        if moved {
            (jtj, jtr) = normal_equations(&params, xs, ys);
            if jtr.iter().all(|g| g.abs() <= options.gtol) {
                return Ok(SigmoidFit {
                    params,
                    cost: current_cost,
                    iterations: iteration,
                });
            }
        }

        let mut damped = jtj;
        for (i, row) in damped.iter_mut().enumerate() {
            row[i] += damping * jtj[i][i].max(MIN_DAMPING);
        }
        moved = false;
        if let Some(step) = solve(damped, jtr) {
            let current = params.to_vector();
            let mut candidate = current;
            for (p, s) in candidate.iter_mut().zip(step) {
                *p += s;
            }
            let candidate = SigmoidParams::from_vector(candidate);
            let candidate_cost = cost(&candidate, xs, ys);
            if candidate_cost.is_finite() && candidate_cost < current_cost {
                if !candidate.is_finite() {
                    return Err(FitError::Diverged(iteration));
                }
                let reduction = current_cost - candidate_cost;
                params = candidate;
                current_cost = candidate_cost;
                damping = (damping / 10.0).max(MIN_DAMPING);
                if reduction <= options.ftol * current_cost
                    || norm(&step) <= options.xtol * (norm(&current) + options.xtol)
                {
                    return Ok(SigmoidFit {
                        params,
                        cost: current_cost,
                        iterations: iteration + 1,
                    });
                }
                moved = true;
            }
        }

        if !moved {
            damping *= 10.0;
            if damping > MAX_DAMPING {
                // no step reduces the cost any more, we are at a local minimum
                return Ok(SigmoidFit {
                    params,
                    cost: current_cost,
                    iterations: iteration + 1,
                });
            }
        }
    }
    Err(FitError::NoConvergence(options.max_iterations))
}

#[cfg(test)]
mod sigmoid_test {
    use super::*;

    fn samples(params: SigmoidParams, xs: impl Iterator<Item = f64>) -> (Vec<f64>, Vec<f64>) {
        xs.map(|x| (x, params.evaluate(x))).unzip()
    }

    #[test]
    fn recovers_exact_logistic() {
        let truth = SigmoidParams::new(100.0, 5.0, 1.2, 0.0);
        let (xs, ys) = samples(truth, (1..=10).map(|x| x as f64));
        let fit = fit_sigmoid(&xs, &ys, &SigmoidFitOptions::default()).unwrap();
        assert!((fit.params.steepness - 1.2).abs() < 1e-6, "{fit:?}");
        assert!((fit.params.amplitude - 100.0).abs() < 1e-4, "{fit:?}");
        assert!((fit.params.midpoint - 5.0).abs() < 1e-6, "{fit:?}");
        assert!(fit.cost < 1e-8);
    }

    #[test]
    fn recovers_offset_logistic() {
        let truth = SigmoidParams::new(80.0, 6.0, 0.7, 3.0);
        let (xs, ys) = samples(truth, (1..=12).map(|x| x as f64));
        let fit = fit_sigmoid(&xs, &ys, &SigmoidFitOptions::default()).unwrap();
        assert!((fit.params.steepness - 0.7).abs() < 1e-6, "{fit:?}");
        assert!((fit.params.offset - 3.0).abs() < 1e-4, "{fit:?}");
    }

    #[test]
    fn fits_ring_growth_curve() {
        // cumulative neighbourhood sizes of any node on a 16 node ring
        let xs = (1..=8).map(|x| x as f64).collect_vec();
        let ys = vec![3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 16.0];
        let fit = fit_sigmoid(&xs, &ys, &SigmoidFitOptions::default()).unwrap();
        assert!((fit.params.steepness - 0.3431).abs() < 1e-3, "{fit:?}");
    }

    #[test]
    fn too_few_samples() {
        assert_eq!(
            fit_sigmoid(&[1.0], &[1.0], &Default::default()),
            Err(FitError::TooFewSamples {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(
            fit_sigmoid(&[], &[], &Default::default()),
            Err(FitError::TooFewSamples {
                required: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn fits_short_curves() {
        // growth curve of a karate club member with eccentricity 3
        let fit =
            fit_sigmoid(&[1.0, 2.0, 3.0], &[17.0, 26.0, 34.0], &Default::default()).unwrap();
        assert!((fit.params.steepness - 1.53696).abs() < 1e-3, "{fit:?}");
        assert!(fit.cost < 1e-12, "{fit:?}");

        let fit = fit_sigmoid(&[1.0, 2.0], &[3.0, 4.0], &Default::default()).unwrap();
        assert!(fit.cost < 1e-12, "{fit:?}");
    }

    #[test]
    fn damping_must_be_positive() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 10.0, 30.0, 34.0];
        for damping in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let options = SigmoidFitOptions {
                initial_damping: damping,
                ..Default::default()
            };
            assert!(
                matches!(
                    fit_sigmoid(&xs, &ys, &options),
                    Err(FitError::InvalidDamping(_))
                ),
                "damping {damping}"
            );
        }
    }

    #[test]
    fn rejected_steps_count_as_iterations() {
        let options = SigmoidFitOptions {
            initial_damping: 1e-300,
            max_iterations: 50,
            ..Default::default()
        };
        let curves: [&[f64]; 3] = [
            &[2.0, 10.0, 30.0, 34.0],
            &[1.0, 1.0, 1.0, 2.0],
            &[3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 16.0],
        ];
        for ys in curves {
            let xs = (1..=ys.len()).map(|x| x as f64).collect_vec();
            match fit_sigmoid(&xs, ys, &options) {
                Ok(fit) => assert!(fit.iterations <= 50, "{fit:?}"),
                Err(err) => assert_eq!(err, FitError::NoConvergence(50)),
            }
        }
    }

    #[test]
    fn rejects_bad_samples() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            fit_sigmoid(&xs, &[1.0, 2.0], &Default::default()),
            Err(FitError::LengthMismatch { xs: 4, ys: 2 })
        );
        assert_eq!(
            fit_sigmoid(&xs, &[1.0, f64::NAN, 3.0, 4.0], &Default::default()),
            Err(FitError::NonFiniteSample(1))
        );
    }

    #[test]
    fn iteration_cap_is_a_failure() {
        let truth = SigmoidParams::new(100.0, 5.0, 1.2, 0.0);
        let (xs, ys) = samples(truth, (1..=10).map(|x| x as f64));
        let options = SigmoidFitOptions::default().with_max_iterations(0);
        assert_eq!(
            fit_sigmoid(&xs, &ys, &options),
            Err(FitError::NoConvergence(0))
        );
    }

    #[test]
    fn median_of_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn logistic_is_stable_for_large_arguments() {
        assert_eq!(logistic(1000.0), 1.0);
        assert_eq!(logistic(-1000.0), 0.0);
        assert_eq!(logistic(0.0), 0.5);
    }
}
