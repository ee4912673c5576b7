use netscale::prelude::{MultiscaleOptions, PathNormalisation, SigmoidFitOptions};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_FIT_ITERATIONS: usize = 400;

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct AnalysisConfig {
    /// Seed for the box covering, a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub path_normalisation: PathNormalisation,
    pub max_fit_iterations: usize,
    /// Worker threads for the parallel measurements, rayon's default when absent.
    pub threads: Option<usize>,
}

impl AnalysisConfig {
    pub fn multiscale_options(&self) -> MultiscaleOptions {
        let fit = SigmoidFitOptions::default().with_max_iterations(self.max_fit_iterations);
        let options = MultiscaleOptions::default().with_fit_options(fit);
        match self.seed {
            Some(seed) => options.with_seed(seed),
            None => options,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            seed: None,
            path_normalisation: PathNormalisation::default(),
            max_fit_iterations: DEFAULT_MAX_FIT_ITERATIONS,
            threads: None,
        }
    }
}
