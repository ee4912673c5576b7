//! End-to-end multiscale measurement of a graph.
//!
//! # Example
//!
//! ```rust
//! use netscale::prelude::*;
//! use netscale::test_utils::ring_lattice;
//!
//! let graph = ring_lattice(16, 1);
//! let profile = multiscale_profile(&graph, &MultiscaleOptions::default().with_seed(7));
//!
//! let legacy = profile.average_path_length(PathNormalisation::Legacy).unwrap();
//! assert_eq!(legacy, 4.0);
//! assert!(profile.growth_exponent().is_ok());
//! ```
use crate::{
    algorithms::{
        diameter::diameter::diameter,
        fractal::{
            box_sequence::{box_count_sequence, BoxSequence},
            regression::{log_log_fit, LogLogFit},
            scale_one::{PathNormalisation, ScaleOneStats},
            sigmoid::SigmoidFitOptions,
        },
    },
    errors::MultiscaleError,
    graph::GraphViewOps,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiscaleOptions {
    /// Seed for representative selection, `None` draws one from the OS.
    pub seed: Option<u64>,
    pub fit: SigmoidFitOptions,
}

impl MultiscaleOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fit_options(mut self, fit: SigmoidFitOptions) -> Self {
        self.fit = fit;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiscaleProfile {
    num_nodes: usize,
    sequence: BoxSequence,
}

impl MultiscaleProfile {
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn diameter(&self) -> usize {
        self.sequence.diameter()
    }

    pub fn box_counts(&self) -> &[usize] {
        &self.sequence.counts
    }

    pub fn sequence(&self) -> &BoxSequence {
        &self.sequence
    }

    /// Scale 1 accumulators; empty when no scale 1 pass ran.
    pub fn scale_one(&self) -> ScaleOneStats {
        self.sequence.scale_one.unwrap_or_default()
    }

    pub fn dimension_fit(&self) -> Result<LogLogFit, MultiscaleError> {
        log_log_fit(self.box_counts())
    }

    pub fn fractal_dimension(&self) -> Result<f64, MultiscaleError> {
        self.dimension_fit().map(|fit| fit.dimension())
    }

    pub fn average_path_length(
        &self,
        normalisation: PathNormalisation,
    ) -> Result<f64, MultiscaleError> {
        self.scale_one()
            .average_path_length(self.num_nodes, normalisation)
    }

    pub fn growth_exponent(&self) -> Result<f64, MultiscaleError> {
        self.scale_one().growth_exponent()
    }
}

/// Compute the diameter of `g`, then its box-count sequence.
pub fn multiscale_profile<G: GraphViewOps>(g: &G, options: &MultiscaleOptions) -> MultiscaleProfile {
    multiscale_profile_with_diameter(g, diameter(g), options)
}

/// Box-count sequence of `g` for an already known diameter.
pub fn multiscale_profile_with_diameter<G: GraphViewOps>(
    g: &G,
    diameter: usize,
    options: &MultiscaleOptions,
) -> MultiscaleProfile {
    info!(
        nodes = g.count_nodes(),
        diameter,
        seed = ?options.seed,
        "Starting box covering"
    );
    let mut rng = options.rng();
    let sequence = box_count_sequence(g, diameter, &options.fit, &mut rng);
    info!(counts = ?sequence.counts, "Box covering finished");
    MultiscaleProfile {
        num_nodes: g.count_nodes(),
        sequence,
    }
}
