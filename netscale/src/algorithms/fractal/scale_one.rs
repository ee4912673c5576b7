//! Path-length and growth-curve accumulators filled during the scale 1 covering pass.
use crate::{
    algorithms::fractal::sigmoid::{fit_sigmoid, SigmoidFitOptions},
    errors::MultiscaleError,
};
use netscale_api::core::entities::VID;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::debug;

/// How the accumulated path lengths are turned into an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathNormalisation {
    /// `path_len / (num_paths + N / 2)`, the figure historically reported by the
    /// analysis tool. It is smaller than the mean pairwise distance.
    #[default]
    Legacy,
    /// `path_len / num_paths`, the mean over all sampled node pairs.
    AllPairs,
}

impl FromStr for PathNormalisation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "all-pairs" | "all_pairs" | "allpairs" => Ok(Self::AllPairs),
            other => Err(format!(
                "unknown path normalisation {other:?}, expected 'legacy' or 'all-pairs'"
            )),
        }
    }
}

impl fmt::Display for PathNormalisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathNormalisation::Legacy => write!(f, "legacy"),
            PathNormalisation::AllPairs => write!(f, "all-pairs"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleOneStats {
    /// Sum of sampled shortest-path hop distances.
    pub path_len: u64,
    /// Number of sampled node pairs.
    pub num_paths: u64,
    /// Sum of fitted logistic steepness parameters.
    pub gamma: f64,
    /// Number of successful logistic fits.
    pub num_gamma: usize,
}

impl ScaleOneStats {
    /// Record the measurements for representative `source`.
    ///
    /// Every node enumerated after `source` contributes one path sample, so each
    /// unordered pair of reachable nodes is sampled exactly once over a pass in
    /// which every node becomes a representative. A failed growth fit is skipped.
    pub fn observe(
        &mut self,
        source: VID,
        distances: &[Option<usize>],
        fit_options: &SigmoidFitOptions,
    ) {
        for d in distances.iter().skip(source.index() + 1).flatten() {
            self.num_paths += 1;
            self.path_len += *d as u64;
        }

        let curve = growth_curve(distances);
        let xs: Vec<f64> = (1..=curve.len()).map(|r| r as f64).collect();
        let ys: Vec<f64> = curve.iter().map(|&c| c as f64).collect();
        match fit_sigmoid(&xs, &ys, fit_options) {
            Ok(fit) => {
                self.gamma += fit.params.steepness;
                self.num_gamma += 1;
            }
            Err(err) => debug!(node = %source, %err, "Skipping growth curve"),
        }
    }

    pub fn average_path_length(
        &self,
        num_nodes: usize,
        normalisation: PathNormalisation,
    ) -> Result<f64, MultiscaleError> {
        if self.num_paths == 0 {
            return Err(MultiscaleError::NoPathSamples);
        }
        let path_len = self.path_len as f64;
        let num_paths = self.num_paths as f64;
        Ok(match normalisation {
            PathNormalisation::Legacy => path_len / (num_paths + num_nodes as f64 / 2.0),
            PathNormalisation::AllPairs => path_len / num_paths,
        })
    }

    /// `exp` of the mean fitted steepness.
    pub fn growth_exponent(&self) -> Result<f64, MultiscaleError> {
        if self.num_gamma == 0 {
            return Err(MultiscaleError::NoGrowthFits);
        }
        Ok((self.gamma / self.num_gamma as f64).exp())
    }
}

/// Cumulative number of nodes within `r` hops, for `r = 1, 2, ...`.
///
/// The curve stops at the first radius that reaches every node reachable from the
/// source (all nodes on a connected graph) and always has at least one point.
pub fn growth_curve(distances: &[Option<usize>]) -> Vec<usize> {
    let furthest = distances.iter().flatten().copied().max().unwrap_or(0);
    let mut shells = vec![0usize; furthest + 1];
    for d in distances.iter().flatten() {
        shells[*d] += 1;
    }
    let mut reached = shells[0];
    let mut curve = Vec::with_capacity(furthest.max(1));
    for r in 1..=furthest.max(1) {
        reached += shells.get(r).copied().unwrap_or(0);
        curve.push(reached);
    }
    curve
}
