//! Text and JSON rendering of a finished analysis.
use crate::config::{analysis_config::AnalysisConfig, app_config::ReportFormat};
use netscale::{
    algorithms::fractal::profile::multiscale_profile_with_diameter,
    prelude::*,
};
use serde::Serialize;
use std::fmt::{self, Write};
use tracing::info;

/// A metric value, or the reason it cannot be computed for this network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Value(f64),
    Undefined(String),
}

impl From<Result<f64, MultiscaleError>> for Metric {
    fn from(result: Result<f64, MultiscaleError>) -> Self {
        match result {
            Ok(value) => Metric::Value(value),
            Err(err) => Metric::Undefined(err.to_string()),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(value) => write!(f, "{value:.5}"),
            Metric::Undefined(reason) => write!(f, "undefined ({reason})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub network: String,
    pub seed: Option<u64>,
    pub path_normalisation: PathNormalisation,
    pub summary: GraphSummary,
    pub box_counts: Vec<usize>,
    pub average_path_length: Metric,
    pub fractal_dimension: Metric,
    pub growth_exponent: Metric,
}

impl Report {
    /// Run every measurement on `graph`.
    pub fn analyse<G: GraphViewOps>(network: String, graph: &G, config: &AnalysisConfig) -> Self {
        let summary = GraphSummary::new(graph);
        let profile =
            multiscale_profile_with_diameter(graph, summary.diameter, &config.multiscale_options());
        info!(network = %network, "Analysis finished");

        Self {
            network,
            seed: config.seed,
            path_normalisation: config.path_normalisation,
            summary,
            box_counts: profile.box_counts().to_vec(),
            average_path_length: profile
                .average_path_length(config.path_normalisation)
                .into(),
            fractal_dimension: profile.fractal_dimension().into(),
            growth_exponent: profile.growth_exponent().into(),
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => serde_json::to_string_pretty(self).map(|json| json + "\n"),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = writeln!(out);
        let _ = writeln!(out, "Network Analyzed : {}", self.network);
        let _ = writeln!(out, "Number of nodes : {}", self.summary.nodes);
        let _ = writeln!(out, "Number of edges : {}", self.summary.edges);
        let _ = writeln!(out, "Density : {}", scientific(self.summary.density));
        let _ = writeln!(out, "Average degree : {:.5}", self.summary.average_degree);
        let _ = writeln!(
            out,
            "Average square clustering coefficient : {:.5}",
            self.summary.square_clustering
        );
        let _ = writeln!(out, "Diameter : {}", self.summary.diameter);
        let _ = writeln!(out, "Average path length : {}", self.average_path_length);
        let _ = writeln!(out, "Fractal dimension : {}", self.fractal_dimension);
        let _ = writeln!(out, "Growth exponent : {}", self.growth_exponent);
        out
    }
}

/// Five decimal scientific notation with a signed two digit exponent, e.g.
/// `1.39037E-01`.
pub fn scientific(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{value:.5E}");
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}E{sign}{:02}", exponent.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}
