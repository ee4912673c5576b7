#[cfg(feature = "io")]
use std::{io, path::PathBuf};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("Need at least {required} samples to fit a curve, got {actual}")]
    TooFewSamples { required: usize, actual: usize },

    #[error("Sample lengths differ: {xs} x values and {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("Sample {0} is not a finite number")]
    NonFiniteSample(usize),

    #[error("Initial damping must be a positive number, got {0}")]
    InvalidDamping(f64),

    #[error("Parameters diverged after {0} iterations")]
    Diverged(usize),

    #[error("Fit did not converge within {0} iterations")]
    NoConvergence(usize),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MultiscaleError {
    #[error("Box covering needs a scale of at least 1, got {scale}")]
    InvalidScale { scale: usize },

    #[error("Fractal dimension is undefined for a graph with diameter {diameter}")]
    DegenerateDiameter { diameter: usize },

    #[error("Diameter {diameter} gives only two box counts, too few for a regression")]
    InsufficientScales { diameter: usize },

    #[error("Box count {count} at index {index} cannot be log transformed")]
    InvalidBoxCount { index: usize, count: f64 },

    #[error("No shortest-path samples were taken, average path length is undefined")]
    NoPathSamples,

    #[error("No growth curve could be fitted, growth exponent is undefined")]
    NoGrowthFits,
}

#[cfg(feature = "io")]
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Delimiter {0:?} is not a single byte")]
    InvalidDelimiter(String),

    #[error("Invalid node id {value:?} on line {line}")]
    InvalidNodeId { line: u64, value: String },
}

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("No Node with ID {0}")]
    NodeIdError(u64),

    #[error(transparent)]
    Multiscale(#[from] MultiscaleError),

    #[cfg(feature = "io")]
    #[error("Failed to load graph from {path:?}: {source}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
}
