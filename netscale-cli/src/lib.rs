pub mod cli;
pub mod config;
pub mod report;

use netscale::errors::GraphError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to build the thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
