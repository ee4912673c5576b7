use crate::config::{
    analysis_config::AnalysisConfig, input_config::InputConfig, log_config::LoggingConfig,
};
use config::{Config, ConfigError, File, FileFormat};
use netscale::prelude::PathNormalisation;
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Default, Serialize)]
pub struct OutputConfig {
    pub format: ReportFormat,
}

#[derive(Debug, Deserialize, PartialEq, Clone, Default, Serialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub input: InputConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

pub struct AppConfigBuilder {
    logging: LoggingConfig,
    input: InputConfig,
    analysis: AnalysisConfig,
    output: OutputConfig,
}

impl From<AppConfig> for AppConfigBuilder {
    fn from(config: AppConfig) -> Self {
        Self {
            logging: config.logging,
            input: config.input,
            analysis: config.analysis,
            output: config.output,
        }
    }
}

impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfig::default().into()
    }

    pub fn with_log_level(mut self, log_level: String) -> Self {
        self.logging.log_level = log_level;
        self
    }

    pub fn with_delimiter(mut self, delimiter: String) -> Self {
        self.input.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.input.header = header;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.analysis.seed = seed;
        self
    }

    pub fn with_path_normalisation(mut self, normalisation: PathNormalisation) -> Self {
        self.analysis.path_normalisation = normalisation;
        self
    }

    pub fn with_max_fit_iterations(mut self, max_fit_iterations: usize) -> Self {
        self.analysis.max_fit_iterations = max_fit_iterations;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.analysis.threads = threads;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    pub fn build(self) -> AppConfig {
        AppConfig {
            logging: self.logging,
            input: self.input,
            analysis: self.analysis,
            output: self.output,
        }
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Order of precedence: command line arguments >> config file >> defaults.
// Arguments are applied by the caller on top of the returned config.
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let json = serde_json::to_string(&AppConfig::default())
        .map_err(|err| ConfigError::Foreign(Box::new(err)))?;
    let mut builder = Config::builder().add_source(File::from_str(&json, FileFormat::Json));
    if let Some(config_path) = config_path {
        builder = builder.add_source(File::from(config_path));
    }
    builder.build()?.try_deserialize::<AppConfig>()
}
