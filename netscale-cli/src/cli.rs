use crate::{
    config::{
        app_config::{load_config, AppConfig, AppConfigBuilder, ReportFormat},
        input_config::InputConfig,
    },
    report::Report,
    CliError,
};
use clap::{ArgGroup, Parser};
use config::ConfigError;
use netscale::{
    graph::Graph,
    graph_loader::{
        example::karate_club::karate_club_graph, source::edge_list_loader::EdgeListLoader,
    },
    prelude::PathNormalisation,
};
use rayon::ThreadPoolBuilder;
use std::{io::Write, path::PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "netscale",
    about = "Measure the fractal dimension, average path length and growth exponent of a network"
)]
#[command(group(ArgGroup::new("network").required(true).args(["file", "karate"])))]
pub struct Args {
    /// Edge list to analyse, optionally gzip or bzip2 compressed
    #[arg(long, env = "NETSCALE_FILE")]
    pub file: Option<PathBuf>,

    /// Analyse Zachary's karate club instead of a file
    #[arg(long)]
    pub karate: bool,

    /// Single character separating the fields of the edge list
    #[arg(long, env = "NETSCALE_DELIMITER")]
    pub delimiter: Option<String>,

    /// The edge list starts with a header row, `--header false` overrides the config file
    #[arg(
        long,
        env = "NETSCALE_HEADER",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub header: Option<bool>,

    /// Seed for the box covering, unseeded runs differ between invocations
    #[arg(long, env = "NETSCALE_SEED")]
    pub seed: Option<u64>,

    /// legacy or all-pairs
    #[arg(long, env = "NETSCALE_PATH_NORMALISATION")]
    pub path_normalisation: Option<PathNormalisation>,

    #[arg(long, env = "NETSCALE_MAX_FIT_ITERATIONS")]
    pub max_fit_iterations: Option<usize>,

    /// Worker threads for the diameter and clustering sweeps
    #[arg(long, env = "NETSCALE_THREADS")]
    pub threads: Option<usize>,

    #[arg(long, value_enum, env = "NETSCALE_FORMAT")]
    pub format: Option<ReportFormat>,

    #[arg(long, env = "NETSCALE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Configuration file (toml, json, yaml) layered under the arguments
    #[arg(long, env = "NETSCALE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Defaults, then the config file, then every argument that was given.
    pub fn app_config(&self) -> Result<AppConfig, ConfigError> {
        let mut builder: AppConfigBuilder = load_config(self.config.clone())?.into();
        if let Some(delimiter) = &self.delimiter {
            builder = builder.with_delimiter(delimiter.clone());
        }
        if let Some(header) = self.header {
            builder = builder.with_header(header);
        }
        if self.seed.is_some() {
            builder = builder.with_seed(self.seed);
        }
        if let Some(normalisation) = self.path_normalisation {
            builder = builder.with_path_normalisation(normalisation);
        }
        if let Some(max_fit_iterations) = self.max_fit_iterations {
            builder = builder.with_max_fit_iterations(max_fit_iterations);
        }
        if self.threads.is_some() {
            builder = builder.with_threads(self.threads);
        }
        if let Some(format) = self.format {
            builder = builder.with_format(format);
        }
        if let Some(log_level) = &self.log_level {
            builder = builder.with_log_level(log_level.clone());
        }
        Ok(builder.build())
    }

    /// Name of the network and the network itself, files are named by their base name.
    pub fn load_network(&self, input: &InputConfig) -> Result<(String, Graph), CliError> {
        match &self.file {
            Some(path) => {
                let graph = EdgeListLoader::new(path)
                    .set_delimiter(&input.delimiter)
                    .set_header(input.header)
                    .load()?;
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                Ok((name, graph))
            }
            None => Ok(("karate club".to_string(), karate_club_graph())),
        }
    }
}

pub fn cli() -> Result<(), CliError> {
    run(Args::parse(), &mut std::io::stdout())
}

pub fn run<W: Write>(args: Args, out: &mut W) -> Result<(), CliError> {
    let config = args.app_config()?;
    config.logging.init();
    info!(config = ?config, "Configuration loaded");

    let (network, graph) = args.load_network(&config.input)?;
    let report = match config.analysis.threads {
        Some(threads) => {
            let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
            info!(threads = pool.current_num_threads(), "Using a dedicated thread pool");
            pool.install(|| Report::analyse(network, &graph, &config.analysis))
        }
        None => Report::analyse(network, &graph, &config.analysis),
    };
    out.write_all(report.render(config.output.format)?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod cli_test {
    use super::*;
    use netscale::errors::{GraphError, LoadError};
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("netscale").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn a_network_is_required() {
        assert!(Args::try_parse_from(["netscale"]).is_err());
        assert!(Args::try_parse_from(["netscale", "--karate", "--file", "x.csv"]).is_err());
    }

    #[test]
    fn arguments_take_precedence_over_the_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("netscale.toml");
        fs::write(
            &config_path,
            "[analysis]\nseed = 1\nmax_fit_iterations = 10\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let args = parse(&[
            "--karate",
            "--config",
            config_path.to_str().unwrap(),
            "--seed",
            "2",
            "--path-normalisation",
            "all-pairs",
        ]);
        let config = args.app_config().unwrap();
        assert_eq!(config.analysis.seed, Some(2));
        assert_eq!(config.analysis.max_fit_iterations, 10);
        assert_eq!(config.analysis.path_normalisation, PathNormalisation::AllPairs);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.analysis.threads, None);
    }

    #[test]
    fn header_can_be_switched_off() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("netscale.toml");
        fs::write(&config_path, "[input]\nheader = true\n").unwrap();
        let config_path = config_path.to_str().unwrap();

        let config = parse(&["--karate", "--config", config_path]).app_config().unwrap();
        assert!(config.input.header);
        let config = parse(&["--karate", "--config", config_path, "--header", "false"])
            .app_config()
            .unwrap();
        assert!(!config.input.header);
        let config = parse(&["--karate", "--header"]).app_config().unwrap();
        assert!(config.input.header);
    }

    #[test]
    fn threads_run_a_dedicated_pool() {
        let args = parse(&["--karate", "--seed", "5", "--threads", "2"]);
        assert_eq!(args.app_config().unwrap().analysis.threads, Some(2));
        let mut out = vec![];
        run(args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Average square clustering coefficient : 0.23425"));
        assert!(text.contains("Diameter : 5"));
    }

    #[test]
    fn karate_club_text_report() {
        let args = parse(&["--karate", "--seed", "5"]);
        let mut out = vec![];
        run(args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Network Analyzed : karate club"));
        assert!(text.contains("Number of nodes : 34"));
        assert!(text.contains("Number of edges : 78"));
        assert!(text.contains("Density : 1.39037E-01"));
        assert!(text.contains("Average degree : 4.58824"));
        assert!(text.contains("Average square clustering coefficient : 0.23425"));
        assert!(text.contains("Diameter : 5"));
        assert!(text.contains("Average path length : 2.33737"));
    }

    #[test]
    fn edge_list_json_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("path.tsv");
        fs::write(&path, "a\tb\n1\t2\n2\t3\n3\t4\n").unwrap();

        let args = parse(&[
            "--file",
            path.to_str().unwrap(),
            "--delimiter",
            "\t",
            "--header",
            "--format",
            "json",
            "--seed",
            "0",
        ]);
        let mut out = vec![];
        run(args, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["network"], "path.tsv");
        assert_eq!(json["summary"]["nodes"], 4);
        assert_eq!(json["summary"]["diameter"], 3);
        assert_eq!(json["box_counts"][0], 4);
    }

    #[test]
    fn missing_files_are_errors() {
        let args = parse(&["--file", "/no/such/network.csv"]);
        assert!(matches!(run(args, &mut vec![]), Err(CliError::Graph(_))));
    }

    #[test]
    fn multi_character_delimiters_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("edges.txt");
        fs::write(&path, "1::2\n2::3\n").unwrap();

        let args = parse(&["--file", path.to_str().unwrap(), "--delimiter", "::"]);
        assert!(matches!(
            run(args, &mut vec![]),
            Err(CliError::Graph(GraphError::LoadError {
                source: LoadError::InvalidDelimiter(_),
                ..
            }))
        ));
    }
}
