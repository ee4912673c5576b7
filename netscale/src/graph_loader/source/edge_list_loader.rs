//! Module for loading undirected networks from delimited edge list files.
//!
//! Each record names a source and a target node id. Records holding a single id
//! add an isolated node, and any further fields (weights, timestamps) are ignored.
//! Files ending in `.gz` or `.bz2` are decompressed on the fly.
//!
//! # Example
//!
//! ```no_run
//! use netscale::graph_loader::source::edge_list_loader::EdgeListLoader;
//! use netscale::prelude::*;
//!
//! let graph = EdgeListLoader::new("network.tsv")
//!     .set_delimiter("\t")
//!     .set_header(true)
//!     .load()
//!     .unwrap();
//!
//! println!("{} nodes", graph.count_nodes());
//! ```
use crate::{
    errors::{GraphError, LoadError},
    graph::{Graph, GraphBuilder, GraphViewOps},
};
use bzip2::read::BzDecoder;
use csv::{StringRecord, Trim};
use flate2::read::GzDecoder;
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct EdgeListLoader {
    path: PathBuf,
    header: bool,
    delimiter: String,
    comment: Option<u8>,
}

impl EdgeListLoader {
    /// Creates a loader for the file at `path`, comma separated, without header,
    /// treating lines starting with `#` as comments.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            header: false,
            delimiter: ",".to_string(),
            comment: Some(b'#'),
        }
    }

    pub fn set_header(mut self, h: bool) -> Self {
        self.header = h;
        self
    }

    /// Separate fields by `delimiter`, which must be a single byte such as `\t`.
    /// Anything longer fails with [`LoadError::InvalidDelimiter`] on load.
    pub fn set_delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    pub fn set_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file into a new graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::LoadError`] when the file cannot be opened or parsed, or holds a
    /// node id that is not an unsigned integer.
    pub fn load(&self) -> Result<Graph, GraphError> {
        let mut builder = GraphBuilder::new();
        self.load_into(&mut builder)
            .map_err(|source| GraphError::LoadError {
                path: self.path.clone(),
                source,
            })?;
        let graph = builder.build();
        info!(
            path = %self.path.display(),
            nodes = graph.count_nodes(),
            edges = graph.count_edges(),
            "Loaded edge list"
        );
        Ok(graph)
    }

    /// Add every node and edge of the file to `builder`.
    pub fn load_into(&self, builder: &mut GraphBuilder) -> Result<(), LoadError> {
        let mut reader = self.csv_reader()?;
        let mut records = 0usize;
        for record in reader.records() {
            let record = record?;
            self.add_record(builder, &record)?;
            records += 1;
        }
        debug!(records, path = %self.path.display(), "Read edge list records");
        Ok(())
    }

    fn add_record(&self, builder: &mut GraphBuilder, record: &StringRecord) -> Result<(), LoadError> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let mut ids = record
            .iter()
            .filter(|field| !field.is_empty())
            .take(2)
            .map(|field| {
                field.parse::<u64>().map_err(|_| LoadError::InvalidNodeId {
                    line,
                    value: field.to_string(),
                })
            });

        match (ids.next().transpose()?, ids.next().transpose()?) {
            (Some(src), Some(dst)) => builder.add_edge(src, dst),
            (Some(node), None) => {
                builder.add_node(node);
            }
            _ => {}
        }
        Ok(())
    }

    fn csv_reader(&self) -> Result<csv::Reader<Box<dyn io::Read>>, LoadError> {
        let delimiter = match self.delimiter.as_bytes() {
            [d] => *d,
            _ => return Err(LoadError::InvalidDelimiter(self.delimiter.clone())),
        };
        let file_name = self.path.file_name().and_then(|name| name.to_str());
        let is_gziped = file_name.filter(|name| name.ends_with(".gz")).is_some();
        let is_bziped = file_name.filter(|name| name.ends_with(".bz2")).is_some();

        let f = File::open(&self.path)?;
        let source: Box<dyn io::Read> = if is_gziped {
            Box::new(BufReader::new(GzDecoder::new(f)))
        } else if is_bziped {
            Box::new(BufReader::new(BzDecoder::new(f)))
        } else {
            Box::new(f)
        };

        Ok(csv::ReaderBuilder::new()
            .has_headers(self.header)
            .delimiter(delimiter)
            .comment(self.comment)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source))
    }
}
