//! `GraphLoader` module provides functions for loading networks from files and
//! built-in example networks.
//!
//! # Example
//!
//! ```rust
//! use netscale::graph_loader::example::karate_club::karate_club_graph;
//! use netscale::prelude::*;
//!
//! let graph = karate_club_graph();
//!
//! assert_eq!(graph.count_nodes(), 34);
//! assert_eq!(graph.count_edges(), 78);
//! ```

pub mod example;
#[cfg(feature = "io")]
pub mod source;
