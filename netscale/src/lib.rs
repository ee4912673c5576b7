//! # netscale
//!
//! `netscale` measures the multiscale geometry of undirected, unweighted networks.
//!
//! The central piece is a randomised greedy box covering run at every hop-distance
//! scale between 1 and the diameter of the network. The resulting box-count sequence
//! is turned into a fractal (box-counting) dimension through a log-log regression.
//! The finest scale pass also samples shortest-path lengths and fits a logistic curve
//! to the neighbourhood growth of every node, giving an average path length and a
//! growth exponent.
//!
//! Around that core the crate provides a small immutable graph store, breadth-first
//! hop distances, the exact diameter and elementary statistics, plus (behind the `io`
//! feature) an edge-list loader.
//!
//! ## Example
//!
//! ```rust
//! use netscale::prelude::*;
//!
//! // a ring of 16 nodes
//! let graph = Graph::from_edges((0..16u64).map(|i| (i, (i + 1) % 16)));
//!
//! let options = MultiscaleOptions::default().with_seed(42);
//! let profile = multiscale_profile(&graph, &options);
//!
//! assert_eq!(profile.diameter(), 8);
//! assert_eq!(profile.box_counts()[0], 16);
//! let dimension = profile.fractal_dimension().unwrap();
//! assert!(dimension > 0.8 && dimension < 1.2);
//! ```

pub mod algorithms;
pub mod errors;
pub mod graph;
pub mod graph_loader;
pub mod test_utils;

pub mod prelude {
    pub use crate::{
        algorithms::{
            diameter::diameter::{diameter, eccentricity, is_connected},
            fractal::{
                box_covering::{box_cover, box_cover_with_stats, BoxCover},
                box_sequence::{box_count_sequence, BoxSequence},
                profile::{multiscale_profile, MultiscaleOptions, MultiscaleProfile},
                regression::{fractal_dimension, log_log_fit, LogLogFit},
                scale_one::{PathNormalisation, ScaleOneStats},
                sigmoid::{fit_sigmoid, SigmoidFit, SigmoidFitOptions, SigmoidParams},
            },
            metrics::summary::GraphSummary,
            pathing::hop_distance::hop_distances,
        },
        errors::{FitError, GraphError, MultiscaleError},
        graph::{Graph, GraphBuilder, GraphViewOps},
    };
    pub use netscale_api::core::entities::VID;
}
