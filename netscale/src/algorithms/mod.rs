//! Library of algorithms that can be run on a graph
//!
//! # Example
//!
//! ```rust
//! use netscale::algorithms::metrics::degree::average_degree;
//! use netscale::prelude::*;
//!
//! let g = Graph::from_edges(vec![(1, 2), (1, 3), (2, 3), (3, 4)]);
//!
//! println!("average degree: {}", average_degree(&g));
//! ```

pub mod diameter;
pub mod fractal;
pub mod metrics;
pub mod pathing;
