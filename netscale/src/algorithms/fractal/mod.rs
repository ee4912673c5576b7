//! Box-counting renormalisation of a network.
//!
//! A covering pass at scale `l` greedily groups nodes into boxes whose members are
//! all within `l` hops of each other, picking each box member uniformly at random
//! among the remaining candidates. Repeating the pass for `l = 1..diameter` gives a
//! box-count sequence whose log-log slope is the fractal dimension.
//!
//! The `l = 1` pass visits every node as a representative and is reused for two
//! auxiliary measurements: shortest-path samples for the average path length and a
//! logistic fit of each node's neighbourhood growth for the growth exponent.
//!
//! The covering is a heuristic; box counts are those of this greedy procedure and
//! not of a minimum covering.

pub mod box_covering;
pub mod box_sequence;
pub mod profile;
pub mod regression;
pub mod scale_one;
pub mod sigmoid;
