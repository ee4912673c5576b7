use crate::{
    algorithms::fractal::{
        box_covering::{box_cover_with_stats, cover},
        scale_one::ScaleOneStats,
        sigmoid::SigmoidFitOptions,
    },
    graph::GraphViewOps,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Box counts for every scale from 0 to the diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSequence {
    /// `counts[l]` boxes at scale `l`; `counts[0]` is the node count and the last
    /// entry, at the diameter, is 1.
    pub counts: Vec<usize>,
    /// Accumulators of the scale 1 pass, absent when the diameter is below 2.
    pub scale_one: Option<ScaleOneStats>,
}

impl BoxSequence {
    pub fn diameter(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }
}

/// Run the covering engine at scales `1..diameter` in increasing order.
///
/// Only the scale 1 pass measures path lengths and growth curves. For a diameter
/// of 0 the sequence is just `[N]`; for a diameter of 1 it is `[N, 1]` and no pass
/// runs at all.
pub fn box_count_sequence<G: GraphViewOps, R: Rng>(
    g: &G,
    diameter: usize,
    fit_options: &SigmoidFitOptions,
    rng: &mut R,
) -> BoxSequence {
    let mut counts = Vec::with_capacity(diameter + 1);
    counts.push(g.count_nodes());
    let mut scale_one = None;

    for scale in 1..diameter {
        let boxes = if scale == 1 {
            let (boxes, stats) = box_cover_with_stats(g, fit_options, rng);
            debug!(
                num_paths = stats.num_paths,
                num_gamma = stats.num_gamma,
                "Scale one measurements"
            );
            scale_one = Some(stats);
            boxes
        } else {
            cover(g, scale, rng, Some(scale), |_, _| {})
        };
        debug!(scale, boxes = boxes.box_count(), "Covering pass done");
        counts.push(boxes.box_count());
    }

    if diameter > 0 {
        counts.push(1);
    }
    BoxSequence { counts, scale_one }
}
