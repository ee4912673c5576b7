//! # Greedy random box covering
//!
//! One covering pass at scale `l`:
//!
//! 1. every node starts uncovered;
//! 2. a new box starts with all uncovered nodes as candidates;
//! 3. a representative is drawn uniformly from the candidates and joins the box,
//!    then every candidate more than `l` hops away from it (or unreachable) is
//!    dropped from the candidates;
//! 4. step 3 repeats until no candidate is left, which closes the box;
//! 5. steps 2-4 repeat until every node is covered.
//!
//! Each node therefore becomes a representative exactly once, and all members of a
//! box are within `l` hops of each other. The result depends on the random source;
//! pass a seeded generator for reproducible box counts.
use crate::{
    algorithms::{
        fractal::{scale_one::ScaleOneStats, sigmoid::SigmoidFitOptions},
        pathing::hop_distance::hop_distances_within,
    },
    errors::MultiscaleError,
    graph::GraphViewOps,
};
use netscale_api::core::entities::VID;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Boxes of one covering pass, in the order they were closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCover {
    scale: usize,
    boxes: Vec<Vec<VID>>,
}

impl BoxCover {
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Members of every box, in the order the representatives were drawn.
    pub fn boxes(&self) -> &[Vec<VID>] {
        &self.boxes
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Index of the box containing each node, `None` for nodes in no box.
    pub fn membership(&self, num_nodes: usize) -> Vec<Option<usize>> {
        let mut membership = vec![None; num_nodes];
        for (i, members) in self.boxes.iter().enumerate() {
            for v in members {
                if let Some(slot) = membership.get_mut(v.index()) {
                    *slot = Some(i);
                }
            }
        }
        membership
    }
}

/// Cover `g` with boxes of radius `scale`.
///
/// # Errors
///
/// [`MultiscaleError::InvalidScale`] if `scale` is 0.
pub fn box_cover<G: GraphViewOps, R: Rng>(
    g: &G,
    scale: usize,
    rng: &mut R,
) -> Result<BoxCover, MultiscaleError> {
    if scale == 0 {
        return Err(MultiscaleError::InvalidScale { scale });
    }
    Ok(cover(g, scale, rng, Some(scale), |_, _| {}))
}

/// Cover `g` at scale 1 while sampling path lengths and fitting growth curves for
/// every representative.
pub fn box_cover_with_stats<G: GraphViewOps, R: Rng>(
    g: &G,
    fit_options: &SigmoidFitOptions,
    rng: &mut R,
) -> (BoxCover, ScaleOneStats) {
    let mut stats = ScaleOneStats::default();
    // the auxiliary measurements need distances to every node
    let boxes = cover(g, 1, rng, None, |source, distances| {
        stats.observe(source, distances, fit_options)
    });
    (boxes, stats)
}

pub(crate) fn cover<G, R, F>(
    g: &G,
    scale: usize,
    rng: &mut R,
    cutoff: Option<usize>,
    mut observe: F,
) -> BoxCover
where
    G: GraphViewOps,
    R: Rng,
    F: FnMut(VID, &[Option<usize>]),
{
    let mut covered = vec![false; g.count_nodes()];
    let mut uncovered: Vec<VID> = g.nodes().collect();
    let mut boxes = vec![];

    while !uncovered.is_empty() {
        let mut candidates = uncovered.clone();
        let mut members = vec![];
        while !candidates.is_empty() {
            let representative = candidates.swap_remove(rng.gen_range(0..candidates.len()));
            members.push(representative);

            let distances = hop_distances_within(g, representative, cutoff);
            observe(representative, &distances);
            candidates.retain(|v| matches!(distances[v.index()], Some(d) if d <= scale));

            covered[representative.index()] = true;
        }
        uncovered.retain(|v| !covered[v.index()]);
        trace!(scale, size = members.len(), "Closed box");
        boxes.push(members);
    }

    BoxCover { scale, boxes }
}
