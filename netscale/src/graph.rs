//! Immutable undirected simple graph used by every algorithm in the crate.
//!
//! Nodes carry an external `u64` id and a dense internal [`VID`]. Internal ids are
//! handed out in order of first appearance, so iterating `0..count_nodes()` gives a
//! stable enumeration order for the whole lifetime of a [`Graph`].
//!
//! # Examples
//!
//! ```rust
//! use netscale::prelude::*;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_edge(10, 20);
//! builder.add_edge(20, 30);
//! builder.add_edge(30, 10);
//! builder.add_edge(10, 20); // duplicate, collapses
//! builder.add_node(40); // isolated
//! let graph = builder.build();
//!
//! assert_eq!(graph.count_nodes(), 4);
//! assert_eq!(graph.count_edges(), 3);
//! assert_eq!(graph.degree(graph.vid(10).unwrap()), 2);
//! ```
use crate::errors::GraphError;
use netscale_api::core::entities::VID;
use rustc_hash::FxHashMap;

/// Read-only view of an undirected simple graph.
pub trait GraphViewOps: Send + Sync {
    /// Number of nodes.
    fn count_nodes(&self) -> usize;

    /// Number of undirected edges, self-loops and duplicates excluded.
    fn count_edges(&self) -> usize;

    /// Neighbours of `v`, sorted by internal id.
    fn neighbours(&self, v: VID) -> &[VID];

    /// External id of `v`.
    fn node_id(&self, v: VID) -> u64;

    /// Internal id for an external node id.
    fn vid(&self, id: u64) -> Option<VID>;

    fn degree(&self, v: VID) -> usize {
        self.neighbours(v).len()
    }

    /// All nodes in enumeration order.
    fn nodes(&self) -> impl Iterator<Item = VID> + '_ {
        (0..self.count_nodes()).map(VID)
    }

    fn is_empty(&self) -> bool {
        self.count_nodes() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    ids: Vec<u64>,
    index: FxHashMap<u64, VID>,
    adj: Vec<Vec<VID>>,
    num_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(src, dst)` pairs of external ids.
    pub fn from_edges<I: IntoIterator<Item = (u64, u64)>>(edges: I) -> Self {
        let mut builder = GraphBuilder::new();
        for (src, dst) in edges {
            builder.add_edge(src, dst);
        }
        builder.build()
    }

    /// Internal id for `id`, or [`GraphError::NodeIdError`] if the node is unknown.
    pub fn node(&self, id: u64) -> Result<VID, GraphError> {
        self.vid(id).ok_or(GraphError::NodeIdError(id))
    }

    /// All edges as pairs of internal ids with `src < dst`.
    pub fn edges(&self) -> impl Iterator<Item = (VID, VID)> + '_ {
        self.adj.iter().enumerate().flat_map(|(src, neighbours)| {
            neighbours
                .iter()
                .filter(move |dst| dst.index() > src)
                .map(move |dst| (VID(src), *dst))
        })
    }
}

impl GraphViewOps for Graph {
    fn count_nodes(&self) -> usize {
        self.ids.len()
    }

    fn count_edges(&self) -> usize {
        self.num_edges
    }

    fn neighbours(&self, v: VID) -> &[VID] {
        &self.adj[v.index()]
    }

    fn node_id(&self, v: VID) -> u64 {
        self.ids[v.index()]
    }

    fn vid(&self, id: u64) -> Option<VID> {
        self.index.get(&id).copied()
    }
}

/// Mutable staging area for a [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    ids: Vec<u64>,
    index: FxHashMap<u64, VID>,
    adj: Vec<Vec<VID>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node if it does not exist yet and return its internal id.
    pub fn add_node(&mut self, id: u64) -> VID {
        if let Some(vid) = self.index.get(&id) {
            return *vid;
        }
        let vid = VID(self.ids.len());
        self.ids.push(id);
        self.index.insert(id, vid);
        self.adj.push(vec![]);
        vid
    }

    /// Add an undirected edge. Self-loops only create the node.
    pub fn add_edge(&mut self, src: u64, dst: u64) {
        let src = self.add_node(src);
        let dst = self.add_node(dst);
        if src != dst {
            self.adj[src.index()].push(dst);
            self.adj[dst.index()].push(src);
        }
    }

    pub fn count_nodes(&self) -> usize {
        self.ids.len()
    }

    pub fn build(self) -> Graph {
        let mut adj = self.adj;
        let mut degree_sum = 0;
        for neighbours in adj.iter_mut() {
            neighbours.sort_unstable();
            neighbours.dedup();
            degree_sum += neighbours.len();
        }
        Graph {
            ids: self.ids,
            index: self.index,
            adj,
            num_edges: degree_sum / 2,
        }
    }
}
