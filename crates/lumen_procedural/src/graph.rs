//! # Node Graph
//!
//! A decorative "neural network": nodes scattered on a spherical shell and a
//! sparse set of edges between nearby nodes.
//!
//! ## Edge rule
//!
//! For every unordered pair `(a, b)` with `a < b`, an edge exists iff
//!
//! 1. `distance(a, b) < edge_distance`, and
//! 2. an independent draw passes `edge_probability`.
//!
//! The draw is only taken for pairs already in range. There is no cap on the
//! edge count; the coin flip keeps the density down and makes every
//! regeneration look different.
//!
//! A graph is immutable once built. Regenerating builds a new value which the
//! owner swaps in whole.

use lumen_shared::{Rgb, Vec3};
use rand::Rng;

use crate::config::{unit_interval, GraphConfig};
use crate::sampling;

/// An undirected edge between two distinct nodes, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphEdge {
    /// Lower node index.
    pub a: usize,
    /// Higher node index.
    pub b: usize,
    /// Distance between the endpoints at generation time.
    pub length: f32,
}

/// Generated nodes and edges.
#[derive(Clone, Debug, Default)]
pub struct NodeGraph {
    nodes: Vec<Vec3>,
    edges: Vec<GraphEdge>,
}

impl NodeGraph {
    /// Generates a graph from `config`, drawing from `rng`.
    ///
    /// Zero or one node produces no edges.
    pub fn generate<R: Rng + ?Sized>(config: &GraphConfig, rng: &mut R) -> Self {
        let nodes = sampling::shell_points(rng, config.node_radius, config.node_count);

        let probability = unit_interval(config.edge_probability, GraphConfig::default().edge_probability);
        let mut edges = Vec::new();
        for (a, &pa) in nodes.iter().enumerate() {
            for (offset, &pb) in nodes[a + 1..].iter().enumerate() {
                let length = pa.distance(pb);
                if length < config.edge_distance && rng.gen_bool(f64::from(probability)) {
                    edges.push(GraphEdge {
                        a,
                        b: a + 1 + offset,
                        length,
                    });
                }
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "generated node graph"
        );

        Self { nodes, edges }
    }

    /// Node positions.
    #[must_use]
    pub fn nodes(&self) -> &[Vec3] {
        &self.nodes
    }

    /// Edges, ordered by `(a, b)`.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Endpoint positions of an edge.
    #[must_use]
    pub fn endpoints(&self, edge: &GraphEdge) -> (Vec3, Vec3) {
        (self.nodes[edge.a], self.nodes[edge.b])
    }

    /// Line-list vertices: two per edge, ready for a line-segments draw.
    #[must_use]
    pub fn line_list(&self) -> Vec<Vec3> {
        self.edges
            .iter()
            .flat_map(|edge| {
                let (start, end) = self.endpoints(edge);
                [start, end]
            })
            .collect()
    }

    /// Accent colour of a node: even indices cyan, odd indices purple.
    #[must_use]
    pub const fn node_color(index: usize) -> Rgb {
        if index % 2 == 0 {
            Rgb::CYAN
        } else {
            Rgb::PURPLE
        }
    }
}
