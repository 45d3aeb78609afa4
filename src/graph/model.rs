//! Weighted undirected graph with efficient edge lookup
//!
//! Nodes are dense indices `0..n-1`; the mapping to producer-side opaque
//! identifiers lives in the codec. Edge weights are assigned at
//! construction and immutable afterwards. The default-weight policy is
//! all-or-nothing per graph: if any input edge lacks a weight, the whole
//! graph is treated as unweighted (every edge gets weight 1.0).

use crate::errors::{InvariantError, Result};
use rustc_hash::FxHashMap;

/// One undirected weighted edge, stored with `u < v`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

/// An undirected weighted graph over nodes `0..n-1`
///
/// No self-loops, no parallel edges. Adjacency maps mirror the edge list
/// for O(1) weight lookups during cut evaluation and token graph
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
    /// Adjacency list per node: neighbor -> edge weight
    adjacency: Vec<FxHashMap<usize, f64>>,
}

impl Graph {
    /// Create an edgeless graph with `n` nodes
    pub fn new(n: usize) -> Self {
        Self {
            node_count: n,
            edges: Vec::new(),
            adjacency: vec![FxHashMap::default(); n],
        }
    }

    /// Build a graph from fully weighted edges
    pub fn from_weighted_edges(n: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut graph = Self::new(n);
        for &(u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Build a graph from edges whose weights may be absent, applying the
    /// all-or-nothing default-weight policy: any missing weight makes the
    /// whole graph unit-weighted.
    pub fn from_edges_with_default(n: usize, edges: &[(usize, usize, Option<f64>)]) -> Result<Self> {
        let unweighted = edges.iter().any(|(_, _, w)| w.is_none());
        let mut graph = Self::new(n);
        for &(u, v, weight) in edges {
            let weight = if unweighted {
                1.0
            } else {
                weight.unwrap_or(1.0)
            };
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Add one undirected edge; the first weight assigned to a node pair
    /// wins, later duplicates are ignored
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        if u >= self.node_count || v >= self.node_count {
            return Err(InvariantError::malformed(format!(
                "edge ({u}, {v}) out of range for {} nodes",
                self.node_count
            )));
        }
        if u == v {
            return Err(InvariantError::malformed(format!("self-loop at node {u}")));
        }
        if self.adjacency[u].contains_key(&v) {
            return Ok(());
        }
        self.adjacency[u].insert(v, weight);
        self.adjacency[v].insert(u, weight);
        let (u, v) = if u < v { (u, v) } else { (v, u) };
        self.edges.push(Edge { u, v, weight });
        Ok(())
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether nodes `u` and `v` are adjacent
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.get(u).is_some_and(|adj| adj.contains_key(&v))
    }

    /// Weight of the edge between `u` and `v`, if present
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.adjacency.get(u).and_then(|adj| adj.get(&v)).copied()
    }

    /// Neighbors of `u` with edge weights
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency[u].iter().map(|(&v, &w)| (v, w))
    }

    /// Weighted degree of `u` (sum of incident edge weights)
    pub fn weighted_degree(&self, u: usize) -> f64 {
        self.adjacency[u].values().sum()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }
}
