//! Graph record codecs
//!
//! Two input encodings are understood: the node-link JSON structure
//! produced by the graph generators (`nodes` + `links`/`edges`, optional
//! per-edge `weight`, arbitrary producer metadata such as `n`, `dist` or
//! `type` preserved opaquely), and the compact single-line graph6
//! encoding for unweighted graphs.

use crate::errors::{InvariantError, Result};
use crate::graph::Graph;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node of a node-link document; the identifier is opaque
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    pub id: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One edge of a node-link document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkEdge {
    pub source: Value,
    pub target: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Node-link JSON view of a graph.
///
/// Producer metadata outside the known fields is kept verbatim so that
/// records round-trip without loss. The edge list is accepted under
/// either key, `links` or `edges`, and always written back as `links`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLinkGraph {
    pub directed: bool,
    pub multigraph: bool,
    pub nodes: Vec<NodeLinkNode>,
    pub links: Vec<NodeLinkEdge>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for NodeLinkGraph {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;
        let mut map = Map::deserialize(deserializer)?;
        let directed = match map.remove("directed") {
            Some(v) => bool::deserialize(v).map_err(D::Error::custom)?,
            None => false,
        };
        let multigraph = match map.remove("multigraph") {
            Some(v) => bool::deserialize(v).map_err(D::Error::custom)?,
            None => false,
        };
        let nodes = map
            .remove("nodes")
            .ok_or_else(|| D::Error::missing_field("nodes"))?;
        let nodes = serde_json::from_value(nodes).map_err(D::Error::custom)?;
        let links = map
            .remove("links")
            .or_else(|| map.remove("edges"))
            .ok_or_else(|| D::Error::missing_field("links"))?;
        let links = serde_json::from_value(links).map_err(D::Error::custom)?;
        Ok(Self {
            directed,
            multigraph,
            nodes,
            links,
            extra: map,
        })
    }
}

impl NodeLinkGraph {
    /// Number of nodes in the document
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Parse a node-link JSON document from a string
pub fn parse_node_link(s: &str) -> Result<NodeLinkGraph> {
    serde_json::from_str(s)
        .map_err(|e| InvariantError::malformed(format!("node-link decode: {e}")))
}

/// Convert a node-link document into the internal indexed graph.
///
/// Nodes are indexed in document order. The all-or-nothing weight policy
/// applies: any edge without a `weight` makes the whole graph
/// unit-weighted.
pub fn to_graph(doc: &NodeLinkGraph) -> Result<Graph> {
    if doc.directed {
        return Err(InvariantError::malformed(
            "directed graphs are not supported",
        ));
    }
    let mut index: FxHashMap<String, usize> =
        FxHashMap::with_capacity_and_hasher(doc.nodes.len(), Default::default());
    for (i, node) in doc.nodes.iter().enumerate() {
        if index.insert(node.id.to_string(), i).is_some() {
            return Err(InvariantError::malformed(format!(
                "duplicate node id {}",
                node.id
            )));
        }
    }
    let mut edges = Vec::with_capacity(doc.links.len());
    for link in &doc.links {
        let resolve = |endpoint: &Value| {
            index.get(&endpoint.to_string()).copied().ok_or_else(|| {
                InvariantError::malformed(format!("edge endpoint {endpoint} is not a node"))
            })
        };
        edges.push((resolve(&link.source)?, resolve(&link.target)?, link.weight));
    }
    Graph::from_edges_with_default(doc.nodes.len(), &edges)
}

/// Encode an internal graph as a node-link document with integer node
/// identifiers `0..n-1`. Every edge carries its weight explicitly.
pub fn to_node_link(g: &Graph) -> NodeLinkGraph {
    NodeLinkGraph {
        directed: false,
        multigraph: false,
        nodes: (0..g.node_count())
            .map(|i| NodeLinkNode {
                id: Value::from(i),
                extra: Map::new(),
            })
            .collect(),
        links: g
            .edges()
            .iter()
            .map(|e| NodeLinkEdge {
                source: Value::from(e.u),
                target: Value::from(e.v),
                weight: Some(e.weight),
                extra: Map::new(),
            })
            .collect(),
        extra: Map::new(),
    }
}

/// Decode one graph6 line into a unit-weighted graph.
///
/// Handles the optional `>>graph6<<` header, the short size form
/// (n <= 62) and the 3-byte long form. The 8-byte huge form is rejected
/// as out of scale for this engine.
pub fn decode_graph6(line: &str) -> Result<Graph> {
    let s = line.trim();
    let s = s.strip_prefix(">>graph6<<").unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(InvariantError::malformed("empty graph6 line"));
    }

    let (n, data) = if bytes[0] == 126 {
        if bytes.len() >= 2 && bytes[1] == 126 {
            return Err(InvariantError::malformed(
                "graph6 huge size form is not supported",
            ));
        }
        if bytes.len() < 4 {
            return Err(InvariantError::malformed("truncated graph6 size"));
        }
        let mut n = 0usize;
        for &b in &bytes[1..4] {
            let v = (b as usize).wrapping_sub(63);
            if v > 63 {
                return Err(InvariantError::malformed(format!(
                    "invalid graph6 size byte {b}"
                )));
            }
            n = (n << 6) | v;
        }
        (n, &bytes[4..])
    } else {
        let v = (bytes[0] as usize).wrapping_sub(63);
        if v > 62 {
            return Err(InvariantError::malformed(format!(
                "invalid graph6 size byte {}",
                bytes[0]
            )));
        }
        (v, &bytes[1..])
    };

    let needed_bits = n * n.saturating_sub(1) / 2;
    let needed_bytes = needed_bits.div_ceil(6);
    if data.len() < needed_bytes {
        return Err(InvariantError::malformed("truncated graph6 edge data"));
    }
    let mut bits = Vec::with_capacity(needed_bytes * 6);
    for &b in &data[..needed_bytes] {
        let v = (b as usize).wrapping_sub(63);
        if v > 63 {
            return Err(InvariantError::malformed(format!(
                "invalid graph6 data byte {b}"
            )));
        }
        for shift in (0..6).rev() {
            bits.push((v >> shift) & 1 == 1);
        }
    }

    let mut g = Graph::new(n);
    let mut idx = 0;
    for j in 1..n {
        for i in 0..j {
            if bits[idx] {
                g.add_edge(i, j, 1.0)?;
            }
            idx += 1;
        }
    }
    Ok(g)
}
