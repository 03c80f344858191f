//! Graph algorithms over the node/edge relationship graph.

mod rank;
mod scc;

pub use rank::{longest_path_ranks, rank_order};
pub use scc::strongly_connected_components;

use std::collections::HashMap;

use petgraph::graphmap::DiGraphMap;

use crate::error::{LayoutError, Result};
use crate::types::{Edge, Node};

/// Directed graph over node positions in `nodes`. Node and neighbor
/// iteration follow input order, which keeps every traversal deterministic.
pub fn dependency_graph(nodes: &[Node], edges: &[Edge]) -> Result<DiGraphMap<usize, ()>> {
    let lookup = node_lookup(nodes);
    let mut graph = DiGraphMap::with_capacity(nodes.len(), edges.len());
    for idx in 0..nodes.len() {
        graph.add_node(idx);
    }
    for edge in edges {
        let (from, to) = resolve_edge(&lookup, edge)?;
        graph.add_edge(from, to, ());
    }
    Ok(graph)
}

pub(crate) fn node_lookup(nodes: &[Node]) -> HashMap<&str, usize> {
    nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.id.as_str(), idx))
        .collect()
}

pub(crate) fn resolve_edge(lookup: &HashMap<&str, usize>, edge: &Edge) -> Result<(usize, usize)> {
    let find = |id: &str| {
        lookup
            .get(id)
            .copied()
            .ok_or_else(|| LayoutError::UnknownNode {
                edge: edge.id.clone(),
                node: id.to_string(),
            })
    };
    Ok((find(&edge.from)?, find(&edge.to)?))
}
