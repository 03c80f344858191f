use super::{Sizing, place_cells};
use crate::algo::{dependency_graph, rank_order};
use crate::error::Result;
use crate::types::{Edge, Node, NodeRect};

/// Places all nodes in one row, ordered by rank so that sources come first.
pub fn topological_row(nodes: &[Node], edges: &[Edge], sizing: &Sizing) -> Result<Vec<NodeRect>> {
    let graph = dependency_graph(nodes, edges)?;
    let mut cells = vec![(0, 0); nodes.len()];
    for (column, idx) in rank_order(&graph).into_iter().enumerate() {
        cells[idx] = (column, 0);
    }
    Ok(place_cells(nodes, &cells, sizing))
}
