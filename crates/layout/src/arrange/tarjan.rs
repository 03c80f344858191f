use super::{Sizing, place_cells};
use crate::algo::{dependency_graph, strongly_connected_components};
use crate::error::Result;
use crate::types::{Edge, Node, NodeRect};

/// One column per strongly connected component, sources on the left; the
/// members of a component stack downwards.
pub fn tarjan_layers(nodes: &[Node], edges: &[Edge], sizing: &Sizing) -> Result<Vec<NodeRect>> {
    let graph = dependency_graph(nodes, edges)?;
    let mut cells = vec![(0, 0); nodes.len()];
    for (layer, component) in strongly_connected_components(&graph).into_iter().enumerate() {
        for (position, idx) in component.into_iter().enumerate() {
            cells[idx] = (layer, position);
        }
    }
    Ok(place_cells(nodes, &cells, sizing))
}
