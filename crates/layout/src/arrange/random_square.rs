use tracing::{debug, trace};

use super::{Sizing, flow_square, flow_square_ordered};
use crate::algo::{node_lookup, resolve_edge};
use crate::error::{LayoutError, Result};
use crate::shuffle::{Shuffle, shuffle_slice};
use crate::types::{Edge, Node, NodeRect};

/// Samples `attempts` shuffled flow-square arrangements and keeps the one
/// with the lowest total center-to-center edge length. Only a strictly
/// shorter total replaces the current best.
pub fn random_shortest_square<S: Shuffle + ?Sized>(
    nodes: &[Node],
    edges: &[Edge],
    sizing: &Sizing,
    attempts: usize,
    shuffle: &mut S,
) -> Result<Vec<NodeRect>> {
    let lookup = node_lookup(nodes);
    let endpoints = edges
        .iter()
        .map(|edge| resolve_edge(&lookup, edge))
        .collect::<Result<Vec<_>>>()?;

    let mut order: Vec<usize> = (0..nodes.len()).collect();
    let mut best: Option<(f64, Vec<NodeRect>)> = None;

    for attempt in 0..attempts {
        shuffle_slice(&mut *shuffle, &mut order);
        let rects = flow_square_ordered(nodes, &order, sizing);
        let cost = total_distance(&rects, &endpoints);
        trace!(attempt, cost, "sampled arrangement");

        if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
            debug!(attempt, cost, "retained arrangement");
            best = Some((cost, rects));
        }
    }

    Ok(match best {
        Some((_, rects)) => rects,
        None => flow_square(nodes, sizing),
    })
}

fn total_distance(rects: &[NodeRect], endpoints: &[(usize, usize)]) -> f64 {
    endpoints
        .iter()
        .map(|&(from, to)| {
            let (ax, ay) = rects[from].center_f64();
            let (bx, by) = rects[to].center_f64();
            ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt()
        })
        .sum()
}

/// Sum of Euclidean distances between the centers of each edge's endpoints.
pub fn connection_cost(rects: &[NodeRect], edges: &[Edge]) -> Result<f64> {
    let endpoints = edges
        .iter()
        .map(|edge| -> Result<(usize, usize)> {
            let find = |id: &str| {
                rects
                    .iter()
                    .position(|r| r.id == id)
                    .ok_or_else(|| LayoutError::UnknownNode {
                        edge: edge.id.clone(),
                        node: id.to_string(),
                    })
            };
            Ok((find(&edge.from)?, find(&edge.to)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(total_distance(rects, &endpoints))
}
