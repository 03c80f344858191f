//! Per-edge routing graphs over the shared vertex map.

mod graph;

pub use graph::RoutingGraph;

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::grid::VertexMap;
use crate::search::PathSearch;
use crate::types::{Edge, GridPoint, NodeRect, RoutedEdge};

/// Weight of the arc between a node center and one of its ports.
fn connector_cost(center: GridPoint, port: GridPoint) -> u64 {
    (center.distance(&port) * 100.0).round() as u64
}

/// Routes edges between placed rectangles.
///
/// The vertex map is only read, so edges can be routed in parallel; each
/// edge gets its own [`RoutingGraph`].
pub struct EdgeRouter<'a> {
    map: &'a VertexMap,
    rects: &'a [NodeRect],
    lookup: HashMap<&'a str, usize>,
    port_owner: HashMap<GridPoint, usize>,
    search: PathSearch,
}

impl<'a> EdgeRouter<'a> {
    pub fn new(map: &'a VertexMap, rects: &'a [NodeRect], search: PathSearch) -> Self {
        let lookup = rects
            .iter()
            .enumerate()
            .map(|(idx, rect)| (rect.id.as_str(), idx))
            .collect();
        let port_owner = rects
            .iter()
            .enumerate()
            .flat_map(|(idx, rect)| rect.ports().into_iter().map(move |port| (port, idx)))
            .collect();
        Self {
            map,
            rects,
            lookup,
            port_owner,
            search,
        }
    }

    /// Routing graph for a connection from `rects[origin]` to `rects[dest]`.
    ///
    /// Corridor arcs join every two available cells of a row or column with
    /// nothing but free, non-port cells between them, at unit cost. Ports
    /// are never passed through: a corridor may only start at a port of
    /// `origin` and only end at a port of `dest`. The origin center feeds
    /// its ports and the destination ports drain into the destination
    /// center.
    pub fn routing_graph(&self, origin: usize, dest: usize) -> RoutingGraph {
        let mut graph = RoutingGraph::new();
        let (width, height) = (self.map.width() as i32, self.map.height() as i32);

        for y in 0..height {
            let row: Vec<GridPoint> = (0..width).map(|x| GridPoint::new(x, y)).collect();
            self.add_corridors(&mut graph, &row, origin, dest);
        }
        for x in 0..width {
            let column: Vec<GridPoint> = (0..height).map(|y| GridPoint::new(x, y)).collect();
            self.add_corridors(&mut graph, &column, origin, dest);
        }

        let source = &self.rects[origin];
        let center = source.center();
        for port in source.ports() {
            graph.add_arc(center, port, connector_cost(center, port));
        }

        let sink = &self.rects[dest];
        let center = sink.center();
        for port in sink.ports() {
            graph.add_arc(port, center, connector_cost(center, port));
        }

        graph
    }

    fn add_corridors(
        &self,
        graph: &mut RoutingGraph,
        line: &[GridPoint],
        origin: usize,
        dest: usize,
    ) {
        for (i, &from) in line.iter().enumerate() {
            if !self.map.is_available(from) {
                continue;
            }
            if self.port_owner.get(&from).is_some_and(|&owner| owner != origin) {
                continue;
            }
            self.extend_corridor(graph, from, line[i + 1..].iter().copied(), dest);
            self.extend_corridor(graph, from, line[..i].iter().rev().copied(), dest);
        }
    }

    fn extend_corridor(
        &self,
        graph: &mut RoutingGraph,
        from: GridPoint,
        ahead: impl Iterator<Item = GridPoint>,
        dest: usize,
    ) {
        for to in ahead {
            if !self.map.is_available(to) {
                break;
            }
            match self.port_owner.get(&to) {
                Some(&owner) => {
                    if owner == dest {
                        graph.add_arc(from, to, 1);
                    }
                    break;
                }
                None => graph.add_arc(from, to, 1),
            }
        }
    }

    /// Route from the center of `edge.from` to the center of `edge.to`.
    ///
    /// A self-loop is the two-point route `[center, center]`.
    pub fn route(&self, edge: &Edge) -> Result<RoutedEdge> {
        let (origin, dest) = self.endpoints(edge)?;
        let start = self.rects[origin].center();
        let end = self.rects[dest].center();

        let (route, cost) = if origin == dest {
            (vec![start, end], 0)
        } else {
            let graph = self.routing_graph(origin, dest);
            let path = self
                .search
                .best_path(&graph, start, end)
                .ok_or_else(|| LayoutError::PathNotFound {
                    edge: edge.id.clone(),
                    from: start,
                    to: end,
                })?;
            debug!(
                edge = %edge.id,
                arcs = graph.arc_count(),
                cost = path.cost,
                "routed edge"
            );
            (path.points, path.cost)
        };

        Ok(RoutedEdge {
            id: edge.id.clone(),
            from: edge.from.clone(),
            to: edge.to.clone(),
            route,
            cost,
        })
    }

    /// Routes every edge in parallel, keeping input order. Any failed edge
    /// fails the whole batch.
    pub fn route_all(&self, edges: &[Edge]) -> Result<Vec<RoutedEdge>> {
        edges.par_iter().map(|edge| self.route(edge)).collect()
    }

    fn endpoints(&self, edge: &Edge) -> Result<(usize, usize)> {
        let find = |id: &str| {
            self.lookup
                .get(id)
                .copied()
                .ok_or_else(|| LayoutError::UnknownNode {
                    edge: edge.id.clone(),
                    node: id.to_string(),
                })
        };
        Ok((find(&edge.from)?, find(&edge.to)?))
    }
}
