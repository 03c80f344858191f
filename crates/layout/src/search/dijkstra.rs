use super::ShortestPath;
use super::frontier::{Frontier, over_limit};
use crate::routing::RoutingGraph;
use crate::types::GridPoint;

pub fn dijkstra(
    graph: &RoutingGraph,
    start: GridPoint,
    end: GridPoint,
    settle_limit: Option<usize>,
) -> Option<ShortestPath> {
    if start == end {
        return Some(ShortestPath::single(start));
    }

    let mut frontier = Frontier::new(start, 0);
    while let Some((dist, point)) = frontier.pop() {
        if point == end {
            return Some(ShortestPath {
                cost: dist,
                points: frontier.trace(end),
            });
        }
        if over_limit(frontier.settled_count(), settle_limit) {
            return None;
        }
        for (next, cost) in graph.successors(point) {
            let through = dist + cost;
            frontier.relax(point, next, through, through);
        }
    }
    None
}
