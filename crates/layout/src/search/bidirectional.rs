use super::ShortestPath;
use super::frontier::{Frontier, over_limit};
use crate::routing::RoutingGraph;
use crate::types::GridPoint;

/// Dijkstra from both ends at once, walking arcs backwards from `end`.
///
/// The side whose cheapest open point is lower advances (forward on ties).
/// The search stops once the two cheapest open points together cost at
/// least as much as the best meeting found, or when either side runs dry.
pub fn bidirectional(
    graph: &RoutingGraph,
    start: GridPoint,
    end: GridPoint,
    settle_limit: Option<usize>,
) -> Option<ShortestPath> {
    if start == end {
        return Some(ShortestPath::single(start));
    }

    let mut forward = Frontier::new(start, 0);
    let mut backward = Frontier::new(end, 0);
    // (total cost, meeting point)
    let mut best: Option<(u64, GridPoint)> = None;

    while let (Some(ahead), Some(behind)) = (forward.peek_priority(), backward.peek_priority()) {
        if best.is_some_and(|(cost, _)| ahead + behind >= cost) {
            break;
        }

        if ahead <= behind {
            let Some((dist, point)) = forward.pop() else {
                break;
            };
            for (next, cost) in graph.successors(point) {
                let through = dist + cost;
                forward.relax(point, next, through, through);
                if let Some(rest) = backward.dist(next) {
                    offer(&mut best, through + rest, next);
                }
            }
        } else {
            let Some((dist, point)) = backward.pop() else {
                break;
            };
            for (prev, cost) in graph.predecessors(point) {
                let through = dist + cost;
                backward.relax(point, prev, through, through);
                if let Some(head) = forward.dist(prev) {
                    offer(&mut best, head + through, prev);
                }
            }
        }

        if over_limit(
            forward.settled_count() + backward.settled_count(),
            settle_limit,
        ) {
            return None;
        }
    }

    let (cost, meeting) = best?;
    let mut points = forward.trace(meeting);
    let mut tail = backward.trace(meeting);
    tail.reverse();
    points.extend(tail.into_iter().skip(1));
    Some(ShortestPath { cost, points })
}

fn offer(best: &mut Option<(u64, GridPoint)>, total: u64, meeting: GridPoint) {
    if best.is_none_or(|(cost, _)| total < cost) {
        *best = Some((total, meeting));
    }
}
