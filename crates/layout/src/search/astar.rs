use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ShortestPath;
use super::frontier::{Frontier, over_limit};
use crate::error::{LayoutError, StrategyKind};
use crate::routing::RoutingGraph;
use crate::types::GridPoint;

/// Remaining-cost estimate for A*, in whole grid units.
///
/// Connector arcs are weighted at 100 per unit of distance while corridor
/// arcs cost 1 per segment, so neither estimate is admissible for every
/// graph: A* may settle for a path that is not the cheapest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Heuristic {
    Euclidean,
    Manhattan,
}

impl Heuristic {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        }
    }

    pub fn estimate(&self, from: GridPoint, to: GridPoint) -> u64 {
        match self {
            Self::Euclidean => from.distance(&to).floor() as u64,
            Self::Manhattan => (from.x.abs_diff(to.x) + from.y.abs_diff(to.y)) as u64,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            _ => Err(LayoutError::UnknownStrategy {
                kind: StrategyKind::Heuristic,
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Heuristic {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Heuristic> for String {
    fn from(heuristic: Heuristic) -> Self {
        heuristic.name().to_string()
    }
}

pub fn astar(
    graph: &RoutingGraph,
    start: GridPoint,
    end: GridPoint,
    heuristic: Heuristic,
    settle_limit: Option<usize>,
) -> Option<ShortestPath> {
    if start == end {
        return Some(ShortestPath::single(start));
    }

    let mut frontier = Frontier::new(start, heuristic.estimate(start, end));
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
            frontier.relax(point, next, through, through + heuristic.estimate(next, end));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn test_estimates() {
        assert_eq!(Heuristic::Manhattan.estimate(p(0, 0), p(3, -4)), 7);
        assert_eq!(Heuristic::Euclidean.estimate(p(0, 0), p(3, -4)), 5);
        assert_eq!(Heuristic::Euclidean.estimate(p(0, 0), p(1, 1)), 1);
        assert_eq!(Heuristic::Manhattan.estimate(p(2, 2), p(2, 2)), 0);
    }

    #[test]
    fn test_lattice_route() {
        // unit-step 4x4 lattice
        let mut arcs = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                    let (nx, ny) = (x + dx, y + dy);
                    if (0..4).contains(&nx) && (0..4).contains(&ny) {
                        arcs.push((p(x, y), p(nx, ny), 1));
                    }
                }
            }
        }
        let graph = RoutingGraph::from_arcs(arcs);
        for heuristic in [Heuristic::Euclidean, Heuristic::Manhattan] {
            let path = astar(&graph, p(0, 0), p(3, 3), heuristic, None).unwrap();
            assert_eq!(path.cost, 6);
            assert_eq!(path.points.len(), 7);
            assert_eq!(graph.path_cost(&path.points), Some(6));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("euclidean".parse::<Heuristic>().unwrap(), Heuristic::Euclidean);
        assert!(matches!(
            "chebyshev".parse::<Heuristic>(),
            Err(LayoutError::UnknownStrategy {
                kind: StrategyKind::Heuristic,
                ..
            })
        ));
    }
}
