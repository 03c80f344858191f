//! Shortest-path searches over a [`RoutingGraph`].
//!
//! All three algorithms share the frontier bookkeeping in `frontier`, which
//! breaks cost ties by insertion order so routes are reproducible.

mod astar;
mod bidirectional;
mod dijkstra;
mod frontier;

pub use astar::{Heuristic, astar};
pub use bidirectional::bidirectional;
pub use dijkstra::dijkstra;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, StrategyKind};
use crate::routing::RoutingGraph;
use crate::types::GridPoint;

/// Cheapest route found by a search, start and end included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub cost: u64,
    pub points: Vec<GridPoint>,
}

impl ShortestPath {
    pub fn single(point: GridPoint) -> Self {
        Self {
            cost: 0,
            points: vec![point],
        }
    }
}

/// Path algorithm as named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PathAlgorithm {
    Dijkstra,
    AStar,
    Bidirectional,
}

impl PathAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
            Self::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathAlgorithm {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" => Ok(Self::AStar),
            "bidirectional" => Ok(Self::Bidirectional),
            _ => Err(LayoutError::UnknownStrategy {
                kind: StrategyKind::Path,
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for PathAlgorithm {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PathAlgorithm> for String {
    fn from(algorithm: PathAlgorithm) -> Self {
        algorithm.name().to_string()
    }
}

/// An executable search: the algorithm together with its heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStrategy {
    Dijkstra,
    AStar(Heuristic),
    Bidirectional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSearch {
    strategy: PathStrategy,
    settle_limit: Option<usize>,
}

impl PathSearch {
    pub fn new(strategy: PathStrategy) -> Self {
        Self {
            strategy,
            settle_limit: None,
        }
    }

    /// Gives up once a search has settled more than `limit` points.
    pub fn with_settle_limit(mut self, limit: Option<usize>) -> Self {
        self.settle_limit = limit;
        self
    }

    pub fn strategy(&self) -> PathStrategy {
        self.strategy
    }

    pub fn settle_limit(&self) -> Option<usize> {
        self.settle_limit
    }

    pub fn best_path(
        &self,
        graph: &RoutingGraph,
        start: GridPoint,
        end: GridPoint,
    ) -> Option<ShortestPath> {
        match self.strategy {
            PathStrategy::Dijkstra => dijkstra(graph, start, end, self.settle_limit),
            PathStrategy::AStar(heuristic) => {
                astar(graph, start, end, heuristic, self.settle_limit)
            }
            PathStrategy::Bidirectional => bidirectional(graph, start, end, self.settle_limit),
        }
    }
}
