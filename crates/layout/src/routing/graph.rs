use petgraph::Direction;
use petgraph::graphmap::DiGraphMap;

use crate::types::GridPoint;

/// Weighted directed graph over grid points, built per edge query.
#[derive(Debug, Clone, Default)]
pub struct RoutingGraph {
    graph: DiGraphMap<GridPoint, u64>,
}

impl RoutingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_arcs(arcs: impl IntoIterator<Item = (GridPoint, GridPoint, u64)>) -> Self {
        let mut graph = Self::new();
        for (from, to, cost) in arcs {
            graph.add_arc(from, to, cost);
        }
        graph
    }

    /// Adds `from -> to`, keeping the cheaper cost if the arc already exists.
    pub fn add_arc(&mut self, from: GridPoint, to: GridPoint, cost: u64) {
        let cost = match self.graph.edge_weight(from, to) {
            Some(&existing) => existing.min(cost),
            None => cost,
        };
        self.graph.add_edge(from, to, cost);
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.graph.contains_node(point)
    }

    pub fn arc_cost(&self, from: GridPoint, to: GridPoint) -> Option<u64> {
        self.graph.edge_weight(from, to).copied()
    }

    pub fn successors(&self, point: GridPoint) -> impl Iterator<Item = (GridPoint, u64)> + '_ {
        self.graph.edges(point).map(|(_, to, &cost)| (to, cost))
    }

    pub fn predecessors(&self, point: GridPoint) -> impl Iterator<Item = (GridPoint, u64)> + '_ {
        self.graph
            .neighbors_directed(point, Direction::Incoming)
            .filter_map(move |from| self.arc_cost(from, point).map(|cost| (from, cost)))
    }

    pub fn point_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn as_graph_map(&self) -> &DiGraphMap<GridPoint, u64> {
        &self.graph
    }

    /// Sum of arc costs along `points`, or `None` if a hop is missing.
    pub fn path_cost(&self, points: &[GridPoint]) -> Option<u64> {
        points
            .windows(2)
            .map(|hop| self.arc_cost(hop[0], hop[1]))
            .sum()
    }
}
