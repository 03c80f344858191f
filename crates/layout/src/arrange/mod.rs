//! Node arrangement strategies.
//!
//! Every strategy maps the input nodes onto one [`NodeRect`] each. The
//! returned rectangles are in input order, whatever order the strategy
//! placed them in.

mod absolute;
mod flow_square;
mod random_square;
mod tarjan;
mod topo_sort;

pub use absolute::absolute;
pub use flow_square::{flow_square, flow_square_ordered};
pub use random_square::{connection_cost, random_shortest_square};
pub use tarjan::tarjan_layers;
pub use topo_sort::topological_row;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result, StrategyKind};
use crate::shuffle::Shuffle;
use crate::types::{Edge, Node, NodeRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LayoutStrategy {
    FlowSquare,
    TopoSort,
    Tarjan,
    Absolute,
    RandomShortestSquare,
}

impl LayoutStrategy {
    pub const ALL: [LayoutStrategy; 5] = [
        LayoutStrategy::FlowSquare,
        LayoutStrategy::TopoSort,
        LayoutStrategy::Tarjan,
        LayoutStrategy::Absolute,
        LayoutStrategy::RandomShortestSquare,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FlowSquare => "flow-square",
            Self::TopoSort => "topo-sort",
            Self::Tarjan => "tarjan",
            Self::Absolute => "absolute",
            Self::RandomShortestSquare => "random-shortest-square",
        }
    }

    pub fn arrange<S: Shuffle + ?Sized>(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        sizing: &Sizing,
        attempts: usize,
        shuffle: &mut S,
    ) -> Result<Vec<NodeRect>> {
        match self {
            Self::FlowSquare => Ok(flow_square(nodes, sizing)),
            Self::TopoSort => topological_row(nodes, edges, sizing),
            Self::Tarjan => tarjan_layers(nodes, edges, sizing),
            Self::Absolute => absolute(nodes, sizing),
            Self::RandomShortestSquare => {
                random_shortest_square(nodes, edges, sizing, attempts, shuffle)
            }
        }
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutStrategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| LayoutError::UnknownStrategy {
                kind: StrategyKind::Layout,
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for LayoutStrategy {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LayoutStrategy> for String {
    fn from(strategy: LayoutStrategy) -> Self {
        strategy.name().to_string()
    }
}

/// Node dimensions and spacing, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizing {
    pub node_width: i32,
    pub node_height: i32,
    pub border: i32,
    pub margin: i32,
}

impl Sizing {
    /// Top-left corner of the first cell.
    pub fn origin(&self) -> i32 {
        self.border + self.margin
    }

    pub fn width_of(&self, node: &Node) -> i32 {
        node.width.unwrap_or(self.node_width)
    }

    pub fn height_of(&self, node: &Node) -> i32 {
        node.height.unwrap_or(self.node_height)
    }

    /// Distance between neighbouring cells. The largest node decides, so
    /// per-node size overrides never make generated layouts overlap.
    fn pitch(&self, nodes: &[Node]) -> (i32, i32) {
        let width = nodes
            .iter()
            .map(|n| self.width_of(n))
            .max()
            .unwrap_or(self.node_width)
            .max(self.node_width);
        let height = nodes
            .iter()
            .map(|n| self.height_of(n))
            .max()
            .unwrap_or(self.node_height)
            .max(self.node_height);
        (width + 2 * self.margin, height + 2 * self.margin)
    }

    pub(crate) fn rect(&self, node: &Node, left: i32, top: i32) -> NodeRect {
        NodeRect {
            id: node.id.clone(),
            label: node.label.clone(),
            left,
            top,
            width: self.width_of(node),
            height: self.height_of(node),
        }
    }
}

/// Places `nodes[i]` in cell `cells[i] = (column, row)`.
fn place_cells(nodes: &[Node], cells: &[(usize, usize)], sizing: &Sizing) -> Vec<NodeRect> {
    let (pitch_x, pitch_y) = sizing.pitch(nodes);
    let origin = sizing.origin();
    nodes
        .iter()
        .zip(cells)
        .map(|(node, &(col, row))| {
            sizing.rect(
                node,
                origin + col as i32 * pitch_x,
                origin + row as i32 * pitch_y,
            )
        })
        .collect()
}
