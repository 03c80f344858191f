use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::grid::VertexMap;
use crate::routing::EdgeRouter;
use crate::shuffle::{SeededShuffle, Shuffle};
use crate::types::*;

/// In-place layout with a freshly seeded engine.
pub fn layout_in_place<N: LayoutNode, E: LayoutEdge>(
    nodes: &mut [N],
    edges: &mut [E],
    config: &LayoutConfig,
) -> Result<()> {
    DiagramLayout::new(config.clone())?.layout_in_place(nodes, edges)
}

/// Places nodes with the configured strategy, then routes every edge
/// around them.
#[derive(Debug, Clone)]
pub struct DiagramLayout<S: Shuffle = SeededShuffle> {
    config: LayoutConfig,
    shuffle: S,
}

impl DiagramLayout<SeededShuffle> {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        Self::with_shuffle(config, SeededShuffle::from_os_rng())
    }
}

impl<S: Shuffle> DiagramLayout<S> {
    pub fn with_shuffle(config: LayoutConfig, shuffle: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, shuffle })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// One rectangle per node, in input order.
    pub fn arrange(&mut self, nodes: &[Node], edges: &[Edge]) -> Result<Vec<NodeRect>> {
        let strategy = self.config.layout_strategy;
        let rects = strategy.arrange(
            nodes,
            edges,
            &self.config.sizing(),
            self.config.layout_attempts.max(0) as usize,
            &mut self.shuffle,
        )?;
        debug!(%strategy, nodes = rects.len(), "arranged nodes");
        Ok(rects)
    }

    /// Grid size needed to hold `rects` plus margin and border.
    pub fn extent(&self, rects: &[NodeRect]) -> (i32, i32) {
        let pad = self.config.margin + self.config.border;
        let width = rects.iter().map(|r| r.left + r.width + pad).max();
        let height = rects.iter().map(|r| r.top + r.height + pad).max();
        (width.unwrap_or(0).max(0), height.unwrap_or(0).max(0))
    }

    /// One route per edge, in input order.
    pub fn route(&self, rects: &[NodeRect], edges: &[Edge]) -> Result<Vec<RoutedEdge>> {
        let (width, height) = self.extent(rects);
        let map = VertexMap::for_layout(rects, width as usize, height as usize);
        debug!(
            width,
            height,
            available = map.count_available(true),
            "built vertex map"
        );
        EdgeRouter::new(&map, rects, self.config.path_search()).route_all(edges)
    }

    pub fn layout(&mut self, nodes: &[Node], edges: &[Edge]) -> Result<LayoutResult> {
        // Phase 1: Node placement
        let rects = self.arrange(nodes, edges)?;

        // Phase 2: Edge routing
        let routed = self.route(&rects, edges)?;

        // Phase 3: Grid extent
        let (width, height) = self.extent(&rects);

        Ok(LayoutResult {
            nodes: rects,
            edges: routed,
            width,
            height,
        })
    }

    /// Lays out a host's own node and edge structures and writes the
    /// rectangles and routes back.
    pub fn layout_in_place<N: LayoutNode, E: LayoutEdge>(
        &mut self,
        nodes: &mut [N],
        edges: &mut [E],
    ) -> Result<()> {
        let internal_nodes: Vec<Node> = nodes
            .iter()
            .map(|n| {
                let mut node = Node::new(n.id(), n.label());
                if let Some((width, height)) = n.size() {
                    node = node.with_size(width, height);
                }
                if let Some(position) = n.position() {
                    node = node.at(position.x, position.y);
                }
                node
            })
            .collect();

        let internal_edges: Vec<Edge> = edges
            .iter()
            .map(|e| Edge::new(e.id(), e.source(), e.target()))
            .collect();

        let result = self.layout(&internal_nodes, &internal_edges)?;

        for (node, rect) in nodes.iter_mut().zip(&result.nodes) {
            node.set_rect(rect);
        }
        for (edge, routed) in edges.iter_mut().zip(result.edges) {
            edge.set_route(routed.route);
        }

        Ok(())
    }
}
