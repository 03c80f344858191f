//! Sizing and strategy selection, as supplied by the configuration layer.

use serde::{Deserialize, Serialize};

use crate::arrange::{LayoutStrategy, Sizing};
use crate::error::{LayoutError, Result};
use crate::search::{Heuristic, PathAlgorithm, PathSearch, PathStrategy};

/// Upper bound on random arrangement samples per diagram.
pub const MAX_LAYOUT_ATTEMPTS: i32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub layout_strategy: LayoutStrategy,
    pub path_strategy: PathAlgorithm,
    /// Only read when `path_strategy` is A*.
    pub heuristic: Heuristic,
    pub node_width: i32,
    pub node_height: i32,
    pub border: i32,
    pub margin: i32,
    pub layout_attempts: i32,
    /// Maximum vertices a single path search may settle. `None` is unbounded.
    pub path_attempts: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layout_strategy: LayoutStrategy::FlowSquare,
            path_strategy: PathAlgorithm::Dijkstra,
            heuristic: Heuristic::Manhattan,
            node_width: 6,
            node_height: 4,
            border: 2,
            margin: 2,
            layout_attempts: 100,
            path_attempts: None,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if self.node_width < 1 || self.node_height < 1 {
            return Err(LayoutError::InvalidConfig(format!(
                "node size must be positive, got {}x{}",
                self.node_width, self.node_height
            )));
        }
        if self.border < 0 || self.margin < 0 {
            return Err(LayoutError::InvalidConfig(format!(
                "border and margin must not be negative, got border={} margin={}",
                self.border, self.margin
            )));
        }
        if !(1..=MAX_LAYOUT_ATTEMPTS).contains(&self.layout_attempts) {
            return Err(LayoutError::InvalidConfig(format!(
                "layoutAttempts must be between 1 and {MAX_LAYOUT_ATTEMPTS}, got {}",
                self.layout_attempts
            )));
        }
        if self.path_attempts == Some(0) {
            return Err(LayoutError::InvalidConfig(
                "pathAttempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn sizing(&self) -> Sizing {
        Sizing {
            node_width: self.node_width,
            node_height: self.node_height,
            border: self.border,
            margin: self.margin,
        }
    }

    pub fn path_search(&self) -> PathSearch {
        let strategy = match self.path_strategy {
            PathAlgorithm::Dijkstra => PathStrategy::Dijkstra,
            PathAlgorithm::AStar => PathStrategy::AStar(self.heuristic),
            PathAlgorithm::Bidirectional => PathStrategy::Bidirectional,
        };
        PathSearch::new(strategy).with_settle_limit(self.path_attempts)
    }
}
