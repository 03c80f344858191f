//! Grid layout for box-and-arrow diagrams.
//!
//! Nodes are placed on an integer grid by one of several arrangement
//! strategies, then every edge is routed orthogonally between node ports
//! through the cells left free.
//!
//! ```no_run
//! use boxroute_layout::{DiagramLayout, Edge, LayoutConfig, Node};
//!
//! let nodes = vec![Node::new("a", "A"), Node::new("b", "B")];
//! let edges = vec![Edge::new("a-b", "a", "b")];
//! let mut engine = DiagramLayout::new(LayoutConfig::default())?;
//! let result = engine.layout(&nodes, &edges)?;
//! for edge in &result.edges {
//!     println!("{}: {:?}", edge.id, edge.route);
//! }
//! # Ok::<(), boxroute_layout::LayoutError>(())
//! ```

pub mod algo;
pub mod arrange;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod routing;
pub mod search;
pub mod shuffle;
pub mod types;

pub use arrange::{LayoutStrategy, Sizing};
pub use config::{LayoutConfig, MAX_LAYOUT_ATTEMPTS};
pub use error::{GeometryViolation, LayoutError, Result, StrategyKind};
pub use grid::VertexMap;
pub use layout::{DiagramLayout, layout_in_place};
pub use routing::{EdgeRouter, RoutingGraph};
pub use search::{Heuristic, PathAlgorithm, PathSearch, PathStrategy, ShortestPath};
pub use shuffle::{SeededShuffle, SharedShuffle, Shuffle, shuffle_slice};
pub use types::*;
