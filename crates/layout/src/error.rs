use std::fmt;

use thiserror::Error;

use crate::types::GridPoint;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Layout,
    Path,
    Heuristic,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout => write!(f, "layout"),
            Self::Path => write!(f, "path"),
            Self::Heuristic => write!(f, "heuristic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("unknown {kind} strategy `{value}`")]
    UnknownStrategy { kind: StrategyKind, value: String },
    #[error(transparent)]
    Geometry(#[from] GeometryViolation),
    #[error("no route for edge `{edge}` between {from:?} and {to:?}")]
    PathNotFound {
        edge: String,
        from: GridPoint,
        to: GridPoint,
    },
    #[error("edge `{edge}` references unknown node `{node}`")]
    UnknownNode { edge: String, node: String },
    #[error("node `{node}` has no absolute position")]
    MissingPosition { node: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Rejections raised by the absolute strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryViolation {
    #[error("node `{node}` is placed inside the border")]
    Border { node: String },
    #[error("node `{node}` is placed inside the margin")]
    Margin { node: String },
    #[error("nodes `{first}` and `{second}` overlap")]
    Overlap { first: String, second: String },
    #[error("margins of nodes `{first}` and `{second}` overlap")]
    MarginOverlap { first: String, second: String },
}
