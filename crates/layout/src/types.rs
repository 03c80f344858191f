use serde::{Deserialize, Serialize};

/// A cell coordinate in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &GridPoint) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// A node as handed over by the configuration layer.
///
/// `width`/`height` fall back to the configured node size when unset, and
/// `x`/`y` are only read by the absolute strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// A directed relationship between two nodes, referenced by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl Edge {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            ..Default::default()
        }
    }
}

/// The placed rectangle of a node. Edges are inclusive: a node with
/// `left = 2, width = 3` covers columns 2, 3 and 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRect {
    pub id: String,
    pub label: String,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl NodeRect {
    pub fn right(&self) -> i32 {
        self.left + self.width - 1
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height - 1
    }

    pub fn center(&self) -> GridPoint {
        GridPoint::new(self.left + self.width / 2, self.top + self.height / 2)
    }

    /// Center as a real-valued point, used for connection costs.
    pub fn center_f64(&self) -> (f64, f64) {
        (
            f64::from(self.left) + f64::from(self.width) / 2.0,
            f64::from(self.top) + f64::from(self.height) / 2.0,
        )
    }

    /// True for every cell of the rectangle, perimeter included.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// True only for cells strictly inside the perimeter.
    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        x > self.left && x < self.right() && y > self.top && y < self.bottom()
    }

    pub fn is_port(&self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) || self.is_interior(x, y) {
            return false;
        }
        let corner_x = x == self.left || x == self.right();
        let corner_y = y == self.top || y == self.bottom();
        !(corner_x && corner_y)
    }

    /// Perimeter cells minus the corners: top, bottom, left, then right side.
    pub fn ports(&self) -> Vec<GridPoint> {
        let mut ports = Vec::new();
        for x in self.left + 1..self.right() {
            ports.push(GridPoint::new(x, self.top));
        }
        if self.bottom() != self.top {
            for x in self.left + 1..self.right() {
                ports.push(GridPoint::new(x, self.bottom()));
            }
        }
        for y in self.top + 1..self.bottom() {
            ports.push(GridPoint::new(self.left, y));
        }
        if self.right() != self.left {
            for y in self.top + 1..self.bottom() {
                ports.push(GridPoint::new(self.right(), y));
            }
        }
        ports
    }

    pub fn expanded(&self, margin: i32) -> NodeRect {
        NodeRect {
            id: self.id.clone(),
            label: self.label.clone(),
            left: self.left - margin,
            top: self.top - margin,
            width: self.width + 2 * margin,
            height: self.height + 2 * margin,
        }
    }

    pub fn intersects(&self, other: &NodeRect) -> bool {
        self.left <= other.right()
            && other.left <= self.right()
            && self.top <= other.bottom()
            && other.top <= self.bottom()
    }
}

/// A routed edge: the polyline from the source center to the target center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutedEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub route: Vec<GridPoint>,
    pub cost: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<NodeRect>,
    pub edges: Vec<RoutedEdge>,
    pub width: i32,
    pub height: i32,
}

impl LayoutResult {
    pub fn node(&self, id: &str) -> Option<&NodeRect> {
        self.nodes.iter().find(|rect| rect.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&RoutedEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }
}

/// Trait for layout-compatible data structures
pub trait LayoutNode {
    fn id(&self) -> String;
    fn label(&self) -> String;
    fn size(&self) -> Option<(i32, i32)>;
    fn position(&self) -> Option<GridPoint>;
    fn set_rect(&mut self, rect: &NodeRect);
}

/// Trait for layout-compatible edge structures
pub trait LayoutEdge {
    fn id(&self) -> String;
    fn source(&self) -> String;
    fn target(&self) -> String;
    fn set_route(&mut self, route: Vec<GridPoint>);
}
