use crate::types::*;

/// Boolean availability grid over the layout area, stored row-major.
///
/// `true` means the cell may carry a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexMap {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl VertexMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// The routing grid for a set of placed nodes: every cell outside all
    /// rectangles, plus every port cell on a rectangle's perimeter.
    pub fn for_layout(nodes: &[NodeRect], width: usize, height: usize) -> Self {
        let mut map = VertexMap::new(width, height);
        map.map_unset(|x, y| nodes.iter().any(|n| n.contains(x as i32, y as i32)));
        map.map_or(|x, y| nodes.iter().any(|n| n.is_port(x as i32, y as i32)));
        map
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} vertex map",
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Checked lookup; anything off the grid is unavailable.
    pub fn is_available(&self, point: GridPoint) -> bool {
        if point.x < 0 || point.y < 0 {
            return false;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    fn update(&mut self, mut f: impl FnMut(bool, usize, usize) -> bool) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                self.cells[idx] = f(self.cells[idx], x, y);
            }
        }
    }

    pub fn map_set(&mut self, predicate: impl Fn(usize, usize) -> bool) {
        self.update(|_, x, y| predicate(x, y));
    }

    pub fn map_or(&mut self, predicate: impl Fn(usize, usize) -> bool) {
        self.update(|cell, x, y| cell || predicate(x, y));
    }

    pub fn map_and(&mut self, predicate: impl Fn(usize, usize) -> bool) {
        self.update(|cell, x, y| cell && predicate(x, y));
    }

    /// Overwrites every cell with the negated predicate.
    pub fn map_unset(&mut self, predicate: impl Fn(usize, usize) -> bool) {
        self.update(|_, x, y| !predicate(x, y));
    }

    pub fn count_available(&self, value: bool) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// All available cells in row-major order.
    pub fn vertex_points(&self) -> Vec<GridPoint> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(|(idx, _)| GridPoint::new((idx % self.width) as i32, (idx / self.width) as i32))
            .collect()
    }
}
