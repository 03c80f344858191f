use super::{Sizing, place_cells};
use crate::types::{Node, NodeRect};

/// Side of the square grid holding `count` nodes.
fn square_side(count: usize) -> usize {
    match count {
        0 => 0,
        1..=3 => 2,
        _ => {
            let mut side = (count as f64).sqrt() as usize;
            while side * side < count {
                side += 1;
            }
            while (side - 1) * (side - 1) >= count {
                side -= 1;
            }
            side
        }
    }
}

/// Packs nodes row-major into a square, in input order.
pub fn flow_square(nodes: &[Node], sizing: &Sizing) -> Vec<NodeRect> {
    let order: Vec<usize> = (0..nodes.len()).collect();
    flow_square_ordered(nodes, &order, sizing)
}

/// Packs nodes row-major into a square, visiting them in `order`
/// (a permutation of node positions).
pub fn flow_square_ordered(nodes: &[Node], order: &[usize], sizing: &Sizing) -> Vec<NodeRect> {
    let side = square_side(nodes.len());
    let mut cells = vec![(0, 0); nodes.len()];
    for (slot, &idx) in order.iter().enumerate() {
        cells[idx] = (slot % side, slot / side);
    }
    place_cells(nodes, &cells, sizing)
}
