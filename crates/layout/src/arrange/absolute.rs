use super::Sizing;
use crate::error::{GeometryViolation, LayoutError, Result};
use crate::types::{Node, NodeRect};

/// Uses each node's own position, rejecting the first geometry violation.
///
/// Checks run in this order over all nodes, in input order: border, margin,
/// rectangle overlap, margin overlap.
pub fn absolute(nodes: &[Node], sizing: &Sizing) -> Result<Vec<NodeRect>> {
    let rects = nodes
        .iter()
        .map(|node| match (node.x, node.y) {
            (Some(x), Some(y)) => Ok(sizing.rect(node, x, y)),
            _ => Err(LayoutError::MissingPosition {
                node: node.id.clone(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(rect) = rects
        .iter()
        .find(|r| r.left < sizing.border || r.top < sizing.border)
    {
        return Err(GeometryViolation::Border {
            node: rect.id.clone(),
        }
        .into());
    }

    if let Some(rect) = rects
        .iter()
        .find(|r| r.left < sizing.origin() || r.top < sizing.origin())
    {
        return Err(GeometryViolation::Margin {
            node: rect.id.clone(),
        }
        .into());
    }

    if let Some((a, b)) = first_intersecting_pair(&rects, |a, b| a.intersects(b)) {
        return Err(GeometryViolation::Overlap {
            first: a.id.clone(),
            second: b.id.clone(),
        }
        .into());
    }

    let margin = sizing.margin;
    if let Some((a, b)) = first_intersecting_pair(&rects, |a, b| {
        a.expanded(margin).intersects(&b.expanded(margin))
    }) {
        return Err(GeometryViolation::MarginOverlap {
            first: a.id.clone(),
            second: b.id.clone(),
        }
        .into());
    }

    Ok(rects)
}

fn first_intersecting_pair(
    rects: &[NodeRect],
    clash: impl Fn(&NodeRect, &NodeRect) -> bool,
) -> Option<(&NodeRect, &NodeRect)> {
    rects.iter().enumerate().find_map(|(i, a)| {
        rects[i + 1..]
            .iter()
            .find(|b| clash(a, *b))
            .map(|b| (a, b))
    })
}
