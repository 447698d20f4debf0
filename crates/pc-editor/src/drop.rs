//! Drop resolver: pointer position over a candidate node → insertion plan.
//!
//! During a drag the canvas asks, for the node under the pointer, whether
//! the pending drop would land before it, after it, or inside it. The
//! answer drives both the highlight rendering (caller's concern) and, on
//! release, which tree edit actually runs.

use pc_core::id::NodeId;
use pc_core::model::{Document, NodeKind};

/// Thickness of the top/bottom edge band, in canvas units. A pointer
/// inside the band targets a sibling slot instead of the node's interior.
pub const EDGE_BAND: f32 = 15.0;

/// Axis-aligned bounding box of a rendered node, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Where a drop would land relative to the hovered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Top,
    Bottom,
    Inside,
}

/// What is being dragged: a palette item to create, or an existing node
/// to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPayload {
    New(NodeKind),
    Existing(NodeId),
}

/// The concrete engine call a completed drop maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPlan {
    pub payload: DropPayload,
    pub parent: NodeId,
    pub index: Option<usize>,
}

/// Classify a pointer position against a node's bounds.
///
/// Child-accepting nodes expose an edge band of [`EDGE_BAND`] units at top
/// and bottom; the remaining interior resolves to `Inside`. Leaf-only
/// nodes split at the vertical midpoint — they never resolve `Inside`.
pub fn resolve_position(pointer_y: f32, bounds: Bounds, accepts_children: bool) -> DropPosition {
    let relative_y = pointer_y - bounds.y;
    if accepts_children {
        if relative_y < EDGE_BAND {
            DropPosition::Top
        } else if relative_y > bounds.height - EDGE_BAND {
            DropPosition::Bottom
        } else {
            DropPosition::Inside
        }
    } else if relative_y < bounds.height / 2.0 {
        DropPosition::Top
    } else {
        DropPosition::Bottom
    }
}

/// Turn a resolved position over `target` into an insertion plan.
///
/// Returns `None` for self-drops (an existing node dropped onto itself)
/// and for sibling positions relative to the root, which has no parent.
pub fn plan_drop(
    doc: &Document,
    payload: DropPayload,
    target: NodeId,
    position: DropPosition,
) -> Option<DropPlan> {
    if let DropPayload::Existing(id) = payload {
        if id == target {
            return None;
        }
    }
    doc.get(target)?;

    match position {
        DropPosition::Inside => Some(DropPlan {
            payload,
            parent: target,
            index: None,
        }),
        DropPosition::Top | DropPosition::Bottom => {
            let parent = doc.parent_of(target)?;
            let index = doc.index_in_parent(target)?;
            let index = if position == DropPosition::Bottom {
                index + 1
            } else {
                index
            };
            Some(DropPlan {
                payload,
                parent,
                index: Some(index),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BOX: Bounds = Bounds {
        x: 0.0,
        y: 100.0,
        width: 200.0,
        height: 80.0,
    };

    #[test]
    fn container_edge_bands_resolve_siblings() {
        assert_eq!(resolve_position(105.0, BOX, true), DropPosition::Top);
        assert_eq!(resolve_position(170.0, BOX, true), DropPosition::Bottom);
        assert_eq!(resolve_position(140.0, BOX, true), DropPosition::Inside);
    }

    #[test]
    fn band_boundary_is_exclusive() {
        // Exactly EDGE_BAND units in is already interior.
        assert_eq!(resolve_position(115.0, BOX, true), DropPosition::Inside);
        assert_eq!(resolve_position(165.0, BOX, true), DropPosition::Inside);
    }

    #[test]
    fn leaf_nodes_split_at_midpoint() {
        assert_eq!(resolve_position(139.0, BOX, false), DropPosition::Top);
        assert_eq!(resolve_position(141.0, BOX, false), DropPosition::Bottom);
        // Never inside, no matter where the pointer sits.
        assert_ne!(resolve_position(140.0, BOX, false), DropPosition::Inside);
    }

    #[test]
    fn leaf_kind_set_matches_resolver_expectations() {
        assert!(!NodeKind::Input.accepts_children());
        assert!(NodeKind::Card.accepts_children());
    }
}
