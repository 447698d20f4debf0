//! Tree edit engine: pure structural operations over [`Document`] values.
//!
//! Every operation takes the current document by reference and returns
//! `Some(new_document)` when it changed something, or `None` for a
//! structural no-op (missing ID, root targeted by move/remove/wrap, a move
//! that would create a cycle). Callers record exactly the `Some` results
//! into history — a no-op must never produce a spurious undo step.
//!
//! Parent back-references are re-established before an operation returns,
//! so `children[i].parent == node.id` holds for every node in every
//! document the engine hands out.

use crate::factory;
use crate::id::NodeId;
use crate::model::{Document, FlexDirection, LibraryVariant, Node, NodeKind, StyleSheet};
use serde_json::{Map, Value};

/// Sibling placement for [`duplicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Before,
    After,
}

/// Kinds a node may be wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Container,
    Card,
}

impl From<WrapperKind> for NodeKind {
    fn from(kind: WrapperKind) -> Self {
        match kind {
            WrapperKind::Container => NodeKind::Container,
            WrapperKind::Card => NodeKind::Card,
        }
    }
}

/// Partial node update applied by [`update_node`]. Populated fields are
/// written over the node's current values; the data bag is replaced
/// wholesale when present.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub name: Option<String>,
    pub library: Option<LibraryVariant>,
    pub content: Option<String>,
    pub icon: Option<String>,
    pub href: Option<String>,
    pub on_click: Option<String>,
    pub data: Option<Map<String, Value>>,
}

// ─── Structural operations ───────────────────────────────────────────────

/// Insert `node` as a child of `parent_id` at `index` (default: append).
/// Out-of-range indices clamp to the end of the child list.
#[must_use]
pub fn insert(doc: &Document, parent_id: NodeId, mut node: Node, index: Option<usize>) -> Option<Document> {
    let mut next = doc.clone();
    let parent = next.root.get_mut(parent_id)?;
    node.parent = Some(parent_id);
    let at = index.unwrap_or(parent.children.len()).min(parent.children.len());
    parent.children.insert(at, node);
    Some(next)
}

/// Detach the subtree at `node_id` and re-insert it under `new_parent_id`
/// at `index`. No-op when the node is the root, targets itself, or the
/// destination lies inside the moved subtree (which would create a cycle).
#[must_use]
pub fn move_node(
    doc: &Document,
    node_id: NodeId,
    new_parent_id: NodeId,
    index: Option<usize>,
) -> Option<Document> {
    if node_id.is_root() || node_id == new_parent_id {
        return None;
    }
    let mut next = doc.clone();

    let old_parent = next.root.parent_of_mut(node_id)?;
    let pos = old_parent.children.iter().position(|c| c.id == node_id)?;
    let subtree = old_parent.children.remove(pos);

    // Destination must still exist after detaching; if it only existed
    // inside the subtree we just removed, the move would form a cycle.
    if subtree.get(new_parent_id).is_some() || next.root.get(new_parent_id).is_none() {
        return None;
    }
    insert(&next, new_parent_id, subtree, index)
}

/// Deep-clone the subtree at `node_id` with fresh IDs throughout and
/// insert the clone immediately before or after the original.
#[must_use]
pub fn duplicate(doc: &Document, node_id: NodeId, direction: Direction) -> Option<Document> {
    if node_id.is_root() {
        return None;
    }
    let mut next = doc.clone();
    let parent = next.root.parent_of_mut(node_id)?;
    let pos = parent.children.iter().position(|c| c.id == node_id)?;
    let clone = clone_with_fresh_ids(&parent.children[pos], parent.id);
    let at = match direction {
        Direction::Before => pos,
        Direction::After => pos + 1,
    };
    parent.children.insert(at, clone);
    Some(next)
}

/// Replace `node_id` in its parent's child list with a fresh wrapper node
/// whose sole child is the original. The wrapper takes the original's
/// former slot, full width, column flow.
#[must_use]
pub fn wrap(doc: &Document, node_id: NodeId, wrapper_kind: WrapperKind) -> Option<Document> {
    if node_id.is_root() {
        return None;
    }
    let mut next = doc.clone();
    let parent = next.root.parent_of_mut(node_id)?;
    let pos = parent.children.iter().position(|c| c.id == node_id)?;

    let mut wrapper = factory::create_node(wrapper_kind.into(), parent.id);
    wrapper.style.merge(&StyleSheet {
        width: Some("100%".into()),
        flex_direction: Some(FlexDirection::Column),
        padding: Some("10px".into()),
        ..StyleSheet::default()
    });

    let mut wrapped = std::mem::replace(&mut parent.children[pos], Node::default());
    wrapped.parent = Some(wrapper.id);
    wrapper.children.push(wrapped);
    parent.children[pos] = wrapper;
    Some(next)
}

/// Delete the subtree at `node_id`. The root cannot be removed.
#[must_use]
pub fn remove(doc: &Document, node_id: NodeId) -> Option<Document> {
    if node_id.is_root() {
        return None;
    }
    let mut next = doc.clone();
    let parent = next.root.parent_of_mut(node_id)?;
    let pos = parent.children.iter().position(|c| c.id == node_id)?;
    parent.children.remove(pos);
    Some(next)
}

// ─── Field updates ───────────────────────────────────────────────────────

/// Shallow-merge `patch` into the node's top-level fields.
#[must_use]
pub fn update_node(doc: &Document, node_id: NodeId, patch: &NodePatch) -> Option<Document> {
    let mut next = doc.clone();
    let node = next.root.get_mut(node_id)?;
    if let Some(name) = &patch.name {
        node.name = name.clone();
    }
    if let Some(library) = patch.library {
        node.library = library;
    }
    if let Some(content) = &patch.content {
        node.content = Some(content.clone());
    }
    if let Some(icon) = &patch.icon {
        node.icon = Some(icon.clone());
    }
    if let Some(href) = &patch.href {
        node.href = Some(href.clone());
    }
    if let Some(on_click) = &patch.on_click {
        node.on_click = Some(on_click.clone());
    }
    if let Some(data) = &patch.data {
        node.data = data.clone();
    }
    Some(next)
}

/// Shallow-merge `patch` into the node's style descriptor only.
#[must_use]
pub fn update_style(doc: &Document, node_id: NodeId, patch: &StyleSheet) -> Option<Document> {
    let mut next = doc.clone();
    let node = next.root.get_mut(node_id)?;
    node.style.merge(patch);
    Some(next)
}

// ─── Cloning ─────────────────────────────────────────────────────────────

/// Recursive clone that mints a fresh ID at every level and threads the
/// new parent ID down, so the clone is self-consistent and shares no
/// identity with the original.
pub fn clone_with_fresh_ids(node: &Node, parent: NodeId) -> Node {
    let mut clone = node.clone();
    clone.id = NodeId::fresh();
    clone.parent = Some(parent);
    clone.children = node
        .children
        .iter()
        .map(|c| clone_with_fresh_ids(c, clone.id))
        .collect();
    clone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_node;
    use pretty_assertions::assert_eq;

    fn doc_with(kinds: &[NodeKind]) -> (Document, Vec<NodeId>) {
        let mut doc = Document::new();
        let mut ids = Vec::new();
        for &kind in kinds {
            let node = create_node(kind, NodeId::root());
            ids.push(node.id);
            doc = insert(&doc, NodeId::root(), node, None).unwrap();
        }
        (doc, ids)
    }

    #[test]
    fn insert_into_missing_parent_is_a_noop() {
        let doc = Document::new();
        let node = create_node(NodeKind::Text, NodeId::root());
        assert!(insert(&doc, NodeId::intern("nope"), node, None).is_none());
    }

    #[test]
    fn insert_clamps_out_of_range_index() {
        let (doc, _) = doc_with(&[NodeKind::Text]);
        let node = create_node(NodeKind::Button, NodeId::root());
        let id = node.id;
        let doc = insert(&doc, NodeId::root(), node, Some(99)).unwrap();
        assert_eq!(doc.root.children.last().unwrap().id, id);
    }

    #[test]
    fn move_into_own_descendant_is_rejected() {
        let mut doc = Document::new();
        let outer = create_node(NodeKind::Container, NodeId::root());
        let outer_id = outer.id;
        doc = insert(&doc, NodeId::root(), outer, None).unwrap();
        let inner = create_node(NodeKind::Container, outer_id);
        let inner_id = inner.id;
        doc = insert(&doc, outer_id, inner, None).unwrap();

        assert!(move_node(&doc, outer_id, inner_id, None).is_none());
        // And self-targets are rejected outright.
        assert!(move_node(&doc, outer_id, outer_id, None).is_none());
    }

    #[test]
    fn move_reorders_siblings() {
        let (doc, ids) = doc_with(&[NodeKind::Text, NodeKind::Button, NodeKind::Card]);
        let doc = move_node(&doc, ids[2], NodeId::root(), Some(0)).unwrap();
        let order: Vec<_> = doc.root.children.iter().map(|c| c.id).collect();
        assert_eq!(order, vec![ids[2], ids[0], ids[1]]);
        assert_eq!(doc.get(ids[2]).unwrap().parent, Some(NodeId::root()));
    }

    #[test]
    fn duplicate_clones_structure_with_fresh_ids() {
        let mut doc = Document::new();
        let mut card = create_node(NodeKind::Card, NodeId::root());
        let text = create_node(NodeKind::Text, card.id);
        card.children.push(text);
        let card_id = card.id;
        doc = insert(&doc, NodeId::root(), card, None).unwrap();

        let doc = duplicate(&doc, card_id, Direction::After).unwrap();
        assert_eq!(doc.root.children.len(), 2);
        let original = &doc.root.children[0];
        let clone = &doc.root.children[1];
        assert_eq!(original.id, card_id);
        assert_ne!(clone.id, original.id);
        assert_eq!(clone.kind, original.kind);
        assert_eq!(clone.children.len(), 1);
        assert_ne!(clone.children[0].id, original.children[0].id);
        assert_eq!(clone.children[0].parent, Some(clone.id));
    }

    #[test]
    fn duplicate_before_places_clone_first() {
        let (doc, ids) = doc_with(&[NodeKind::Text]);
        let doc = duplicate(&doc, ids[0], Direction::Before).unwrap();
        assert_eq!(doc.root.children.len(), 2);
        assert_eq!(doc.root.children[1].id, ids[0]);
    }

    #[test]
    fn root_is_invariant_under_structural_ops() {
        let (doc, _) = doc_with(&[NodeKind::Text]);
        assert!(remove(&doc, NodeId::root()).is_none());
        assert!(move_node(&doc, NodeId::root(), NodeId::root(), None).is_none());
        assert!(wrap(&doc, NodeId::root(), WrapperKind::Card).is_none());
        assert!(duplicate(&doc, NodeId::root(), Direction::After).is_none());
    }

    #[test]
    fn wrap_then_delete_leaves_empty_wrapper() {
        let (doc, ids) = doc_with(&[NodeKind::Text]);
        let doc = wrap(&doc, ids[0], WrapperKind::Card).unwrap();
        assert_eq!(doc.root.children.len(), 1);
        let wrapper = &doc.root.children[0];
        assert_eq!(wrapper.kind, NodeKind::Card);
        assert_eq!(wrapper.style.width.as_deref(), Some("100%"));
        assert_eq!(wrapper.children.len(), 1);
        assert_eq!(wrapper.children[0].id, ids[0]);
        assert_eq!(wrapper.children[0].parent, Some(wrapper.id));

        let doc = remove(&doc, ids[0]).unwrap();
        let wrapper = &doc.root.children[0];
        assert_eq!(wrapper.kind, NodeKind::Card);
        assert!(wrapper.children.is_empty());
    }

    #[test]
    fn parent_pointers_hold_after_every_op() {
        fn check(doc: &Document) {
            doc.walk(|n| {
                for child in &n.children {
                    assert_eq!(child.parent, Some(n.id));
                }
            });
        }
        let (mut doc, ids) = doc_with(&[NodeKind::Text, NodeKind::Container, NodeKind::Button]);
        check(&doc);
        doc = move_node(&doc, ids[0], ids[1], None).unwrap();
        check(&doc);
        doc = duplicate(&doc, ids[1], Direction::After).unwrap();
        check(&doc);
        doc = wrap(&doc, ids[2], WrapperKind::Container).unwrap();
        check(&doc);
    }

    #[test]
    fn ids_stay_pairwise_distinct() {
        let (mut doc, ids) = doc_with(&[NodeKind::Card, NodeKind::Form, NodeKind::Tabs]);
        for _ in 0..3 {
            doc = duplicate(&doc, ids[0], Direction::After).unwrap();
        }
        let all = doc.all_ids();
        let unique: std::collections::HashSet<_> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn update_style_merges_without_clearing() {
        let (doc, ids) = doc_with(&[NodeKind::Button]);
        let patch = StyleSheet {
            background_color: Some("#0ea5e9".into()),
            ..StyleSheet::default()
        };
        let doc = update_style(&doc, ids[0], &patch).unwrap();
        let style = &doc.get(ids[0]).unwrap().style;
        assert_eq!(style.background_color.as_deref(), Some("#0ea5e9"));
        // Factory default left intact.
        assert_eq!(style.border_radius.as_deref(), Some("6px"));
    }

    #[test]
    fn update_node_replaces_data_bag_wholesale() {
        let (doc, ids) = doc_with(&[NodeKind::Table]);
        let patch = NodePatch {
            data: Some(serde_json::Map::new()),
            content: Some("renamed".into()),
            ..NodePatch::default()
        };
        let doc = update_node(&doc, ids[0], &patch).unwrap();
        let node = doc.get(ids[0]).unwrap();
        assert!(node.data.is_empty());
        assert_eq!(node.content.as_deref(), Some("renamed"));
    }

    #[test]
    fn missing_ids_are_noops_for_every_op() {
        let (doc, _) = doc_with(&[NodeKind::Text]);
        let ghost = NodeId::intern("ghost");
        assert!(move_node(&doc, ghost, NodeId::root(), None).is_none());
        assert!(duplicate(&doc, ghost, Direction::After).is_none());
        assert!(wrap(&doc, ghost, WrapperKind::Card).is_none());
        assert!(remove(&doc, ghost).is_none());
        assert!(update_node(&doc, ghost, &NodePatch::default()).is_none());
        assert!(update_style(&doc, ghost, &StyleSheet::default()).is_none());
    }
}
