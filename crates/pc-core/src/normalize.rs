//! Defensive normalization of externally produced trees.
//!
//! The generative-model path hands the core a whole tree it did not build
//! itself. Normalization is best-effort repair, not validation: missing or
//! duplicate IDs are re-minted, parent pointers are rewritten, the root's
//! identity is forced. Kinds we don't recognize already landed as
//! [`NodeKind::Unknown`] during deserialization and are passed through —
//! they surface as placeholders at generation time, never as rejections.

use crate::id::NodeId;
use crate::model::{Document, Node, NodeKind};
use serde_json::Value;
use std::collections::HashSet;

/// Repair an ingested tree into a valid [`Document`] snapshot.
pub fn normalize(mut root: Node) -> Document {
    root.id = NodeId::root();
    root.parent = None;
    if root.kind == NodeKind::Unknown {
        root.kind = NodeKind::Container;
    }
    if root.name.is_empty() {
        root.name = "Root Page".into();
    }

    let mut seen = HashSet::new();
    seen.insert(root.id);
    let root_id = root.id;
    for child in &mut root.children {
        fix_subtree(child, root_id, &mut seen);
    }
    Document { root }
}

fn fix_subtree(node: &mut Node, parent: NodeId, seen: &mut HashSet<NodeId>) {
    if node.id.is_empty() || !seen.insert(node.id) {
        let fresh = NodeId::fresh();
        log::debug!("normalize: re-minted id {:?} -> {:?}", node.id, fresh);
        node.id = fresh;
        seen.insert(fresh);
    }
    node.parent = Some(parent);
    if node.name.is_empty() {
        node.name = node.kind.default_name().to_string();
    }
    let id = node.id;
    for child in &mut node.children {
        fix_subtree(child, id, seen);
    }
}

/// Deserialize a JSON tree (the generative model's response shape) and
/// normalize it. Shape errors are the caller's to handle; everything that
/// parses is repaired rather than rejected.
pub fn document_from_json(value: Value) -> Result<Document, serde_json::Error> {
    let root: Node = serde_json::from_value(value)?;
    Ok(normalize(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_ids_and_children_are_backfilled() {
        let doc = document_from_json(json!({
            "id": "root",
            "kind": "container",
            "children": [
                { "kind": "text", "content": "hello" },
                { "kind": "button" }
            ]
        }))
        .unwrap();
        assert_eq!(doc.root.children.len(), 2);
        for child in &doc.root.children {
            assert!(!child.id.is_empty());
            assert_eq!(child.parent, Some(NodeId::root()));
            assert!(child.children.is_empty());
        }
    }

    #[test]
    fn duplicate_ids_are_reminted() {
        let doc = document_from_json(json!({
            "id": "root",
            "kind": "container",
            "children": [
                { "id": "twin", "kind": "text" },
                { "id": "twin", "kind": "text" }
            ]
        }))
        .unwrap();
        assert_ne!(doc.root.children[0].id, doc.root.children[1].id);
    }

    #[test]
    fn root_identity_is_forced() {
        let doc = document_from_json(json!({
            "id": "whatever",
            "kind": "mystery",
            "children": []
        }))
        .unwrap();
        assert!(doc.root.id.is_root());
        assert_eq!(doc.root.kind, NodeKind::Container);
    }

    #[test]
    fn unknown_kinds_pass_through_below_the_root() {
        let doc = document_from_json(json!({
            "id": "root",
            "kind": "container",
            "children": [{ "id": "m", "kind": "mystery" }]
        }))
        .unwrap();
        assert_eq!(doc.root.children[0].kind, NodeKind::Unknown);
    }
}
