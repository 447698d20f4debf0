//! Tree behavior through the public crate surface.

use pc_core::edit::{self, Direction, WrapperKind};
use pc_core::factory::{create_node, sidebar_preset};
use pc_core::model::{Document, NodeKind};
use pc_core::{NodeId, document_from_json};
use pretty_assertions::assert_eq;

#[test]
fn documents_round_trip_through_json() {
    let mut doc = Document::new();
    let mut card = create_node(NodeKind::Card, NodeId::root());
    card.children.push(create_node(NodeKind::Table, card.id));
    doc = edit::insert(&doc, NodeId::root(), card, None).unwrap();
    doc = edit::insert(
        &doc,
        NodeId::root(),
        sidebar_preset(NodeId::root()),
        Some(0),
    )
    .unwrap();

    let json = serde_json::to_value(&doc).unwrap();
    // Wire format: camelCase kinds, iconName/parentId field names.
    assert_eq!(json["kind"], "container");
    assert_eq!(json["children"][0]["children"][1]["kind"], "list");

    let back: Document = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn edits_compose_without_disturbing_untouched_subtrees() {
    let mut doc = Document::new();
    let section = create_node(NodeKind::Container, NodeId::root());
    let section_id = section.id;
    doc = edit::insert(&doc, NodeId::root(), section, None).unwrap();
    let text = create_node(NodeKind::Text, section_id);
    let text_id = text.id;
    doc = edit::insert(&doc, section_id, text, None).unwrap();
    let frozen_section = doc.get(section_id).unwrap().clone();

    // A sibling insert elsewhere leaves the section subtree identical.
    let button = create_node(NodeKind::Button, NodeId::root());
    doc = edit::insert(&doc, NodeId::root(), button, None).unwrap();
    assert_eq!(doc.get(section_id).unwrap(), &frozen_section);

    // Wrap, then unwrap via remove: the section itself is untouched.
    doc = edit::wrap(&doc, text_id, WrapperKind::Card).unwrap();
    let wrapper_id = doc.parent_of(text_id).unwrap();
    assert_ne!(wrapper_id, section_id);
    assert_eq!(doc.parent_of(wrapper_id), Some(section_id));
}

#[test]
fn duplicated_subtree_is_independent_of_the_original() {
    let mut doc = Document::new();
    let mut list = create_node(NodeKind::Container, NodeId::root());
    list.children.push(create_node(NodeKind::Text, list.id));
    let list_id = list.id;
    doc = edit::insert(&doc, NodeId::root(), list, None).unwrap();
    doc = edit::duplicate(&doc, list_id, Direction::After).unwrap();

    let clone_id = doc.root.children[1].id;
    doc = edit::remove(&doc, clone_id).unwrap();
    // Removing the clone leaves the original and its child intact.
    let original = doc.get(list_id).unwrap();
    assert_eq!(original.children.len(), 1);
}

#[test]
fn ingested_tree_is_repaired_into_a_valid_document() {
    let doc = document_from_json(serde_json::json!({
        "kind": "container",
        "name": "Landing",
        "children": [
            { "kind": "text", "content": "Welcome" },
            { "id": "cta", "kind": "button", "content": "Start" },
            { "id": "cta", "kind": "button", "content": "Docs" }
        ]
    }))
    .unwrap();

    assert!(doc.root.id.is_root());
    let ids = doc.all_ids();
    let unique: std::collections::HashSet<_> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
    for child in &doc.root.children {
        assert_eq!(doc.parent_of(child.id), Some(NodeId::root()));
    }
}
