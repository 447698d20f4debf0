//! Export behavior across both targets.

use pc_codegen::{TargetKind, generate};
use pc_core::id::NodeId;
use pc_core::model::{ALL_KINDS, Document, Node, NodeKind};
use pc_editor::EditorSession;
use pretty_assertions::assert_eq;

fn page_with_widgets() -> Document {
    let mut session = EditorSession::new();
    let card = session
        .insert_new(NodeKind::Card, NodeId::root(), None)
        .unwrap();
    session.insert_new(NodeKind::Text, card, None).unwrap();
    session.insert_new(NodeKind::Button, card, None).unwrap();
    session.insert_new(NodeKind::Table, NodeId::root(), None).unwrap();
    session.insert_new(NodeKind::Form, NodeId::root(), None).unwrap();
    let icon = session.insert_new(NodeKind::Icon, card, None).unwrap();
    session.update_node(
        icon,
        &pc_core::edit::NodePatch {
            href: Some("/settings".into()),
            ..Default::default()
        },
    );
    session.document().clone()
}

#[test]
fn generation_is_total_over_every_kind_and_target() {
    for kind in ALL_KINDS {
        let mut session = EditorSession::new();
        session.insert_new(kind, NodeId::root(), None).unwrap();
        for target in TargetKind::ALL {
            let source = generate(target, session.document());
            assert!(
                !source.code.is_empty(),
                "{kind:?} produced empty output for {target:?}"
            );
        }
    }
}

#[test]
fn export_is_byte_identical_across_runs() {
    let doc = page_with_widgets();
    for target in TargetKind::ALL {
        let first = generate(target, &doc);
        let second = generate(target, &doc);
        assert_eq!(first, second);
    }
}

#[test]
fn react_imports_are_deduplicated() {
    let mut session = EditorSession::new();
    for _ in 0..3 {
        session.insert_new(NodeKind::Table, NodeId::root(), None).unwrap();
    }
    let code = generate(TargetKind::React, session.document()).code;
    let hook_imports = code
        .matches("import { useState, useMemo } from \"react\"")
        .count();
    assert_eq!(hook_imports, 1);
}

#[test]
fn react_page_hoists_table_state() {
    let code = generate(TargetKind::React, &page_with_widgets()).code;
    assert!(code.contains("const [searchTerm, setSearchTerm] = useState('');"));
    assert!(code.contains("const paginatedData"));
    assert!(code.contains("export default function Page()"));
}

#[test]
fn react_wraps_linked_nodes() {
    let code = generate(TargetKind::React, &page_with_widgets()).code;
    assert!(code.contains("import Link from \"next/link\""));
    assert!(code.contains("<Link href=\"/settings\">"));
}

#[test]
fn flutter_bundle_contains_only_referenced_support_files() {
    let code = generate(TargetKind::Flutter, &page_with_widgets()).code;
    assert!(code.contains("// FILE: lib/main.dart"));
    assert!(code.contains("// FILE: lib/theme/app_theme.dart"));
    assert!(code.contains("// FILE: lib/components/smart_form.dart"));
    assert!(code.contains("// FILE: lib/components/smart_table.dart"));
    assert!(code.contains("// FILE: lib/components/custom_button.dart"));
    // Nothing referenced a list, so its widget file is absent.
    assert!(!code.contains("// FILE: lib/components/dynamic_list.dart"));
}

#[test]
fn unknown_kinds_survive_ingestion_and_emit_placeholders() {
    let raw = serde_json::json!({
        "id": "root",
        "kind": "container",
        "name": "Root",
        "children": [
            { "id": "m1", "kind": "hologram", "name": "Mystery" }
        ]
    });
    let doc = pc_core::document_from_json(raw).unwrap();
    assert_eq!(doc.root.children[0].kind, NodeKind::Unknown);

    let react = generate(TargetKind::React, &doc).code;
    assert!(react.contains("no web mapping"));
    let flutter = generate(TargetKind::Flutter, &doc).code;
    assert!(flutter.contains("no mobile mapping"));
}

#[test]
fn dataless_table_still_generates_for_both_targets() {
    let mut doc = Document::new();
    let mut table = Node {
        kind: NodeKind::Table,
        name: "Empty Table".into(),
        id: NodeId::fresh(),
        parent: Some(NodeId::root()),
        ..Node::default()
    };
    table.data.clear();
    doc.root.children.push(table);

    let react = generate(TargetKind::React, &doc).code;
    assert!(react.contains("const tableData = []"));
    let flutter = generate(TargetKind::Flutter, &doc).code;
    assert!(flutter.contains("SmartTable(\n"));
}
