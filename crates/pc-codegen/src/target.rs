//! The target abstraction and the `generate` dispatch entry.
//!
//! A target turns a document into one source artifact. Generation is
//! total: every node kind produces output for every target, falling back
//! to a clearly marked placeholder when a kind has no mapping. Dependency
//! collection goes through a `BTreeSet`, so imports are deduplicated and
//! emitted in a stable order regardless of tree shape.

use std::collections::BTreeSet;

use pc_core::model::{Document, Node, NodeKind};
use serde_json::Value;

use crate::flutter::FlutterTarget;
use crate::react::ReactTarget;

/// The built-in generation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    React,
    Flutter,
}

impl TargetKind {
    pub const ALL: [TargetKind; 2] = [TargetKind::React, TargetKind::Flutter];
}

/// One generated source artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub file_name: String,
    pub code: String,
}

/// A code generation backend.
pub trait Target {
    /// Canonical name of the emitted artifact.
    fn file_name(&self) -> &'static str;

    /// Indent level of the document root inside the page skeleton.
    fn root_indent(&self) -> usize;

    /// Emit the construct for one node (recursing into children).
    fn emit_node(&self, node: &Node, indent: usize) -> String;

    /// Record every import/support-file requirement of the subtree.
    fn collect_dependencies(&self, node: &Node, deps: &mut BTreeSet<String>);

    /// Render a data-bag value as a literal in the target language.
    fn serialize_literal(&self, value: &Value) -> String;

    /// Assemble the final artifact around the emitted body.
    fn wrap_document(&self, root: &Node, body: &str, deps: &BTreeSet<String>) -> String;
}

/// Generate the artifact for one target from a document.
#[must_use]
pub fn generate(kind: TargetKind, doc: &Document) -> GeneratedSource {
    let target: &dyn Target = match kind {
        TargetKind::React => &ReactTarget,
        TargetKind::Flutter => &FlutterTarget,
    };
    let mut deps = BTreeSet::new();
    target.collect_dependencies(&doc.root, &mut deps);
    let body = target.emit_node(&doc.root, target.root_indent());
    let code = target.wrap_document(&doc.root, &body, &deps);
    log::debug!(
        "generated {} ({} bytes, {} deps)",
        target.file_name(),
        code.len(),
        deps.len()
    );
    GeneratedSource {
        file_name: target.file_name().to_string(),
        code,
    }
}

// ─── Shared data-bag accessors ───────────────────────────────────────────

pub(crate) fn data_str<'a>(node: &'a Node, key: &str) -> Option<&'a str> {
    node.data.get(key).and_then(Value::as_str)
}

pub(crate) fn data_bool(node: &Node, key: &str) -> Option<bool> {
    node.data.get(key).and_then(Value::as_bool)
}

pub(crate) fn data_value<'a>(node: &'a Node, key: &str) -> Option<&'a Value> {
    node.data.get(key)
}

pub(crate) fn contains_kind(node: &Node, kind: NodeKind) -> bool {
    node.kind == kind || node.children.iter().any(|c| contains_kind(c, kind))
}
