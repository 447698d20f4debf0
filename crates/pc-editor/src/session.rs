//! The editor session: one canvas, one history, one selection.
//!
//! `EditorSession` is the single entry point the UI layers (palette,
//! canvas, properties panel, export button) talk to. Each mutating method
//! runs one pure tree-edit operation and records the result as exactly one
//! history step; no-ops record nothing and leave the session untouched.
//! Selection is deliberately outside the snapshots — undo/redo never
//! rewinds it, it is only cleared when the selected node stops existing.

use crate::drop::{DropPayload, DropPlan, DropPosition, plan_drop};
use crate::history::History;
use pc_core::edit::{self, Direction, NodePatch, WrapperKind};
use pc_core::factory;
use pc_core::id::NodeId;
use pc_core::model::{Document, Node, NodeKind, StyleSheet};
use pc_core::normalize;

pub struct EditorSession {
    history: History,
    selected: Option<NodeId>,
}

impl EditorSession {
    /// A fresh session over an empty canvas, root selected.
    pub fn new() -> Self {
        Self {
            history: History::new(Document::new()),
            selected: Some(NodeId::root()),
        }
    }

    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn select(&mut self, id: Option<NodeId>) {
        self.selected = id.filter(|id| self.document().contains(*id));
    }

    /// Record the outcome of one edit. Returns whether anything changed.
    fn commit(&mut self, op: &str, result: Option<Document>) -> bool {
        match result {
            Some(doc) => {
                log::debug!("{op}: recorded");
                self.history.record(doc);
                true
            }
            None => {
                log::debug!("{op}: structural no-op");
                false
            }
        }
    }

    // ─── Structural edits ────────────────────────────────────────────

    pub fn insert(&mut self, parent: NodeId, node: Node, index: Option<usize>) -> bool {
        let result = edit::insert(self.document(), parent, node, index);
        self.commit("insert", result)
    }

    /// Create a node of `kind` via the factory and insert it. Returns the
    /// new node's ID when the insert landed.
    pub fn insert_new(
        &mut self,
        kind: NodeKind,
        parent: NodeId,
        index: Option<usize>,
    ) -> Option<NodeId> {
        let node = factory::create_node(kind, parent);
        let id = node.id;
        self.insert(parent, node, index).then_some(id)
    }

    pub fn move_node(&mut self, node: NodeId, new_parent: NodeId, index: Option<usize>) -> bool {
        let result = edit::move_node(self.document(), node, new_parent, index);
        self.commit("move", result)
    }

    pub fn duplicate(&mut self, node: NodeId, direction: Direction) -> bool {
        let result = edit::duplicate(self.document(), node, direction);
        self.commit("duplicate", result)
    }

    pub fn wrap(&mut self, node: NodeId, wrapper: WrapperKind) -> bool {
        let result = edit::wrap(self.document(), node, wrapper);
        self.commit("wrap", result)
    }

    pub fn remove(&mut self, node: NodeId) -> bool {
        let result = edit::remove(self.document(), node);
        let changed = self.commit("remove", result);
        if changed {
            self.reconcile_selection();
        }
        changed
    }

    pub fn update_node(&mut self, node: NodeId, patch: &NodePatch) -> bool {
        let result = edit::update_node(self.document(), node, patch);
        self.commit("update_node", result)
    }

    pub fn update_style(&mut self, node: NodeId, patch: &StyleSheet) -> bool {
        let result = edit::update_style(self.document(), node, patch);
        self.commit("update_style", result)
    }

    // ─── Drag & drop ─────────────────────────────────────────────────

    /// Execute a completed drop. The caller already resolved the position
    /// via [`crate::drop::resolve_position`] while rendering highlights.
    pub fn handle_drop(
        &mut self,
        payload: DropPayload,
        target: NodeId,
        position: DropPosition,
    ) -> bool {
        let Some(plan) = plan_drop(self.document(), payload, target, position) else {
            log::debug!("drop: unresolvable, ignored");
            return false;
        };
        match plan {
            DropPlan {
                payload: DropPayload::New(kind),
                parent,
                index,
            } => self.insert_new(kind, parent, index).is_some(),
            DropPlan {
                payload: DropPayload::Existing(id),
                parent,
                index,
            } => self.move_node(id, parent, index),
        }
    }

    // ─── History ─────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo().is_some();
        if moved {
            self.reconcile_selection();
        }
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo().is_some();
        if moved {
            self.reconcile_selection();
        }
        moved
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Selection is not snapshot state; drop it when the node is gone.
    fn reconcile_selection(&mut self) {
        if let Some(id) = self.selected {
            if !self.document().contains(id) {
                self.selected = None;
            }
        }
    }

    // ─── Generated trees ─────────────────────────────────────────────

    /// Accept a whole tree produced outside the editor (the generative
    /// model path). The tree is normalized, then recorded as one ordinary
    /// history step — undo returns to the canvas as it was.
    pub fn apply_generated_tree(&mut self, root: Node) {
        let doc = normalize::normalize(root);
        self.history.record(doc);
        self.reconcile_selection();
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
