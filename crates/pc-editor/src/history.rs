//! Linear undo/redo history over whole-document snapshots.
//!
//! The stack holds immutable [`Document`] values; a cursor marks the one
//! currently displayed. Recording after an undo discards the redo branch.
//! Documents are plain values, so a snapshot costs one tree clone — cheap
//! at canvas scale and trivially correct.

use pc_core::model::Document;

pub struct History {
    snapshots: Vec<Document>,
    cursor: usize,
    /// Oldest snapshots are dropped past this depth.
    max_depth: usize,
}

const DEFAULT_MAX_DEPTH: usize = 100;

impl History {
    /// Start a history whose first snapshot is `initial` (the empty canvas).
    pub fn new(initial: Document) -> Self {
        Self::with_max_depth(initial, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(initial: Document, max_depth: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// The currently displayed document.
    pub fn current(&self) -> &Document {
        &self.snapshots[self.cursor]
    }

    /// Record a new snapshot: truncate any redo branch, append, advance.
    pub fn record(&mut self, doc: Document) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(doc);
        self.cursor = self.snapshots.len() - 1;
        // +1: the initial canvas below max_depth undoable steps stays pinned.
        if self.snapshots.len() > self.max_depth + 1 {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step back one snapshot. No-op at the oldest.
    pub fn undo(&mut self) -> Option<&Document> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward one snapshot. No-op at the newest.
    pub fn redo(&mut self) -> Option<&Document> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::factory::create_node;
    use pc_core::id::NodeId;
    use pc_core::model::NodeKind;
    use pc_core::edit;

    fn grow(doc: &Document) -> Document {
        let node = create_node(NodeKind::Text, NodeId::root());
        edit::insert(doc, NodeId::root(), node, None).unwrap()
    }

    #[test]
    fn undo_n_times_restores_initial() {
        let initial = Document::new();
        let mut history = History::new(initial.clone());
        let mut doc = initial.clone();
        for _ in 0..5 {
            doc = grow(&doc);
            history.record(doc.clone());
        }
        for _ in 0..5 {
            history.undo();
        }
        assert_eq!(history.current(), &initial);
        assert!(!history.can_undo());
    }

    #[test]
    fn redo_n_times_restores_newest() {
        let mut history = History::new(Document::new());
        let mut doc = Document::new();
        for _ in 0..3 {
            doc = grow(&doc);
            history.record(doc.clone());
        }
        for _ in 0..3 {
            history.undo();
        }
        for _ in 0..3 {
            history.redo();
        }
        assert_eq!(history.current(), &doc);
        assert!(!history.can_redo());
    }

    #[test]
    fn record_discards_redo_branch() {
        let mut history = History::new(Document::new());
        let a = grow(history.current());
        history.record(a.clone());
        history.undo();
        assert!(history.can_redo());

        let b = grow(history.current());
        history.record(b.clone());
        assert!(!history.can_redo());
        assert_eq!(history.current(), &b);
    }

    #[test]
    fn undo_at_floor_and_redo_at_tip_are_noops() {
        let mut history = History::new(Document::new());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn max_depth_drops_oldest() {
        let mut history = History::with_max_depth(Document::new(), 3);
        let mut doc = Document::new();
        for _ in 0..6 {
            doc = grow(&doc);
            history.record(doc.clone());
        }
        let mut undos = 0;
        while history.undo().is_some() {
            undos += 1;
        }
        assert_eq!(undos, 3);
    }
}
