//! Core document model for PageCraft designs.
//!
//! A document is an ordered, rooted tree of [`Node`] values. Each node has
//! a stable identity, a kind (what widget it represents), a flat style
//! record, and a free-form data bag whose meaning depends on the kind
//! (table rows, form fields, tab specs). The tree is only ever mutated by
//! the pure operations in [`crate::edit`]; everything in this module is
//! data plus read-only lookups.

use crate::id::NodeId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Node kinds ──────────────────────────────────────────────────────────

/// The closed set of widget kinds a node can represent.
///
/// `Unknown` is never produced by the factory; it exists so that trees
/// ingested from an external producer (the generative-model path) with a
/// kind we don't recognize survive deserialization and surface as
/// placeholders at code-generation time instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Container,
    Text,
    Button,
    Input,
    Textarea,
    Select,
    Checkbox,
    Switch,
    Image,
    Icon,
    Divider,
    Card,
    Table,
    Form,
    List,
    Tabs,
    Accordion,
    Dropdown,
    AvatarGroup,
    Interaction,
    #[serde(other)]
    Unknown,
}

/// Every kind the factory can create, in declaration order.
pub const ALL_KINDS: [NodeKind; 20] = [
    NodeKind::Container,
    NodeKind::Text,
    NodeKind::Button,
    NodeKind::Input,
    NodeKind::Textarea,
    NodeKind::Select,
    NodeKind::Checkbox,
    NodeKind::Switch,
    NodeKind::Image,
    NodeKind::Icon,
    NodeKind::Divider,
    NodeKind::Card,
    NodeKind::Table,
    NodeKind::Form,
    NodeKind::List,
    NodeKind::Tabs,
    NodeKind::Accordion,
    NodeKind::Dropdown,
    NodeKind::AvatarGroup,
    NodeKind::Interaction,
];

impl NodeKind {
    /// Whether drop operations may place children inside this kind.
    ///
    /// The atomic set mirrors what the canvas treats as leaves; the drop
    /// resolver falls back to sibling positioning for these.
    pub fn accepts_children(&self) -> bool {
        !matches!(
            self,
            NodeKind::Text
                | NodeKind::Image
                | NodeKind::Input
                | NodeKind::Textarea
                | NodeKind::Select
                | NodeKind::Checkbox
                | NodeKind::Switch
                | NodeKind::Icon
                | NodeKind::Divider
                | NodeKind::Unknown
        )
    }

    /// Default display name for freshly created nodes.
    pub fn default_name(&self) -> &'static str {
        match self {
            NodeKind::Container => "Container",
            NodeKind::Text => "Text",
            NodeKind::Button => "Button",
            NodeKind::Input => "Input",
            NodeKind::Textarea => "Textarea",
            NodeKind::Select => "Select",
            NodeKind::Checkbox => "Checkbox",
            NodeKind::Switch => "Switch",
            NodeKind::Image => "Image",
            NodeKind::Icon => "Icon",
            NodeKind::Divider => "Divider",
            NodeKind::Card => "Card",
            NodeKind::Table => "Table",
            NodeKind::Form => "Form",
            NodeKind::List => "List",
            NodeKind::Tabs => "Tabs",
            NodeKind::Accordion => "Accordion",
            NodeKind::Dropdown => "Dropdown",
            NodeKind::AvatarGroup => "Avatar Group",
            NodeKind::Interaction => "Interaction",
            NodeKind::Unknown => "Unknown",
        }
    }
}

/// Which component-library preset a node's tokens and emission follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LibraryVariant {
    #[default]
    Radix,
    Shadcn,
    Plain,
}

// ─── Style descriptor ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    Static,
    Relative,
    Absolute,
    Fixed,
}

/// Flat presentation record attached to every node.
///
/// Every field is independently optional: absence means "inherit the
/// visual default", never zero. Sizes, colors and offsets are kept as the
/// raw strings the properties panel hands us (`"16px"`, `"#1e293b"`);
/// `"100%"` and `"auto"` are sentinels the style resolver special-cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSheet {
    pub background_color: Option<String>,
    pub color: Option<String>,

    pub padding: Option<String>,
    pub padding_top: Option<String>,
    pub padding_bottom: Option<String>,
    pub padding_left: Option<String>,
    pub padding_right: Option<String>,
    pub margin: Option<String>,
    pub margin_top: Option<String>,
    pub margin_bottom: Option<String>,
    pub margin_left: Option<String>,
    pub margin_right: Option<String>,

    pub width: Option<String>,
    pub height: Option<String>,
    pub min_height: Option<String>,
    pub max_width: Option<String>,
    pub min_width: Option<String>,

    pub border_radius: Option<String>,
    pub border_width: Option<String>,
    pub border_color: Option<String>,
    pub border_style: Option<BorderStyle>,
    pub border_top: Option<String>,
    pub border_right: Option<String>,
    pub border_bottom: Option<String>,
    pub border_left: Option<String>,

    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub flex_grow: Option<u8>,
    pub gap: Option<String>,

    pub overflow: Option<Overflow>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub text_align: Option<TextAlign>,
    pub box_shadow: Option<bool>,
    pub cursor: Option<String>,

    pub position: Option<PositionMode>,
    pub top: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
    pub z_index: Option<String>,
}

macro_rules! merge_fields {
    ($dst:expr, $src:expr, $($field:ident),+ $(,)?) => {
        $( if $src.$field.is_some() { $dst.$field = $src.$field.clone(); } )+
    };
}

impl StyleSheet {
    /// Merge `patch` into `self`, overwriting only populated fields.
    pub fn merge(&mut self, patch: &StyleSheet) {
        merge_fields!(
            self, patch,
            background_color, color,
            padding, padding_top, padding_bottom, padding_left, padding_right,
            margin, margin_top, margin_bottom, margin_left, margin_right,
            width, height, min_height, max_width, min_width,
            border_radius, border_width, border_color, border_style,
            border_top, border_right, border_bottom, border_left,
            flex_direction, justify_content, align_items, flex_grow, gap,
            overflow, font_size, font_weight, text_align, box_shadow, cursor,
            position, top, left, right, bottom, z_index,
        );
    }
}

// ─── Nodes ───────────────────────────────────────────────────────────────

/// One element of the design tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    /// Globally unique, minted at creation, never reused after delete.
    pub id: NodeId,
    pub kind: NodeKind,
    /// Human-readable label shown in the layer tree.
    pub name: String,
    pub library: LibraryVariant,
    /// Kind-specific payload: table rows, form field specs, tab specs, …
    pub data: Map<String, Value>,
    pub style: StyleSheet,
    /// Text, placeholder, or URL depending on kind.
    pub content: Option<String>,
    /// Icon-set key for icon-kind nodes (`"Star"`, `"Settings"`, …).
    #[serde(rename = "iconName")]
    pub icon: Option<String>,
    /// Navigation target; wraps the node's emitted code in a link construct.
    pub href: Option<String>,
    /// Click-handler expression carried verbatim into generated code.
    pub on_click: Option<String>,
    pub children: Vec<Node>,
    #[serde(rename = "parentId")]
    pub parent: Option<NodeId>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: NodeId::empty(),
            kind: NodeKind::Container,
            name: String::new(),
            library: LibraryVariant::default(),
            data: Map::new(),
            style: StyleSheet::default(),
            content: None,
            icon: None,
            href: None,
            on_click: None,
            children: Vec::new(),
            parent: None,
        }
    }
}

impl Node {
    /// Find a node in this subtree by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.get(id))
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.get_mut(id))
    }

    /// Find the node whose child list contains `id`.
    pub fn parent_of(&self, id: NodeId) -> Option<&Node> {
        if self.children.iter().any(|c| c.id == id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.parent_of(id))
    }

    pub(crate) fn parent_of_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.children.iter().any(|c| c.id == id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.parent_of_mut(id))
    }

    /// Depth-first pre-order visit of this subtree.
    pub fn walk(&self, visit: &mut impl FnMut(&Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

// ─── Documents ───────────────────────────────────────────────────────────

/// A whole-tree snapshot: the complete design at one point in time.
///
/// Documents are values. Edit operations never mutate one in place; they
/// return a new `Document` (see [`crate::edit`]), so a snapshot held by
/// the history stack is immutable for as long as it is held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub root: Node,
}

impl Document {
    /// Empty canvas: a full-page root container, column flow, white.
    pub fn new() -> Self {
        let style = StyleSheet {
            width: Some("100%".into()),
            height: Some("100%".into()),
            padding: Some("20px".into()),
            background_color: Some("#ffffff".into()),
            flex_direction: Some(FlexDirection::Column),
            align_items: Some(AlignItems::FlexStart),
            justify_content: Some(JustifyContent::FlexStart),
            gap: Some("20px".into()),
            overflow: Some(Overflow::Hidden),
            position: Some(PositionMode::Relative),
            ..StyleSheet::default()
        };
        Self {
            root: Node {
                id: NodeId::root(),
                kind: NodeKind::Container,
                name: "Root Page".into(),
                style,
                ..Node::default()
            },
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.root.get(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// ID of the node whose child list contains `id`.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.root.parent_of(id).map(|n| n.id)
    }

    /// Position of `id` within its parent's child list.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        self.root
            .parent_of(id)
            .and_then(|p| p.children.iter().position(|c| c.id == id))
    }

    /// All node IDs in the document, pre-order.
    pub fn all_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.root.walk(&mut |n| ids.push(n.id));
        ids
    }

    pub fn walk(&self, mut visit: impl FnMut(&Node)) {
        self.root.walk(&mut visit);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_has_bare_root() {
        let doc = Document::new();
        assert!(doc.root.id.is_root());
        assert!(doc.root.children.is_empty());
        assert_eq!(doc.root.style.width.as_deref(), Some("100%"));
    }

    #[test]
    fn style_merge_overwrites_only_populated_fields() {
        let mut base = StyleSheet {
            background_color: Some("#ffffff".into()),
            padding: Some("8px".into()),
            ..StyleSheet::default()
        };
        let patch = StyleSheet {
            background_color: Some("#f8fafc".into()),
            gap: Some("4px".into()),
            ..StyleSheet::default()
        };
        base.merge(&patch);
        assert_eq!(base.background_color.as_deref(), Some("#f8fafc"));
        assert_eq!(base.padding.as_deref(), Some("8px"));
        assert_eq!(base.gap.as_deref(), Some("4px"));
    }

    #[test]
    fn unknown_kind_survives_deserialization() {
        let node: Node =
            serde_json::from_str(r#"{"id":"x","kind":"hologram","children":[]}"#).unwrap();
        assert_eq!(node.kind, NodeKind::Unknown);
    }

    #[test]
    fn kind_names_are_camel_case_on_the_wire() {
        let json = serde_json::to_string(&NodeKind::AvatarGroup).unwrap();
        assert_eq!(json, "\"avatarGroup\"");
    }

    #[test]
    fn leaf_kinds_reject_children() {
        assert!(!NodeKind::Text.accepts_children());
        assert!(!NodeKind::Divider.accepts_children());
        assert!(NodeKind::Container.accepts_children());
        assert!(NodeKind::Table.accepts_children());
    }
}
