//! Style resolver: [`StyleSheet`] → ordered utility-class tokens.
//!
//! Tokens come from three sources, concatenated in a fixed order so later
//! tokens override earlier ones under the target's cascade rules:
//!
//! 1. base behavioral tokens, fixed per node kind;
//! 2. library-variant bundles, a lookup keyed by (library, kind, emphasis);
//! 3. dynamic per-field tokens synthesized from the style record.
//!
//! Fields with a small enumerated domain map to fixed keyword tokens;
//! free-form values ride along verbatim inside a bracketed literal
//! (`p-[16px]`). An unrecognized value is never dropped — dropping it
//! would silently discard user intent — it simply becomes a bracketed
//! literal. The same input always yields the same token list in the same
//! order; generated output must be diff-stable.

use pc_core::model::{
    AlignItems, BorderStyle, FlexDirection, JustifyContent, LibraryVariant, NodeKind,
    PositionMode, StyleSheet, TextAlign,
};
use smallvec::SmallVec;

/// Resolved token list. Usually short; inline up to 16 entries.
pub type TokenList = SmallVec<[String; 16]>;

/// Resolve the full token list for one node.
///
/// `emphasis` is the variant sub-property from the node's data bag (for
/// buttons: `"default"`, `"outline"`, `"ghost"`, `"muted"`).
#[must_use]
pub fn resolve_tokens(
    style: &StyleSheet,
    kind: NodeKind,
    library: LibraryVariant,
    emphasis: Option<&str>,
) -> TokenList {
    let mut tokens = TokenList::new();

    for t in base_tokens(kind) {
        tokens.push((*t).to_string());
    }
    for t in variant_tokens(library, kind, emphasis) {
        tokens.push((*t).to_string());
    }
    dynamic_tokens(style, kind, &mut tokens);

    tokens
}

// ─── Base behavioral tokens ──────────────────────────────────────────────

/// Fixed per-kind token groups, applied regardless of style.
fn base_tokens(kind: NodeKind) -> &'static [&'static str] {
    match kind {
        NodeKind::Button => &["inline-flex", "items-center", "justify-center"],
        NodeKind::Container | NodeKind::Card => &["flex"],
        _ => &[],
    }
}

// ─── Library-variant bundles ─────────────────────────────────────────────

/// Canned token bundles per (library, kind, emphasis).
///
/// Shadcn-style components carry their presets inside the emitted
/// component, so the table is empty for that library; the raw-element
/// libraries get their button emphasis here.
fn variant_tokens(
    library: LibraryVariant,
    kind: NodeKind,
    emphasis: Option<&str>,
) -> &'static [&'static str] {
    match (library, kind) {
        (LibraryVariant::Shadcn, _) => &[],
        (LibraryVariant::Radix | LibraryVariant::Plain, NodeKind::Button) => {
            match emphasis.unwrap_or("default") {
                "outline" => &["border", "border-slate-200", "bg-white", "hover:bg-slate-100"],
                "ghost" => &["hover:bg-slate-100", "hover:text-slate-900"],
                "muted" => &["bg-slate-100", "text-slate-900", "hover:bg-slate-200"],
                _ => &["hover:opacity-90", "transition-opacity"],
            }
        }
        _ => &[],
    }
}

// ─── Dynamic field tokens ────────────────────────────────────────────────

fn bracket(tokens: &mut TokenList, prefix: &str, value: &str) {
    tokens.push(format!("{prefix}-[{value}]"));
}

fn dynamic_tokens(style: &StyleSheet, kind: NodeKind, tokens: &mut TokenList) {
    // Positioning
    if let Some(pos) = style.position {
        match pos {
            PositionMode::Static => {}
            PositionMode::Relative => tokens.push("relative".into()),
            PositionMode::Absolute => tokens.push("absolute".into()),
            PositionMode::Fixed => tokens.push("fixed".into()),
        }
    }
    if let Some(v) = &style.top {
        bracket(tokens, "top", v);
    }
    if let Some(v) = &style.left {
        bracket(tokens, "left", v);
    }
    if let Some(v) = &style.right {
        bracket(tokens, "right", v);
    }
    if let Some(v) = &style.bottom {
        bracket(tokens, "bottom", v);
    }
    if let Some(v) = &style.z_index {
        bracket(tokens, "z", v);
    }

    // Background & text color. Default white elides; the one palette
    // color with a canonical token gets it instead of a literal.
    if let Some(bg) = &style.background_color {
        match bg.as_str() {
            "#ffffff" => {}
            "#f8fafc" => tokens.push("bg-slate-50".into()),
            other => bracket(tokens, "bg", other),
        }
    }
    if let Some(v) = &style.color {
        bracket(tokens, "text", v);
    }

    // Spacing
    if let Some(v) = &style.padding {
        bracket(tokens, "p", v);
    }
    if let Some(v) = &style.padding_top {
        bracket(tokens, "pt", v);
    }
    if let Some(v) = &style.padding_bottom {
        bracket(tokens, "pb", v);
    }
    if let Some(v) = &style.padding_left {
        bracket(tokens, "pl", v);
    }
    if let Some(v) = &style.padding_right {
        bracket(tokens, "pr", v);
    }
    if let Some(v) = &style.margin {
        bracket(tokens, "m", v);
    }
    if let Some(v) = &style.margin_top {
        bracket(tokens, "mt", v);
    }
    if let Some(v) = &style.margin_bottom {
        bracket(tokens, "mb", v);
    }
    if let Some(v) = &style.margin_left {
        bracket(tokens, "ml", v);
    }
    if let Some(v) = &style.margin_right {
        bracket(tokens, "mr", v);
    }

    // Borders
    if let Some(v) = &style.border_radius {
        bracket(tokens, "rounded", v);
    }
    if let Some(v) = &style.border_width {
        if v != "0px" && v != "0" {
            bracket(tokens, "border", v);
        }
    }
    if let Some(v) = &style.border_color {
        bracket(tokens, "border", v);
    }
    if let Some(bs) = style.border_style {
        match bs {
            BorderStyle::Solid => tokens.push("border-solid".into()),
            BorderStyle::Dashed => tokens.push("border-dashed".into()),
            BorderStyle::Dotted => tokens.push("border-dotted".into()),
            BorderStyle::None => tokens.push("border-none".into()),
        }
    }
    if let Some(v) = &style.border_top {
        bracket(tokens, "border-t", v);
    }
    if let Some(v) = &style.border_right {
        bracket(tokens, "border-r", v);
    }
    if let Some(v) = &style.border_bottom {
        bracket(tokens, "border-b", v);
    }
    if let Some(v) = &style.border_left {
        bracket(tokens, "border-l", v);
    }

    // Flexbox. Kinds whose base group is already flex only need the
    // direction; anything else opts in when a flex field is populated.
    let needs_flex = style.flex_direction.is_some()
        || style.justify_content.is_some()
        || style.align_items.is_some()
        || style.gap.is_some();
    let base_is_flex = matches!(
        kind,
        NodeKind::Container | NodeKind::Card | NodeKind::Button
    );
    if needs_flex || base_is_flex {
        if !base_is_flex {
            tokens.push("flex".into());
        }
        match style.flex_direction {
            Some(FlexDirection::Column) => tokens.push("flex-col".into()),
            _ => tokens.push("flex-row".into()),
        }
    }
    match style.justify_content {
        Some(JustifyContent::Center) => tokens.push("justify-center".into()),
        Some(JustifyContent::SpaceBetween) => tokens.push("justify-between".into()),
        Some(JustifyContent::FlexEnd) => tokens.push("justify-end".into()),
        Some(JustifyContent::FlexStart) | None => {}
    }
    match style.align_items {
        Some(AlignItems::Center) => tokens.push("items-center".into()),
        Some(AlignItems::FlexEnd) => tokens.push("items-end".into()),
        Some(AlignItems::Stretch) => tokens.push("items-stretch".into()),
        Some(AlignItems::FlexStart) | None => {}
    }
    if let Some(v) = &style.gap {
        bracket(tokens, "gap", v);
    }
    match style.flex_grow {
        Some(1) => tokens.push("grow".into()),
        Some(0) => tokens.push("grow-0".into()),
        _ => {}
    }

    // Sizing. "100%" and "auto" are sentinels with keyword tokens; any
    // other value is a bracketed literal.
    match style.width.as_deref() {
        Some("100%") => tokens.push("w-full".into()),
        Some("auto") => tokens.push("w-auto".into()),
        Some(v) => bracket(tokens, "w", v),
        None => {}
    }
    match style.height.as_deref() {
        Some("100%") => tokens.push("h-full".into()),
        Some("auto") => tokens.push("h-auto".into()),
        Some(v) => bracket(tokens, "h", v),
        None => {}
    }
    if let Some(v) = &style.min_height {
        bracket(tokens, "min-h", v);
    }
    if let Some(v) = &style.max_width {
        bracket(tokens, "max-w", v);
    }
    if let Some(v) = &style.min_width {
        bracket(tokens, "min-w", v);
    }
    if let Some(overflow) = style.overflow {
        let word = match overflow {
            pc_core::model::Overflow::Visible => "visible",
            pc_core::model::Overflow::Hidden => "hidden",
            pc_core::model::Overflow::Scroll => "scroll",
            pc_core::model::Overflow::Auto => "auto",
        };
        tokens.push(format!("overflow-{word}"));
    }

    // Typography & effects
    if style.box_shadow == Some(true) {
        tokens.push("shadow-md".into());
    }
    if let Some(v) = &style.font_size {
        bracket(tokens, "text", v);
    }
    if let Some(v) = &style.font_weight {
        bracket(tokens, "font", v);
    }
    match style.text_align {
        Some(TextAlign::Left) => tokens.push("text-left".into()),
        Some(TextAlign::Center) => tokens.push("text-center".into()),
        Some(TextAlign::Right) => tokens.push("text-right".into()),
        None => {}
    }

    if let Some(cursor) = &style.cursor {
        tokens.push(format!("cursor-{cursor}"));
        if cursor == "pointer" && kind == NodeKind::Container {
            tokens.push("hover:bg-slate-100".into());
            tokens.push("hover:text-slate-900".into());
            tokens.push("transition-colors".into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn style() -> StyleSheet {
        StyleSheet {
            background_color: Some("#1e293b".into()),
            color: Some("#ffffff".into()),
            padding: Some("8px 16px".into()),
            border_radius: Some("6px".into()),
            width: Some("auto".into()),
            ..StyleSheet::default()
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let s = style();
        let a = resolve_tokens(&s, NodeKind::Button, LibraryVariant::Plain, None);
        let b = resolve_tokens(&s, NodeKind::Button, LibraryVariant::Plain, None);
        assert_eq!(a, b);
    }

    #[test]
    fn base_tokens_come_first() {
        let tokens = resolve_tokens(&style(), NodeKind::Button, LibraryVariant::Plain, None);
        assert_eq!(&tokens[..3], ["inline-flex", "items-center", "justify-center"]);
    }

    #[test]
    fn sentinels_get_keyword_tokens() {
        let s = StyleSheet {
            width: Some("100%".into()),
            height: Some("auto".into()),
            ..StyleSheet::default()
        };
        let tokens = resolve_tokens(&s, NodeKind::Text, LibraryVariant::Plain, None);
        assert!(tokens.contains(&"w-full".to_string()));
        assert!(tokens.contains(&"h-auto".to_string()));
    }

    #[test]
    fn free_form_values_become_bracketed_literals() {
        let s = StyleSheet {
            width: Some("250px".into()),
            gap: Some("1.5rem".into()),
            ..StyleSheet::default()
        };
        let tokens = resolve_tokens(&s, NodeKind::Text, LibraryVariant::Plain, None);
        assert!(tokens.contains(&"w-[250px]".to_string()));
        assert!(tokens.contains(&"gap-[1.5rem]".to_string()));
    }

    #[test]
    fn unrecognized_values_are_kept_verbatim() {
        let s = StyleSheet {
            width: Some("calc(100% - 3em)".into()),
            ..StyleSheet::default()
        };
        let tokens = resolve_tokens(&s, NodeKind::Text, LibraryVariant::Plain, None);
        assert!(tokens.contains(&"w-[calc(100% - 3em)]".to_string()));
    }

    #[test]
    fn default_white_background_elides() {
        let s = StyleSheet {
            background_color: Some("#ffffff".into()),
            ..StyleSheet::default()
        };
        let tokens = resolve_tokens(&s, NodeKind::Text, LibraryVariant::Plain, None);
        assert!(tokens.is_empty());
    }

    #[test]
    fn slate_background_gets_its_canonical_token() {
        let s = StyleSheet {
            background_color: Some("#f8fafc".into()),
            ..StyleSheet::default()
        };
        let tokens = resolve_tokens(&s, NodeKind::Text, LibraryVariant::Plain, None);
        assert_eq!(tokens.as_slice(), ["bg-slate-50".to_string()]);
    }

    #[test]
    fn button_emphasis_selects_a_bundle() {
        let outline = resolve_tokens(
            &StyleSheet::default(),
            NodeKind::Button,
            LibraryVariant::Plain,
            Some("outline"),
        );
        assert!(outline.contains(&"border-slate-200".to_string()));
        let shadcn = resolve_tokens(
            &StyleSheet::default(),
            NodeKind::Button,
            LibraryVariant::Shadcn,
            Some("outline"),
        );
        assert!(!shadcn.contains(&"border-slate-200".to_string()));
    }

    #[test]
    fn container_flex_direction_tokens() {
        let s = StyleSheet {
            flex_direction: Some(FlexDirection::Column),
            ..StyleSheet::default()
        };
        let tokens = resolve_tokens(&s, NodeKind::Container, LibraryVariant::Plain, None);
        assert_eq!(tokens[0], "flex");
        assert!(tokens.contains(&"flex-col".to_string()));
        // A plain text node with a flex field opts into flex explicitly.
        let tokens = resolve_tokens(&s, NodeKind::Text, LibraryVariant::Plain, None);
        assert!(tokens.contains(&"flex".to_string()));
    }
}
