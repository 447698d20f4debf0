//! React/Tailwind target: emits a single `page.tsx`.
//!
//! Styling rides on the resolved token list as a `className` attribute.
//! Shadcn-flavored nodes emit library components, radix-flavored toggles
//! emit composed primitives, everything else is plain HTML. A table node
//! is self-contained: its search/pagination state is hoisted into the
//! page component and the markup reads from it.

use std::collections::BTreeSet;

use pc_core::model::{LibraryVariant, Node, NodeKind};
use serde_json::Value;

use crate::target::{Target, contains_kind, data_bool, data_str, data_value};
use crate::tokens::resolve_tokens;

pub struct ReactTarget;

impl Target for ReactTarget {
    fn file_name(&self) -> &'static str {
        "page.tsx"
    }

    fn root_indent(&self) -> usize {
        2
    }

    fn emit_node(&self, node: &Node, indent: usize) -> String {
        let spaces = "  ".repeat(indent);
        let tokens = resolve_tokens(&node.style, node.kind, node.library, data_str(node, "variant"));
        let class_attr = if tokens.is_empty() {
            String::new()
        } else {
            format!(" className=\"{}\"", tokens.join(" "))
        };
        let events = node
            .on_click
            .as_deref()
            .map(|h| format!(" onClick={{{h}}}"))
            .unwrap_or_default();

        let wrap_link = |content: String| -> String {
            match node.href.as_deref() {
                Some(href) => {
                    format!("{spaces}<Link href=\"{}\">\n  {content}\n{spaces}</Link>", esc_attr(href))
                }
                None => content,
            }
        };

        if node.library == LibraryVariant::Shadcn {
            if let Some(code) = self.emit_shadcn(node, indent, &class_attr, &events) {
                return wrap_link(code);
            }
        }
        if node.library == LibraryVariant::Radix {
            if let Some(code) = self.emit_radix(node, indent, &tokens.join(" "), &events) {
                return code;
            }
        }

        match node.kind {
            NodeKind::Table => self.emit_table(node, indent, &class_attr),
            NodeKind::Text => {
                let content = node.content.as_deref().unwrap_or_default();
                wrap_link(format!("{spaces}<div{class_attr}{events}>{content}</div>"))
            }
            NodeKind::Image => {
                let src = node.content.as_deref().unwrap_or("https://picsum.photos/200");
                wrap_link(format!(
                    "{spaces}<img src=\"{}\" alt=\"image\"{class_attr}{events} />",
                    esc_attr(src)
                ))
            }
            NodeKind::Icon => {
                let icon = node.icon.as_deref().unwrap_or("Box");
                format!("{spaces}<{icon} size={{24}}{class_attr}{events} />")
            }
            NodeKind::Input => {
                let placeholder = esc_attr(node.content.as_deref().unwrap_or_default());
                format!("{spaces}<input placeholder=\"{placeholder}\"{class_attr}{events} />")
            }
            NodeKind::Textarea => {
                let placeholder = esc_attr(node.content.as_deref().unwrap_or_default());
                format!("{spaces}<textarea placeholder=\"{placeholder}\"{class_attr}{events} />")
            }
            NodeKind::Select => {
                let label = node.content.as_deref().unwrap_or("Select...");
                format!(
                    "{spaces}<select{class_attr}{events}>\n{spaces}  <option>{label}</option>\n{spaces}</select>"
                )
            }
            NodeKind::Button => {
                let content = self.button_content(node, indent, &spaces);
                wrap_link(format!("{spaces}<button{class_attr}{events}>{content}</button>"))
            }
            NodeKind::Form
            | NodeKind::List
            | NodeKind::Tabs
            | NodeKind::Accordion
            | NodeKind::Dropdown
            | NodeKind::AvatarGroup
            | NodeKind::Interaction
            | NodeKind::Unknown => {
                // Data-driven widgets have no static HTML mapping.
                let label = node.kind.default_name();
                format!("{spaces}<div{class_attr}>{{/* {label}: no web mapping */}}</div>")
            }
            NodeKind::Container | NodeKind::Card | NodeKind::Checkbox | NodeKind::Switch
            | NodeKind::Divider => {
                if node.children.is_empty() {
                    wrap_link(format!("{spaces}<div{class_attr}{events}></div>"))
                } else {
                    let children = self.emit_children(node, indent + 1);
                    wrap_link(format!(
                        "{spaces}<div{class_attr}{events}>\n{children}\n{spaces}</div>"
                    ))
                }
            }
        }
    }

    fn collect_dependencies(&self, node: &Node, deps: &mut BTreeSet<String>) {
        if node.href.is_some() {
            deps.insert("import Link from \"next/link\"".into());
        }

        if node.library == LibraryVariant::Shadcn {
            let import = match node.kind {
                NodeKind::Button => Some("import { Button } from \"@/components/ui/button\""),
                NodeKind::Card => Some("import { Card, CardContent } from \"@/components/ui/card\""),
                NodeKind::Input => Some("import { Input } from \"@/components/ui/input\""),
                NodeKind::Textarea => Some("import { Textarea } from \"@/components/ui/textarea\""),
                NodeKind::Checkbox => Some("import { Checkbox } from \"@/components/ui/checkbox\""),
                NodeKind::Switch => Some("import { Switch } from \"@/components/ui/switch\""),
                NodeKind::Select => Some(
                    "import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from \"@/components/ui/select\"",
                ),
                NodeKind::Divider => Some("import { Separator } from \"@/components/ui/separator\""),
                _ => None,
            };
            if let Some(import) = import {
                deps.insert(import.into());
            }
        }

        if node.library == LibraryVariant::Radix {
            match node.kind {
                NodeKind::Switch => {
                    deps.insert("import * as Switch from \"@radix-ui/react-switch\"".into());
                }
                NodeKind::Checkbox => {
                    deps.insert("import * as Checkbox from \"@radix-ui/react-checkbox\"".into());
                    deps.insert("import { Check } from \"lucide-react\"".into());
                }
                _ => {}
            }
        }

        if node.kind == NodeKind::Table {
            deps.insert("import { useState, useMemo } from \"react\"".into());
            deps.insert("import { Search, ChevronLeft, ChevronRight } from \"lucide-react\"".into());
        }

        for child in &node.children {
            self.collect_dependencies(child, deps);
        }
    }

    fn serialize_literal(&self, value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".into())
    }

    fn wrap_document(&self, root: &Node, body: &str, deps: &BTreeSet<String>) -> String {
        let mut icons = BTreeSet::new();
        gather_icons(root, &mut icons);

        let mut out = String::from("import React from 'react';\n");
        for dep in deps {
            out.push_str(dep);
            out.push('\n');
        }
        if !icons.is_empty() {
            let list = icons.iter().cloned().collect::<Vec<_>>().join(", ");
            out.push_str(&format!("import {{ {list} }} from 'lucide-react';\n"));
        }
        out.push_str("\nexport default function Page() {\n");
        if contains_kind(root, NodeKind::Table) {
            out.push_str(&self.table_logic(root));
        }
        out.push_str("  return (\n");
        out.push_str(body);
        out.push_str("\n  );\n}\n");
        out
    }
}

impl ReactTarget {
    fn emit_children(&self, node: &Node, indent: usize) -> String {
        node.children
            .iter()
            .map(|c| self.emit_node(c, indent))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Button body: nested children if present, otherwise its text content.
    fn button_content(&self, node: &Node, indent: usize, spaces: &str) -> String {
        if node.children.is_empty() {
            node.content.clone().unwrap_or_else(|| "Button".into())
        } else {
            format!("\n{}\n{spaces}", self.emit_children(node, indent + 1))
        }
    }

    fn emit_shadcn(
        &self,
        node: &Node,
        indent: usize,
        class_attr: &str,
        events: &str,
    ) -> Option<String> {
        let spaces = "  ".repeat(indent);
        let checked = if data_bool(node, "checked").unwrap_or(false) {
            " defaultChecked"
        } else {
            ""
        };
        let id = node.id.as_str();
        match node.kind {
            NodeKind::Button => {
                let variant = data_str(node, "variant")
                    .map(|v| format!(" variant=\"{v}\""))
                    .unwrap_or_default();
                let content = self.button_content(node, indent, &spaces);
                Some(format!("{spaces}<Button{variant}{class_attr}{events}>{content}</Button>"))
            }
            NodeKind::Input => {
                let placeholder = esc_attr(node.content.as_deref().unwrap_or_default());
                Some(format!("{spaces}<Input placeholder=\"{placeholder}\"{class_attr}{events} />"))
            }
            NodeKind::Textarea => {
                let placeholder = esc_attr(node.content.as_deref().unwrap_or_default());
                Some(format!(
                    "{spaces}<Textarea placeholder=\"{placeholder}\"{class_attr}{events} />"
                ))
            }
            NodeKind::Checkbox => {
                let label = node.content.as_deref().unwrap_or("Checkbox");
                Some(format!(
                    "{spaces}<div className=\"flex items-center gap-2\">\n\
                     {spaces}  <Checkbox id=\"{id}\"{checked} />\n\
                     {spaces}  <label htmlFor=\"{id}\" className=\"text-sm font-medium\">{label}</label>\n\
                     {spaces}</div>"
                ))
            }
            NodeKind::Switch => {
                let label = node.content.as_deref().unwrap_or("Switch Label");
                Some(format!(
                    "{spaces}<div className=\"flex items-center gap-2\">\n\
                     {spaces}  <Switch id=\"{id}\"{checked} />\n\
                     {spaces}  <label htmlFor=\"{id}\" className=\"text-sm font-medium\">{label}</label>\n\
                     {spaces}</div>"
                ))
            }
            NodeKind::Divider => Some(format!("{spaces}<Separator{class_attr} />")),
            NodeKind::Select => {
                let placeholder = esc_attr(node.content.as_deref().unwrap_or("Select..."));
                Some(format!(
                    "{spaces}<Select>\n\
                     {spaces}  <SelectTrigger{class_attr}>\n\
                     {spaces}    <SelectValue placeholder=\"{placeholder}\" />\n\
                     {spaces}  </SelectTrigger>\n\
                     {spaces}  <SelectContent>\n\
                     {spaces}    <SelectItem value=\"1\">Option 1</SelectItem>\n\
                     {spaces}  </SelectContent>\n\
                     {spaces}</Select>"
                ))
            }
            NodeKind::Card => {
                let children = self.emit_children(node, indent + 2);
                Some(format!(
                    "{spaces}<Card{class_attr}{events}>\n\
                     {spaces}  <CardContent className=\"p-6\">\n\
                     {children}\n\
                     {spaces}  </CardContent>\n\
                     {spaces}</Card>"
                ))
            }
            _ => None,
        }
    }

    /// Radix has no primitives for plain HTML elements; only the toggle
    /// controls get composed primitives, the rest falls through.
    fn emit_radix(
        &self,
        node: &Node,
        indent: usize,
        tw_classes: &str,
        events: &str,
    ) -> Option<String> {
        let spaces = "  ".repeat(indent);
        let checked = if data_bool(node, "checked").unwrap_or(false) {
            " defaultChecked"
        } else {
            ""
        };
        let id = node.id.as_str();
        let label = node.content.as_deref().unwrap_or_default();
        match node.kind {
            NodeKind::Switch => Some(format!(
                "{spaces}<div className=\"flex items-center gap-2\">\n\
                 {spaces}  <Switch.Root className=\"{tw_classes} w-[42px] h-[25px] bg-black/50 rounded-full relative shadow-sm data-[state=checked]:bg-black outline-none cursor-default\"{checked} id=\"{id}\"{events}>\n\
                 {spaces}    <Switch.Thumb className=\"block w-[21px] h-[21px] bg-white rounded-full shadow-sm transition-transform duration-100 translate-x-0.5 will-change-transform data-[state=checked]:translate-x-[19px]\" />\n\
                 {spaces}  </Switch.Root>\n\
                 {spaces}  <label className=\"text-sm\" htmlFor=\"{id}\">{label}</label>\n\
                 {spaces}</div>"
            )),
            NodeKind::Checkbox => Some(format!(
                "{spaces}<div className=\"flex items-center gap-2\">\n\
                 {spaces}  <Checkbox.Root className=\"{tw_classes} flex h-[25px] w-[25px] appearance-none items-center justify-center rounded-[4px] bg-white shadow-[0_2px_10px] shadow-black/10 outline-none focus:shadow-[0_0_0_2px_black]\"{checked} id=\"{id}\"{events}>\n\
                 {spaces}    <Checkbox.Indicator className=\"text-black\">\n\
                 {spaces}      <Check size={{16}} />\n\
                 {spaces}    </Checkbox.Indicator>\n\
                 {spaces}  </Checkbox.Root>\n\
                 {spaces}  <label className=\"text-sm\" htmlFor=\"{id}\">{label}</label>\n\
                 {spaces}</div>"
            )),
            _ => None,
        }
    }

    /// Table markup. The search/pagination state it reads from is hoisted
    /// into the page component by `table_logic`.
    fn emit_table(&self, node: &Node, indent: usize, class_attr: &str) -> String {
        let spaces = "  ".repeat(indent);
        let headers = table_headers(node);
        let headers_json = serde_json::to_string(&headers).unwrap_or_else(|_| "[]".into());
        let col_span = headers.len();

        format!(
            "{spaces}<div{class_attr}>\n\
             {spaces}  <div className=\"p-3 border-b border-gray-200 bg-white flex items-center gap-2\">\n\
             {spaces}    <Search size={{16}} className=\"text-gray-400\" />\n\
             {spaces}    <input\n\
             {spaces}      type=\"text\"\n\
             {spaces}      placeholder=\"Search...\"\n\
             {spaces}      className=\"text-sm outline-none w-full text-gray-700 placeholder:text-gray-400\"\n\
             {spaces}      value={{searchTerm}}\n\
             {spaces}      onChange={{(e) => {{ setSearchTerm(e.target.value); setCurrentPage(1); }}}}\n\
             {spaces}    />\n\
             {spaces}  </div>\n\
             {spaces}  <div className=\"flex-1 overflow-auto\">\n\
             {spaces}    <table className=\"w-full text-sm text-left\">\n\
             {spaces}      <thead className=\"text-xs text-gray-700 uppercase bg-gray-50 border-b\">\n\
             {spaces}        <tr>\n\
             {spaces}          {{{headers_json}.map(h => (\n\
             {spaces}            <th key={{h}} className=\"px-4 py-3 font-semibold\">{{h}}</th>\n\
             {spaces}          ))}}\n\
             {spaces}        </tr>\n\
             {spaces}      </thead>\n\
             {spaces}      <tbody>\n\
             {spaces}        {{paginatedData.length > 0 ? paginatedData.map((row: any, i: number) => (\n\
             {spaces}          <tr key={{i}} className=\"border-b last:border-0 even:bg-slate-50 hover:bg-blue-50 transition-colors\">\n\
             {spaces}            {{{headers_json}.map(h => (\n\
             {spaces}              <td key={{h}} className=\"px-4 py-3 text-gray-600\">{{row[h]}}</td>\n\
             {spaces}            ))}}\n\
             {spaces}          </tr>\n\
             {spaces}        )) : (\n\
             {spaces}          <tr><td colSpan={{{col_span}}} className=\"text-center py-4 text-gray-500\">No records</td></tr>\n\
             {spaces}        )}}\n\
             {spaces}      </tbody>\n\
             {spaces}    </table>\n\
             {spaces}  </div>\n\
             {spaces}  {{totalPages > 1 && (\n\
             {spaces}    <div className=\"p-3 border-t border-gray-200 bg-white flex items-center justify-between text-xs text-gray-500\">\n\
             {spaces}      <span>Page {{currentPage}} of {{totalPages}}</span>\n\
             {spaces}      <div className=\"flex gap-1\">\n\
             {spaces}        <button disabled={{currentPage === 1}} onClick={{() => setCurrentPage(p => Math.max(1, p - 1))}} className=\"p-1 rounded hover:bg-gray-100 disabled:opacity-50\"><ChevronLeft size={{16}} /></button>\n\
             {spaces}        <button disabled={{currentPage === totalPages}} onClick={{() => setCurrentPage(p => Math.min(totalPages, p + 1))}} className=\"p-1 rounded hover:bg-gray-100 disabled:opacity-50\"><ChevronRight size={{16}} /></button>\n\
             {spaces}      </div>\n\
             {spaces}    </div>\n\
             {spaces}  )}}\n\
             {spaces}</div>"
        )
    }

    /// Search and pagination state, hoisted to the component top. One
    /// state block serves the whole page; the first table's rows win.
    fn table_logic(&self, root: &Node) -> String {
        let data = find_table_data(root).cloned().unwrap_or(Value::Array(Vec::new()));
        let literal = self.serialize_literal(&data);
        format!(
            "  const tableData = {literal};\n\
             \x20 const [searchTerm, setSearchTerm] = useState('');\n\
             \x20 const [currentPage, setCurrentPage] = useState(1);\n\
             \x20 const itemsPerPage = 10;\n\
             \n\
             \x20 const filteredData = useMemo(() => {{\n\
             \x20   if (!searchTerm) return tableData;\n\
             \x20   return tableData.filter((item: any) =>\n\
             \x20     Object.values(item).some(val =>\n\
             \x20       String(val).toLowerCase().includes(searchTerm.toLowerCase())\n\
             \x20     )\n\
             \x20   );\n\
             \x20 }}, [searchTerm]);\n\
             \n\
             \x20 const totalPages = Math.ceil(filteredData.length / itemsPerPage);\n\
             \x20 const paginatedData = filteredData.slice((currentPage - 1) * itemsPerPage, currentPage * itemsPerPage);\n\
             \n"
        )
    }
}

/// Column names of a table node, from the first row of its data bag.
fn table_headers(node: &Node) -> Vec<String> {
    data_value(node, "data")
        .and_then(Value::as_array)
        .and_then(|rows| rows.first())
        .and_then(Value::as_object)
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

fn find_table_data(node: &Node) -> Option<&Value> {
    if node.kind == NodeKind::Table {
        return data_value(node, "data");
    }
    node.children.iter().find_map(find_table_data)
}

fn gather_icons(node: &Node, icons: &mut BTreeSet<String>) {
    if node.kind == NodeKind::Icon {
        if let Some(icon) = &node.icon {
            icons.insert(icon.clone());
        }
    }
    for child in &node.children {
        gather_icons(child, icons);
    }
}

fn esc_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_core::factory::create_node;
    use pc_core::id::NodeId;
    use pretty_assertions::assert_eq;

    fn doc_with(kind: NodeKind) -> pc_core::model::Document {
        let mut doc = pc_core::model::Document::new();
        let node = create_node(kind, NodeId::root());
        doc.root.children.push(node);
        doc
    }

    #[test]
    fn text_node_emits_a_div_with_content() {
        let target = ReactTarget;
        let mut node = create_node(NodeKind::Text, NodeId::root());
        node.content = Some("Hello".into());
        node.style = Default::default();
        let out = target.emit_node(&node, 0);
        assert_eq!(out, "<div>Hello</div>");
    }

    #[test]
    fn href_wraps_the_emission_in_a_link() {
        let target = ReactTarget;
        let mut node = create_node(NodeKind::Text, NodeId::root());
        node.href = Some("/about".into());
        let out = target.emit_node(&node, 0);
        assert!(out.starts_with("<Link href=\"/about\">"));
        assert!(out.ends_with("</Link>"));
    }

    #[test]
    fn shadcn_button_emits_the_library_component() {
        let target = ReactTarget;
        let mut node = create_node(NodeKind::Button, NodeId::root());
        node.library = LibraryVariant::Shadcn;
        let out = target.emit_node(&node, 0);
        assert!(out.contains("<Button"));
        assert!(out.ends_with("</Button>"));
    }

    #[test]
    fn table_dependencies_include_hooks_and_icons() {
        let target = ReactTarget;
        let doc = doc_with(NodeKind::Table);
        let mut deps = BTreeSet::new();
        target.collect_dependencies(&doc.root, &mut deps);
        assert!(deps.contains("import { useState, useMemo } from \"react\""));
        assert!(
            deps.contains("import { Search, ChevronLeft, ChevronRight } from \"lucide-react\"")
        );
    }

    #[test]
    fn table_headers_come_from_the_first_row() {
        let node = create_node(NodeKind::Table, NodeId::root());
        // Map keys iterate sorted, so the header order is stable.
        assert_eq!(table_headers(&node), vec!["id", "name", "role", "status"]);
    }

    #[test]
    fn dataless_table_renders_the_no_records_row() {
        let target = ReactTarget;
        let mut node = create_node(NodeKind::Table, NodeId::root());
        node.data.clear();
        let out = target.emit_node(&node, 0);
        assert!(out.contains("No records"));
        assert!(out.contains("colSpan={0}"));
    }

    #[test]
    fn data_driven_kinds_emit_marked_placeholders() {
        let target = ReactTarget;
        let out = target.emit_node(&create_node(NodeKind::Form, NodeId::root()), 0);
        assert!(out.contains("no web mapping"));
    }

    #[test]
    fn icon_imports_are_aggregated_and_deduplicated() {
        let target = ReactTarget;
        let mut doc = pc_core::model::Document::new();
        for name in ["Star", "Heart", "Star"] {
            let mut icon = create_node(NodeKind::Icon, NodeId::root());
            icon.icon = Some(name.into());
            doc.root.children.push(icon);
        }
        let code = target.wrap_document(&doc.root, "", &BTreeSet::new());
        assert!(code.contains("import { Heart, Star } from 'lucide-react';"));
    }
}
