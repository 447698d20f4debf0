//! Flutter target: emits a multi-file Dart bundle as one artifact.
//!
//! Data-heavy kinds (form, table, list, tabs, accordion) map to reusable
//! "smart" widgets; each one referenced by the tree gets a support file
//! appended to the output under a `// FILE:` banner, along with a theme
//! file and the `main.dart` page skeleton. Data bags are rendered through
//! a Dart literal serializer, not JSON pasting, so strings are escaped
//! for Dart (including `$`).

use std::collections::BTreeSet;

use pc_core::model::{
    AlignItems, FlexDirection, JustifyContent, Node, NodeKind, StyleSheet,
};
use serde_json::Value;

use crate::target::{Target, data_bool, data_str, data_value};

pub struct FlutterTarget;

impl Target for FlutterTarget {
    fn file_name(&self) -> &'static str {
        "main.dart"
    }

    fn root_indent(&self) -> usize {
        3
    }

    fn emit_node(&self, node: &Node, indent: usize) -> String {
        match node.href.as_deref() {
            Some(href) => {
                let i = "  ".repeat(indent);
                let i2 = "  ".repeat(indent + 1);
                let inner = self.emit_kind(node, indent + 1);
                format!(
                    "{i}GestureDetector(\n\
                     {i2}onTap: () {{ debugPrint({}); }},\n\
                     {i2}child:\n{inner},\n\
                     {i})",
                    quote(&format!("navigate: {href}"))
                )
            }
            None => self.emit_kind(node, indent),
        }
    }

    fn collect_dependencies(&self, node: &Node, deps: &mut BTreeSet<String>) {
        match node.kind {
            NodeKind::Input | NodeKind::Textarea => {
                deps.insert("CustomTextField".into());
            }
            NodeKind::Button => {
                deps.insert("CustomButton".into());
            }
            NodeKind::Form => {
                // smart_form.dart imports the field and button widgets.
                deps.insert("SmartForm".into());
                deps.insert("CustomTextField".into());
                deps.insert("CustomButton".into());
            }
            NodeKind::Table => {
                deps.insert("SmartTable".into());
            }
            NodeKind::List => {
                deps.insert("DynamicList".into());
            }
            NodeKind::Tabs => {
                deps.insert("SmartTabs".into());
            }
            NodeKind::Accordion => {
                deps.insert("SmartAccordion".into());
            }
            _ => {}
        }
        for child in &node.children {
            self.collect_dependencies(child, deps);
        }
    }

    fn serialize_literal(&self, value: &Value) -> String {
        dart_literal(value)
    }

    fn wrap_document(&self, root: &Node, body: &str, deps: &BTreeSet<String>) -> String {
        let imports = deps
            .iter()
            .map(|c| format!("import 'components/{}.dart';", camel_to_snake(c)))
            .collect::<Vec<_>>()
            .join("\n");
        let title = if root.name.is_empty() { "Generated Page" } else { &root.name };

        let main = format!(
            "import 'package:flutter/material.dart';\n\
             import 'theme/app_theme.dart';\n\
             {imports}\n\
             \n\
             void main() {{\n\
             \x20 runApp(const MyApp());\n\
             }}\n\
             \n\
             class MyApp extends StatelessWidget {{\n\
             \x20 const MyApp({{super.key}});\n\
             \n\
             \x20 @override\n\
             \x20 Widget build(BuildContext context) {{\n\
             \x20   return MaterialApp(\n\
             \x20     title: 'Generated App',\n\
             \x20     theme: AppTheme.lightTheme,\n\
             \x20     home: const GeneratedPage(),\n\
             \x20     debugShowCheckedModeBanner: false,\n\
             \x20   );\n\
             \x20 }}\n\
             }}\n\
             \n\
             class GeneratedPage extends StatelessWidget {{\n\
             \x20 const GeneratedPage({{super.key}});\n\
             \n\
             \x20 @override\n\
             \x20 Widget build(BuildContext context) {{\n\
             \x20   return Scaffold(\n\
             \x20     backgroundColor: AppTheme.background,\n\
             \x20     appBar: AppBar(\n\
             \x20       title: const Text({title_lit}),\n\
             \x20       centerTitle: true,\n\
             \x20     ),\n\
             \x20     body: SingleChildScrollView(\n\
             \x20       child: Padding(\n\
             \x20         padding: const EdgeInsets.all(16.0),\n\
             \x20         child: {body_trimmed},\n\
             \x20       ),\n\
             \x20     ),\n\
             \x20   );\n\
             \x20 }}\n\
             }}\n",
            title_lit = quote(title),
            body_trimmed = body.trim_start(),
        );

        let mut files: Vec<(&str, String)> = vec![
            ("lib/main.dart", main),
            ("lib/theme/app_theme.dart", APP_THEME.to_string()),
        ];
        for dep in deps {
            if let Some((path, content)) = component_file(dep) {
                files.push((path, content.to_string()));
            }
        }

        files
            .iter()
            .map(|(path, content)| {
                format!(
                    "// ==============================================================================\n\
                     // FILE: {path}\n\
                     // ==============================================================================\n\
                     {}\n\n",
                    content.trim()
                )
            })
            .collect()
    }
}

impl FlutterTarget {
    fn emit_kind(&self, node: &Node, indent: usize) -> String {
        let i = "  ".repeat(indent);
        let i2 = "  ".repeat(indent + 1);
        let content = node.content.as_deref().unwrap_or_default();

        match node.kind {
            NodeKind::Input | NodeKind::Textarea => {
                let max_lines = if node.kind == NodeKind::Textarea { 4 } else { 1 };
                format!(
                    "{i}CustomTextField(\n{i2}label: {q},\n{i2}hint: {q},\n{i2}maxLines: {max_lines},\n{i})",
                    q = quote(content)
                )
            }
            NodeKind::Button => {
                let label = if content.is_empty() { "Button" } else { content };
                let is_primary =
                    matches!(data_str(node, "variant"), None | Some("default"));
                format!(
                    "{i}CustomButton(\n\
                     {i2}label: {},\n\
                     {i2}onPressed: () {{ debugPrint({}); }},\n\
                     {i2}isPrimary: {is_primary},\n\
                     {i})",
                    quote(label),
                    quote(&format!("Clicked {label}"))
                )
            }
            NodeKind::Form => {
                let endpoint = data_str(node, "endpoint").unwrap_or_default();
                let fields = data_value(node, "fields")
                    .cloned()
                    .unwrap_or(Value::Array(Vec::new()));
                format!(
                    "{i}SmartForm(\n{i2}endpoint: {},\n{i2}fieldsData: {},\n{i})",
                    quote(endpoint),
                    dart_literal(&fields)
                )
            }
            NodeKind::List => {
                let items = data_value(node, "items")
                    .cloned()
                    .unwrap_or(Value::Array(Vec::new()));
                let pagination = data_bool(node, "pagination").unwrap_or(false);
                format!(
                    "{i}DynamicList(\n{i2}data: {},\n{i2}enablePagination: {pagination},\n{i})",
                    dart_literal(&items)
                )
            }
            NodeKind::Table => {
                let rows = data_value(node, "data")
                    .cloned()
                    .unwrap_or(Value::Array(Vec::new()));
                format!("{i}SmartTable(\n{i2}data: {},\n{i})", dart_literal(&rows))
            }
            NodeKind::Tabs => {
                let items = data_value(node, "items")
                    .cloned()
                    .unwrap_or(Value::Array(Vec::new()));
                format!("{i}SmartTabs(\n{i2}tabsData: {},\n{i})", dart_literal(&items))
            }
            NodeKind::Accordion => {
                let items = data_value(node, "items")
                    .cloned()
                    .unwrap_or(Value::Array(Vec::new()));
                let multiple = data_bool(node, "allowMultiple").unwrap_or(false);
                format!(
                    "{i}SmartAccordion(\n{i2}items: {},\n{i2}allowMultiple: {multiple},\n{i})",
                    dart_literal(&items)
                )
            }
            NodeKind::Dropdown | NodeKind::Select => {
                let label = data_str(node, "label")
                    .or(node.content.as_deref())
                    .unwrap_or("Select");
                format!(
                    "{i}DropdownButton<String>(\n\
                     {i2}isExpanded: true,\n\
                     {i2}hint: const Text({}),\n\
                     {i2}items: const [], onChanged: (v) {{}},\n\
                     {i})",
                    quote(label)
                )
            }
            NodeKind::Container | NodeKind::Card => self.emit_container(node, indent),
            NodeKind::Text => {
                let weight = if node.style.font_weight.as_deref() == Some("bold") {
                    "FontWeight.bold"
                } else {
                    "FontWeight.normal"
                };
                format!(
                    "{i}Text(\n\
                     {i2}{},\n\
                     {i2}style: TextStyle(\n\
                     {i2}  fontSize: {},\n\
                     {i2}  color: {},\n\
                     {i2}  fontWeight: {weight},\n\
                     {i2}),\n\
                     {i})",
                    quote(content),
                    parse_double(node.style.font_size.as_deref().or(Some("14"))),
                    parse_color(node.style.color.as_deref())
                )
            }
            NodeKind::Image => {
                let src = node.content.as_deref().unwrap_or("https://picsum.photos/200");
                format!(
                    "{i}ClipRRect(\n\
                     {i2}borderRadius: BorderRadius.circular({}),\n\
                     {i2}child: Image.network({}, fit: BoxFit.cover),\n\
                     {i})",
                    parse_double(node.style.border_radius.as_deref()),
                    quote(src)
                )
            }
            NodeKind::Checkbox | NodeKind::Switch => {
                let control = if node.kind == NodeKind::Checkbox { "Checkbox" } else { "Switch" };
                let checked = data_bool(node, "checked").unwrap_or(false);
                format!(
                    "{i}Row(\n\
                     {i2}mainAxisSize: MainAxisSize.min,\n\
                     {i2}children: [\n\
                     {i2}  {control}(value: {checked}, onChanged: (v) {{}}),\n\
                     {i2}  Text({}),\n\
                     {i2}],\n\
                     {i})",
                    quote(content)
                )
            }
            NodeKind::Icon => {
                let icon = icon_code(node.icon.as_deref().unwrap_or("Box"));
                format!(
                    "{i}Icon({icon}, color: {}, size: 24)",
                    parse_color(node.style.color.as_deref())
                )
            }
            NodeKind::Divider => format!("{i}const Divider(height: 1)"),
            NodeKind::AvatarGroup | NodeKind::Interaction | NodeKind::Unknown => {
                let label = node.kind.default_name();
                format!("{i}const SizedBox.shrink() /* {label}: no mobile mapping */")
            }
        }
    }

    fn emit_container(&self, node: &Node, indent: usize) -> String {
        let i = "  ".repeat(indent);
        let i2 = "  ".repeat(indent + 1);
        let style = &node.style;

        let width = match style.width.as_deref() {
            Some("100%") => "double.infinity".to_string(),
            Some("auto") | None => "null".to_string(),
            Some(v) => parse_double(Some(v)),
        };
        let padding = edge_insets(style);

        let child_code = if node.children.is_empty() {
            "const SizedBox.shrink()".to_string()
        } else {
            let main_axis = match style.justify_content {
                Some(JustifyContent::Center) => "MainAxisAlignment.center",
                Some(JustifyContent::SpaceBetween) => "MainAxisAlignment.spaceBetween",
                _ => "MainAxisAlignment.start",
            };
            let cross_axis = match style.align_items {
                Some(AlignItems::Center) => "CrossAxisAlignment.center",
                _ => "CrossAxisAlignment.start",
            };
            let layout = if style.flex_direction == Some(FlexDirection::Row) {
                "Row"
            } else {
                "Column"
            };
            let children = node
                .children
                .iter()
                .map(|c| self.emit_node(c, indent + 3))
                .collect::<Vec<_>>()
                .join(",\n");
            format!(
                "{layout}(\n\
                 {i2}  mainAxisAlignment: {main_axis},\n\
                 {i2}  crossAxisAlignment: {cross_axis},\n\
                 {i2}  children: [\n\
                 {children},\n\
                 {i2}  ],\n\
                 {i2})"
            )
        };

        let mut container = format!("Container(\n{i2}width: {width},\n{i2}padding: {padding},\n");
        if let Some(decoration) = box_decoration(style, indent + 1) {
            container.push_str(&decoration);
        }
        container.push_str(&format!("{i2}child: {child_code},\n{i})"));

        if node.kind == NodeKind::Card {
            let radius = parse_double(style.border_radius.as_deref().or(Some("8")));
            format!(
                "{i}Card(\n\
                 {i2}elevation: 2,\n\
                 {i2}shape: RoundedRectangleBorder(borderRadius: BorderRadius.circular({radius})),\n\
                 {i2}child: {container},\n\
                 {i})"
            )
        } else {
            format!("{i}{container}")
        }
    }
}

// ─── Dart literal and value helpers ──────────────────────────────────────

/// Render a data-bag value as Dart list/map literal syntax.
fn dart_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let inner = items.iter().map(dart_literal).collect::<Vec<_>>().join(", ");
            format!("[{inner}]")
        }
        Value::Object(map) => {
            let inner = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), dart_literal(v)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{inner}}}")
        }
    }
}

/// Double-quoted Dart string; `$` must be escaped or Dart interpolates.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// CSS length → Dart double literal. `"100%"` is the fill sentinel.
fn parse_double(val: Option<&str>) -> String {
    let Some(val) = val else {
        return "0.0".into();
    };
    if val == "100%" {
        return "double.infinity".into();
    }
    let numeric: String = val
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    match numeric.parse::<f64>() {
        Ok(n) => format!("{n:.1}"),
        Err(_) => "0.0".into(),
    }
}

fn parse_color(color: Option<&str>) -> String {
    match color {
        None | Some("transparent") => "Colors.transparent".into(),
        Some(c) if c.starts_with('#') => format!("Color(0xFF{})", c[1..].to_uppercase()),
        Some(c) => match c.to_ascii_lowercase().as_str() {
            "white" => "AppTheme.white".into(),
            "black" => "AppTheme.black".into(),
            "red" => "Colors.red".into(),
            "blue" => "AppTheme.primary".into(),
            _ => "Colors.black".into(),
        },
    }
}

fn edge_insets(style: &StyleSheet) -> String {
    if let Some(all) = &style.padding {
        return format!("const EdgeInsets.all({})", parse_double(Some(all)));
    }
    let (t, b, l, r) = (
        style.padding_top.as_deref(),
        style.padding_bottom.as_deref(),
        style.padding_left.as_deref(),
        style.padding_right.as_deref(),
    );
    if t.is_some() || b.is_some() || l.is_some() || r.is_some() {
        return format!(
            "const EdgeInsets.only(top: {}, bottom: {}, left: {}, right: {})",
            parse_double(t),
            parse_double(b),
            parse_double(l),
            parse_double(r)
        );
    }
    "EdgeInsets.zero".into()
}

fn box_decoration(style: &StyleSheet, indent: usize) -> Option<String> {
    let i = "  ".repeat(indent);
    let mut parts = Vec::new();
    if let Some(bg) = &style.background_color {
        if bg != "transparent" {
            parts.push(format!("color: {},", parse_color(Some(bg))));
        }
    }
    if style.border_radius.is_some() {
        parts.push(format!(
            "borderRadius: BorderRadius.circular({}),",
            parse_double(style.border_radius.as_deref())
        ));
    }
    if let (Some(w), Some(c)) = (&style.border_width, &style.border_color) {
        parts.push(format!(
            "border: Border.all(color: {}, width: {}),",
            parse_color(Some(c)),
            parse_double(Some(w))
        ));
    }
    if parts.is_empty() {
        return None;
    }
    let body = parts
        .iter()
        .map(|p| format!("{i}  {p}"))
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("{i}decoration: BoxDecoration(\n{body}\n{i}),\n"))
}

fn icon_code(name: &str) -> &'static str {
    match name {
        "Home" => "Icons.home",
        "User" => "Icons.person",
        "Settings" => "Icons.settings",
        "Bell" => "Icons.notifications",
        "Search" => "Icons.search",
        "Menu" => "Icons.menu",
        "Star" => "Icons.star",
        "Heart" => "Icons.favorite",
        "Share" => "Icons.share",
        "ArrowRight" => "Icons.arrow_forward",
        "Box" => "Icons.check_box_outline_blank",
        "Check" => "Icons.check",
        "X" => "Icons.close",
        "Trash2" => "Icons.delete",
        "Plus" => "Icons.add",
        "Edit" => "Icons.edit",
        "Eye" => "Icons.visibility",
        "Lock" => "Icons.lock",
        "LogOut" => "Icons.logout",
        "Layout" => "Icons.dashboard",
        "BarChart" => "Icons.bar_chart",
        "Users" => "Icons.people",
        _ => "Icons.help_outline",
    }
}

fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Support file for one smart component, keyed by widget name.
fn component_file(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "CustomTextField" => Some(("lib/components/custom_text_field.dart", CUSTOM_TEXT_FIELD)),
        "CustomButton" => Some(("lib/components/custom_button.dart", CUSTOM_BUTTON)),
        "SmartForm" => Some(("lib/components/smart_form.dart", SMART_FORM)),
        "SmartTable" => Some(("lib/components/smart_table.dart", SMART_TABLE)),
        "DynamicList" => Some(("lib/components/dynamic_list.dart", DYNAMIC_LIST)),
        "SmartTabs" => Some(("lib/components/smart_tabs.dart", SMART_TABS)),
        "SmartAccordion" => Some(("lib/components/smart_accordion.dart", SMART_ACCORDION)),
        _ => None,
    }
}

// ─── Emitted support files ───────────────────────────────────────────────

const APP_THEME: &str = r#"
import 'package:flutter/material.dart';

class AppTheme {
  static const Color primary = Color(0xFF0F172A);
  static const Color white = Colors.white;
  static const Color black = Colors.black;
  static const Color background = Color(0xFFF8FAFC);
  static const Color textPrimary = Color(0xFF1E293B);
  static const Color textSecondary = Color(0xFF64748B);

  static ThemeData get lightTheme {
    return ThemeData(
      primaryColor: primary,
      scaffoldBackgroundColor: background,
      appBarTheme: const AppBarTheme(
        backgroundColor: white,
        elevation: 0,
        iconTheme: IconThemeData(color: textPrimary),
        titleTextStyle: TextStyle(color: textPrimary, fontSize: 18, fontWeight: FontWeight.bold),
      ),
      colorScheme: ColorScheme.fromSeed(seedColor: primary),
      useMaterial3: true,
    );
  }
}
"#;

const CUSTOM_TEXT_FIELD: &str = r#"
import 'package:flutter/material.dart';
import '../theme/app_theme.dart';

class CustomTextField extends StatelessWidget {
  final String label;
  final String? hint;
  final TextEditingController? controller;
  final String? Function(String?)? validator;
  final bool obscureText;
  final int maxLines;

  const CustomTextField({
    super.key,
    required this.label,
    this.hint,
    this.controller,
    this.validator,
    this.obscureText = false,
    this.maxLines = 1,
  });

  @override
  Widget build(BuildContext context) {
    return Column(
      crossAxisAlignment: CrossAxisAlignment.start,
      children: [
        Text(
          label,
          style: const TextStyle(fontSize: 14, fontWeight: FontWeight.w500, color: AppTheme.textPrimary),
        ),
        const SizedBox(height: 6),
        TextFormField(
          controller: controller,
          validator: validator,
          obscureText: obscureText,
          maxLines: maxLines,
          decoration: InputDecoration(
            hintText: hint,
            hintStyle: const TextStyle(color: AppTheme.textSecondary),
            filled: true,
            fillColor: AppTheme.white,
            contentPadding: const EdgeInsets.symmetric(horizontal: 16, vertical: 12),
            border: OutlineInputBorder(borderRadius: BorderRadius.circular(8), borderSide: BorderSide(color: Colors.grey.shade300)),
            focusedBorder: OutlineInputBorder(borderRadius: BorderRadius.circular(8), borderSide: const BorderSide(color: AppTheme.primary, width: 1.5)),
          ),
        ),
        const SizedBox(height: 16),
      ],
    );
  }
}
"#;

const CUSTOM_BUTTON: &str = r#"
import 'package:flutter/material.dart';
import '../theme/app_theme.dart';

class CustomButton extends StatelessWidget {
  final String label;
  final VoidCallback onPressed;
  final bool isPrimary;
  final bool isLoading;

  const CustomButton({
    super.key,
    required this.label,
    required this.onPressed,
    this.isPrimary = true,
    this.isLoading = false,
  });

  @override
  Widget build(BuildContext context) {
    return SizedBox(
      width: double.infinity,
      height: 48,
      child: ElevatedButton(
        onPressed: isLoading ? null : onPressed,
        style: ElevatedButton.styleFrom(
          backgroundColor: isPrimary ? AppTheme.primary : AppTheme.white,
          foregroundColor: isPrimary ? AppTheme.white : AppTheme.textPrimary,
          elevation: isPrimary ? 2 : 0,
          shape: RoundedRectangleBorder(
            borderRadius: BorderRadius.circular(8),
            side: isPrimary ? BorderSide.none : BorderSide(color: Colors.grey.shade300),
          ),
        ),
        child: isLoading
            ? const SizedBox(width: 20, height: 20, child: CircularProgressIndicator(strokeWidth: 2, color: Colors.white))
            : Text(label, style: const TextStyle(fontWeight: FontWeight.bold)),
      ),
    );
  }
}
"#;

const SMART_FORM: &str = r#"
import 'package:flutter/material.dart';
import 'custom_text_field.dart';
import 'custom_button.dart';

class SmartForm extends StatefulWidget {
  final List<dynamic> fieldsData;
  final String endpoint;

  const SmartForm({super.key, required this.fieldsData, this.endpoint = ''});

  @override
  State<SmartForm> createState() => _SmartFormState();
}

class _SmartFormState extends State<SmartForm> {
  final _formKey = GlobalKey<FormState>();
  final Map<String, TextEditingController> _controllers = {};

  @override
  void initState() {
    super.initState();
    for (var field in widget.fieldsData) {
      _controllers[field['name']] = TextEditingController();
    }
  }

  @override
  void dispose() {
    for (var controller in _controllers.values) {
      controller.dispose();
    }
    super.dispose();
  }

  void _submit() {
    if (!_formKey.currentState!.validate()) return;
    debugPrint('Submitting to ${widget.endpoint}');
    ScaffoldMessenger.of(context).showSnackBar(const SnackBar(content: Text('Submitted')));
  }

  @override
  Widget build(BuildContext context) {
    return Form(
      key: _formKey,
      child: Column(
        crossAxisAlignment: CrossAxisAlignment.start,
        children: [
          ...widget.fieldsData.map((field) => CustomTextField(
                label: field['label'] ?? '',
                hint: field['placeholder'] ?? '',
                controller: _controllers[field['name']],
                obscureText: field['type'] == 'password',
                maxLines: field['type'] == 'textarea' ? 4 : 1,
                validator: (v) => (field['required'] ?? false) && (v == null || v.isEmpty) ? 'Required' : null,
              )),
          const SizedBox(height: 8),
          CustomButton(label: 'Submit', onPressed: _submit),
        ],
      ),
    );
  }
}
"#;

const SMART_TABLE: &str = r#"
import 'package:flutter/material.dart';
import '../theme/app_theme.dart';

class SmartTable extends StatelessWidget {
  final List<dynamic> data;

  const SmartTable({super.key, required this.data});

  @override
  Widget build(BuildContext context) {
    if (data.isEmpty) {
      return const Center(
        child: Padding(
          padding: EdgeInsets.all(20.0),
          child: Text('No data available', style: TextStyle(color: AppTheme.textSecondary)),
        ),
      );
    }

    final firstItem = data.first as Map<String, dynamic>;
    final columns = firstItem.keys
        .map((key) => DataColumn(
              label: Text(key.toUpperCase(), style: const TextStyle(fontWeight: FontWeight.bold, color: AppTheme.primary)),
            ))
        .toList();
    final rows = data.map((item) {
      final mapItem = item as Map<String, dynamic>;
      return DataRow(
        cells: firstItem.keys.map((key) => DataCell(Text(mapItem[key]?.toString() ?? '-'))).toList(),
      );
    }).toList();

    return Container(
      width: double.infinity,
      decoration: BoxDecoration(
        color: AppTheme.white,
        borderRadius: BorderRadius.circular(8),
        border: Border.all(color: Colors.grey.shade200),
      ),
      child: SingleChildScrollView(
        scrollDirection: Axis.horizontal,
        child: DataTable(columns: columns, rows: rows),
      ),
    );
  }
}
"#;

const DYNAMIC_LIST: &str = r#"
import 'package:flutter/material.dart';
import '../theme/app_theme.dart';

class DynamicList extends StatelessWidget {
  final List<dynamic> data;
  final bool enablePagination;

  const DynamicList({super.key, required this.data, this.enablePagination = false});

  @override
  Widget build(BuildContext context) {
    if (data.isEmpty) return const Center(child: Text('No items'));

    return ListView.separated(
      shrinkWrap: true,
      physics: const NeverScrollableScrollPhysics(),
      itemCount: data.length,
      separatorBuilder: (ctx, i) => const SizedBox(height: 8),
      itemBuilder: (context, index) {
        final item = data[index] as Map<String, dynamic>;
        final title = item['title'] ?? item['name'] ?? 'Item';
        final subtitle = item['description'] ?? item['subtitle'] ?? '';
        return Container(
          padding: const EdgeInsets.all(12),
          decoration: BoxDecoration(
            color: AppTheme.white,
            borderRadius: BorderRadius.circular(12),
            border: Border.all(color: Colors.grey.shade200),
          ),
          child: Row(
            children: [
              Expanded(
                child: Column(
                  crossAxisAlignment: CrossAxisAlignment.start,
                  children: [
                    Text(title, style: const TextStyle(fontWeight: FontWeight.w600, fontSize: 15, color: AppTheme.textPrimary)),
                    if (subtitle.isNotEmpty)
                      Padding(
                        padding: const EdgeInsets.only(top: 4),
                        child: Text(subtitle, style: const TextStyle(fontSize: 13, color: AppTheme.textSecondary)),
                      ),
                  ],
                ),
              ),
              const Icon(Icons.chevron_right, color: Colors.grey, size: 20),
            ],
          ),
        );
      },
    );
  }
}
"#;

const SMART_TABS: &str = r#"
import 'package:flutter/material.dart';
import '../theme/app_theme.dart';

class SmartTabs extends StatelessWidget {
  final List<dynamic> tabsData;

  const SmartTabs({super.key, required this.tabsData});

  @override
  Widget build(BuildContext context) {
    if (tabsData.isEmpty) {
      return const SizedBox(height: 100, child: Center(child: Text('No tabs configured')));
    }

    return DefaultTabController(
      length: tabsData.length,
      child: Column(
        mainAxisSize: MainAxisSize.min,
        children: [
          TabBar(
            isScrollable: tabsData.length > 3,
            tabs: tabsData.map((tab) => Tab(text: tab['label'] ?? tab['title'] ?? 'Tab')).toList(),
          ),
          const SizedBox(height: 16),
          SizedBox(
            height: 300,
            child: TabBarView(
              children: tabsData
                  .map((tab) => Center(
                        child: Text(
                          (tab['content'] ?? '').toString(),
                          style: const TextStyle(fontSize: 15, color: AppTheme.textSecondary),
                          textAlign: TextAlign.center,
                        ),
                      ))
                  .toList(),
            ),
          ),
        ],
      ),
    );
  }
}
"#;

const SMART_ACCORDION: &str = r#"
import 'package:flutter/material.dart';
import '../theme/app_theme.dart';

class SmartAccordion extends StatefulWidget {
  final List<dynamic> items;
  final bool allowMultiple;

  const SmartAccordion({super.key, required this.items, this.allowMultiple = false});

  @override
  State<SmartAccordion> createState() => _SmartAccordionState();
}

class _SmartAccordionState extends State<SmartAccordion> {
  late List<bool> _expanded;

  @override
  void initState() {
    super.initState();
    _expanded = List.generate(widget.items.length, (_) => false);
  }

  @override
  Widget build(BuildContext context) {
    if (widget.items.isEmpty) return const SizedBox.shrink();

    return ExpansionPanelList(
      elevation: 0,
      expansionCallback: (index, isExpanded) {
        setState(() {
          if (!widget.allowMultiple) {
            for (int i = 0; i < _expanded.length; i++) {
              if (i != index) _expanded[i] = false;
            }
          }
          _expanded[index] = !isExpanded;
        });
      },
      children: widget.items.asMap().entries.map<ExpansionPanel>((entry) {
        final item = entry.value;
        return ExpansionPanel(
          isExpanded: _expanded[entry.key],
          canTapOnHeader: true,
          headerBuilder: (context, isExpanded) => ListTile(
            title: Text(item['title'] ?? 'Item', style: const TextStyle(fontWeight: FontWeight.w600)),
          ),
          body: Container(
            width: double.infinity,
            padding: const EdgeInsets.fromLTRB(16, 0, 16, 16),
            child: Text((item['content'] ?? '').toString(), style: const TextStyle(color: AppTheme.textSecondary)),
          ),
        );
      }).toList(),
    );
  }
}
"#;
