//! Node factory: per-kind default style and data.
//!
//! Creating a node is the only place kind-specific defaults live. A table
//! arrives with three sample rows, a form with three default fields, a
//! tabs widget with three tab specs — so a freshly dropped widget renders
//! something meaningful before the user touches the properties panel.

use crate::id::NodeId;
use crate::model::{
    AlignItems, FlexDirection, JustifyContent, BorderStyle, LibraryVariant, Node, NodeKind,
    PositionMode, StyleSheet,
};
use serde_json::{Map, Value, json};

fn data_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Create a node of `kind` with a fresh ID and kind-appropriate defaults.
pub fn create_node(kind: NodeKind, parent: NodeId) -> Node {
    let mut node = Node {
        id: NodeId::fresh(),
        kind,
        name: kind.default_name().to_string(),
        library: LibraryVariant::Radix,
        style: StyleSheet {
            position: Some(PositionMode::Relative),
            flex_direction: Some(FlexDirection::Column),
            padding: Some("0px".into()),
            gap: Some("10px".into()),
            width: Some("auto".into()),
            height: Some("auto".into()),
            ..StyleSheet::default()
        },
        content: Some(String::new()),
        parent: Some(parent),
        ..Node::default()
    };

    match kind {
        NodeKind::Container => {
            node.style.merge(&StyleSheet {
                width: Some("100%".into()),
                min_height: Some("100px".into()),
                background_color: Some("#f8fafc".into()),
                padding: Some("16px".into()),
                border_width: Some("1px".into()),
                border_style: Some(BorderStyle::Dashed),
                border_color: Some("#cbd5e1".into()),
                ..StyleSheet::default()
            });
        }
        NodeKind::Card => {
            node.style.merge(&StyleSheet {
                width: Some("100%".into()),
                min_height: Some("150px".into()),
                background_color: Some("#ffffff".into()),
                padding: Some("20px".into()),
                border_radius: Some("8px".into()),
                box_shadow: Some(true),
                border_width: Some("1px".into()),
                border_color: Some("#e2e8f0".into()),
                ..StyleSheet::default()
            });
        }
        NodeKind::Text => {
            node.content = Some("Text Block".into());
        }
        NodeKind::Button => {
            node.content = Some("Button".into());
            node.style.merge(&StyleSheet {
                background_color: Some("#1e293b".into()),
                color: Some("#ffffff".into()),
                padding: Some("8px 16px".into()),
                border_radius: Some("6px".into()),
                ..StyleSheet::default()
            });
        }
        NodeKind::Image => {
            node.content = Some("https://picsum.photos/300/200".into());
            node.style.merge(&StyleSheet {
                width: Some("100%".into()),
                height: Some("200px".into()),
                border_radius: Some("8px".into()),
                ..StyleSheet::default()
            });
        }
        NodeKind::Input => {
            node.content = Some("Enter text...".into());
            node.style.merge(&input_chrome());
        }
        NodeKind::Textarea => {
            node.content = Some("Enter description...".into());
            node.style.merge(&StyleSheet {
                height: Some("80px".into()),
                ..input_chrome()
            });
        }
        NodeKind::Select => {
            node.content = Some("Select option".into());
            node.style.merge(&StyleSheet {
                background_color: Some("#ffffff".into()),
                ..input_chrome()
            });
        }
        NodeKind::Checkbox => {
            node.content = Some("Enable Option".into());
            node.style.merge(&toggle_row());
            node.data = data_map(json!({ "checked": true }));
        }
        NodeKind::Switch => {
            node.content = Some("Toggle Mode".into());
            node.style.merge(&toggle_row());
            node.data = data_map(json!({ "checked": true }));
        }
        NodeKind::Divider => {
            node.style.merge(&StyleSheet {
                width: Some("100%".into()),
                height: Some("1px".into()),
                background_color: Some("#e2e8f0".into()),
                margin: Some("10px 0".into()),
                ..StyleSheet::default()
            });
        }
        NodeKind::Icon => {
            node.icon = Some("Star".into());
            node.style.color = Some("#64748b".into());
        }
        NodeKind::Tabs => {
            node.style.width = Some("100%".into());
            node.data = data_map(json!({
                "items": [
                    { "id": "tab1", "label": "Account", "icon": "User",
                      "content": "Manage your account settings here." },
                    { "id": "tab2", "label": "Password", "icon": "Lock",
                      "content": "Change your password securely." },
                    { "id": "tab3", "label": "Notifications", "icon": "Bell",
                      "content": "Configure your notification preferences." }
                ],
                "activeTab": "tab1"
            }));
        }
        NodeKind::Accordion => {
            node.style.width = Some("100%".into());
            node.data = data_map(json!({
                "items": [
                    { "id": "item1", "title": "Is it accessible?", "icon": "Check",
                      "content": "Yes. It adheres to the WAI-ARIA design pattern." },
                    { "id": "item2", "title": "Is it styled?", "icon": "Palette",
                      "content": "Yes. It comes with default styles that match the other components." },
                    { "id": "item3", "title": "Is it animated?", "icon": "Sparkles",
                      "content": "Yes. It uses CSS transitions for smooth expansion." }
                ]
            }));
        }
        NodeKind::List => {
            node.style.width = Some("100%".into());
            node.data = data_map(json!({
                "items": [
                    { "id": "1", "title": "Inbox", "description": "12 Unread messages", "icon": "Box" },
                    { "id": "2", "title": "Sent", "description": "5 pending items", "icon": "ArrowRight" },
                    { "id": "3", "title": "Junk", "description": "Cleared", "icon": "Trash2" }
                ]
            }));
        }
        NodeKind::Dropdown => {
            node.data = data_map(json!({
                "label": "Options",
                "items": [
                    { "id": "1", "label": "Profile", "icon": "User" },
                    { "id": "2", "label": "Settings", "icon": "Settings" },
                    { "id": "3", "label": "Logout", "icon": "LogOut", "danger": true }
                ]
            }));
        }
        NodeKind::AvatarGroup => {
            node.style.flex_direction = Some(FlexDirection::Row);
            node.data = data_map(json!({
                "images": [
                    "https://i.pravatar.cc/150?u=a042581f4e29026024d",
                    "https://i.pravatar.cc/150?u=a04258a2462d826712d",
                    "https://i.pravatar.cc/150?u=a042581f4e29026704d",
                    "https://i.pravatar.cc/150?u=a04258114e29026302d"
                ],
                "max": 3
            }));
        }
        NodeKind::Table => {
            node.style.merge(&StyleSheet {
                width: Some("100%".into()),
                overflow: Some(crate::model::Overflow::Auto),
                ..StyleSheet::default()
            });
            node.data = data_map(json!({
                "data": [
                    { "id": 1, "name": "John Doe", "role": "Admin", "status": "Active" },
                    { "id": 2, "name": "Jane Smith", "role": "User", "status": "Active" },
                    { "id": 3, "name": "Bob Johnson", "role": "Guest", "status": "Inactive" }
                ],
                "actionLabel": "Edit"
            }));
        }
        NodeKind::Form => {
            node.style.width = Some("100%".into());
            node.data = data_map(json!({
                "submitLabel": "Submit Request",
                "fields": [
                    { "id": "f1", "name": "email", "label": "Email Address", "type": "email",
                      "placeholder": "john@example.com", "required": true },
                    { "id": "f2", "name": "subject", "label": "Subject", "type": "text",
                      "placeholder": "How can we help?", "required": true },
                    { "id": "f3", "name": "message", "label": "Message", "type": "textarea",
                      "placeholder": "Describe your issue...", "required": true }
                ]
            }));
        }
        NodeKind::Interaction => {
            node.data = data_map(json!({ "likes": 124, "dislikes": 12, "views": 5400 }));
        }
        NodeKind::Unknown => {}
    }

    node
}

fn input_chrome() -> StyleSheet {
    StyleSheet {
        width: Some("100%".into()),
        padding: Some("8px".into()),
        border_width: Some("1px".into()),
        border_radius: Some("6px".into()),
        border_color: Some("#cbd5e1".into()),
        ..StyleSheet::default()
    }
}

fn toggle_row() -> StyleSheet {
    StyleSheet {
        flex_direction: Some(FlexDirection::Row),
        align_items: Some(AlignItems::Center),
        gap: Some("8px".into()),
        ..StyleSheet::default()
    }
}

// ─── Composite presets ───────────────────────────────────────────────────

/// A pre-populated sidebar: logo, navigation list, user profile row.
pub fn sidebar_preset(parent: NodeId) -> Node {
    let mut base = create_node(NodeKind::Container, parent);
    base.name = "Sidebar Preset".into();
    base.style.merge(&StyleSheet {
        width: Some("250px".into()),
        height: Some("100%".into()),
        background_color: Some("#ffffff".into()),
        border_right: Some("1px".into()),
        border_color: Some("#e2e8f0".into()),
        padding: Some("20px".into()),
        align_items: Some(AlignItems::FlexStart),
        ..StyleSheet::default()
    });

    let mut logo = create_node(NodeKind::Text, base.id);
    logo.content = Some("Dashboard Pro".into());
    logo.style.merge(&StyleSheet {
        font_size: Some("20px".into()),
        font_weight: Some("bold".into()),
        margin_bottom: Some("20px".into()),
        color: Some("#1e293b".into()),
        ..StyleSheet::default()
    });

    let mut nav = create_node(NodeKind::List, base.id);
    nav.data = data_map(json!({
        "items": [
            { "id": "p1", "title": "Overview", "icon": "Layout" },
            { "id": "p2", "title": "Analytics", "icon": "BarChart" },
            { "id": "p3", "title": "Customers", "icon": "Users" },
            { "id": "p4", "title": "Settings", "icon": "Settings" }
        ]
    }));

    let mut profile = create_node(NodeKind::Container, base.id);
    profile.style.merge(&StyleSheet {
        margin_top: Some("auto".into()),
        min_height: Some("auto".into()),
        flex_direction: Some(FlexDirection::Row),
        align_items: Some(AlignItems::Center),
        gap: Some("10px".into()),
        padding: Some("10px".into()),
        background_color: Some("#f8fafc".into()),
        border_radius: Some("8px".into()),
        width: Some("100%".into()),
        ..StyleSheet::default()
    });
    let mut avatar = create_node(NodeKind::Image, profile.id);
    avatar.content = Some("https://i.pravatar.cc/150?u=a042581f4e29026024d".into());
    avatar.style.merge(&StyleSheet {
        width: Some("40px".into()),
        height: Some("40px".into()),
        border_radius: Some("20px".into()),
        ..StyleSheet::default()
    });
    let mut user = create_node(NodeKind::Text, profile.id);
    user.content = Some("John Admin".into());
    user.style.merge(&StyleSheet {
        font_size: Some("14px".into()),
        font_weight: Some("500".into()),
        ..StyleSheet::default()
    });
    profile.children = vec![avatar, user];

    base.children = vec![logo, nav, profile];
    base
}

/// A pre-populated top navigation bar: logo, links, call-to-action button.
pub fn navbar_preset(parent: NodeId) -> Node {
    let mut base = create_node(NodeKind::Container, parent);
    base.name = "Navbar Preset".into();
    base.style.merge(&StyleSheet {
        width: Some("100%".into()),
        height: Some("64px".into()),
        background_color: Some("#ffffff".into()),
        border_bottom: Some("1px".into()),
        border_color: Some("#e2e8f0".into()),
        flex_direction: Some(FlexDirection::Row),
        align_items: Some(AlignItems::Center),
        justify_content: Some(JustifyContent::SpaceBetween),
        padding: Some("0 24px".into()),
        ..StyleSheet::default()
    });

    let mut logo = create_node(NodeKind::Text, base.id);
    logo.content = Some("MyApp".into());
    logo.style.merge(&StyleSheet {
        font_size: Some("18px".into()),
        font_weight: Some("bold".into()),
        color: Some("#0f172a".into()),
        ..StyleSheet::default()
    });

    let mut links = create_node(NodeKind::Container, base.id);
    links.style.merge(&StyleSheet {
        flex_direction: Some(FlexDirection::Row),
        gap: Some("20px".into()),
        align_items: Some(AlignItems::Center),
        width: Some("auto".into()),
        min_height: Some("auto".into()),
        background_color: Some("transparent".into()),
        border_width: Some("0".into()),
        ..StyleSheet::default()
    });
    for label in ["Features", "Pricing", "About"] {
        let mut link = create_node(NodeKind::Text, links.id);
        link.content = Some(label.into());
        link.style.merge(&StyleSheet {
            font_size: Some("14px".into()),
            color: Some("#64748b".into()),
            cursor: Some("pointer".into()),
            ..StyleSheet::default()
        });
        links.children.push(link);
    }

    let mut cta = create_node(NodeKind::Button, base.id);
    cta.content = Some("Get Started".into());

    base.children = vec![logo, links, cta];
    base
}
