//! Parameters for the host's layouts and floating rules.
//!
//! The host supplies the layout algorithms; this module only picks which
//! ones are enabled and how their borders and margins look.

use crate::theme::{Color, Mocha};
use serde::Serialize;

/// Margins in pixels, `[top, right, bottom, left]`.
pub type Margin = [u32; 4];

/// Border and margin settings shared by every tiling layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutTheme {
    pub border_focus: Color,
    pub border_normal: Color,
    pub border_width: u32,
    pub margin: Margin,
    pub margin_on_single: Margin,
    pub border_on_single: bool,
}

impl Default for LayoutTheme {
    fn default() -> Self {
        Self {
            border_focus: Mocha::Teal.color(),
            border_normal: Mocha::Mantle.color(),
            border_width: 3,
            margin: [6, 6, 0, 0],
            margin_on_single: [6, 6, 0, 0],
            border_on_single: true,
        }
    }
}

/// Layout algorithms provided by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutKind {
    /// Windows stacked in resizable columns.
    Columns,
    /// One maximised window at a time.
    Max,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSpec {
    pub kind: LayoutKind,
    /// Name shown by the current-layout widget.  The host falls back to the
    /// lowercased kind when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub theme: LayoutTheme,
}

/// The enabled layouts, in the order `NextLayout` cycles through them.
pub fn layouts(theme: &LayoutTheme) -> Vec<LayoutSpec> {
    vec![
        LayoutSpec {
            kind: LayoutKind::Columns,
            name: Some("col".into()),
            theme: theme.clone(),
        },
        LayoutSpec {
            kind: LayoutKind::Max,
            name: None,
            theme: theme.clone(),
        },
    ]
}

/// Window match criteria, evaluated by the host.  A rule matches when every
/// set field matches.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Match {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Match {
    pub fn wm_class(class: impl Into<String>) -> Self {
        Self {
            wm_class: Some(class.into()),
            ..Default::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Rules for windows that always float.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatingLayout {
    /// Keep the host's built-in rules (dialogs, utilities, splash screens)
    /// ahead of `float_rules`.
    pub default_float_rules: bool,
    pub float_rules: Vec<Match>,
}

impl Default for FloatingLayout {
    fn default() -> Self {
        let classes = [
            "confirmreset",
            "makebranch",
            "maketag",
            "ssh-askpass",
        ];
        let titles = ["branchdialog", "pinentry"];
        let apps = [
            "xfce4-appfinder",
            "xfce4-notifyd",
            "blueman-manager",
            "Places",
            "pavucontrol",
        ];
        let float_rules = classes
            .iter()
            .map(|c| Match::wm_class(*c))
            .chain(titles.iter().map(|t| Match::title(*t)))
            .chain(apps.iter().map(|c| Match::wm_class(*c)))
            .collect();
        Self {
            default_float_rules: true,
            float_rules,
        }
    }
}

/// How the host reacts to a window asking for activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnActivation {
    /// Focus only when the window is on the current group.
    #[default]
    Smart,
    Focus,
    Urgent,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_layouts_share_the_theme() {
        let theme = LayoutTheme::default();
        let layouts = layouts(&theme);
        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0].kind, LayoutKind::Columns);
        assert_eq!(layouts[0].name.as_deref(), Some("col"));
        assert_eq!(layouts[1].kind, LayoutKind::Max);
        assert!(layouts.iter().all(|l| l.theme == theme));
    }

    #[test]
    fn layout_theme_is_flattened_on_export() {
        let layouts = layouts(&LayoutTheme::default());
        let json = serde_json::to_value(&layouts[0]).unwrap();
        assert_eq!(json["kind"], "Columns");
        assert_eq!(json["border_focus"], "#94e2d5");
        assert_eq!(json["border_width"], 3);
        assert_eq!(json["margin"], serde_json::json!([6, 6, 0, 0]));
        let json = serde_json::to_value(&layouts[1]).unwrap();
        assert!(json.get("name").is_none());
    }

    #[test]
    fn float_rules_list_windows_by_class_or_title() {
        let floating = FloatingLayout::default();
        assert!(floating.default_float_rules);
        assert_eq!(floating.float_rules.len(), 11);
        assert!(floating.float_rules.contains(&Match::wm_class("pavucontrol")));
        assert!(floating.float_rules.contains(&Match::title("pinentry")));
        assert!(!floating.float_rules.contains(&Match::wm_class("firefox")));

        let json = serde_json::to_value(&floating).unwrap();
        assert_eq!(json["float_rules"][0], serde_json::json!({ "wm_class": "confirmreset" }));
    }

    #[test]
    fn focus_on_activation_exports_lowercase() {
        let json = serde_json::to_string(&FocusOnActivation::default()).unwrap();
        assert_eq!(json, r#""smart""#);
    }
}
