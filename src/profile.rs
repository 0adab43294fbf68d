//! The complete set of tables handed to the host.
//!
//! [`Profile::build`] assembles every table from a [`Config`] and checks
//! the invariants the host relies on.  The serialized field names are the
//! names the host looks the tables up by.

use crate::bar::{self, Style, Wallpaper};
use crate::bindings::{self, Key, MouseBinding};
use crate::config::{expand_home, Config, ConfigError};
use crate::groups::{self, Group};
use crate::layout::{self, FloatingLayout, FocusOnActivation, LayoutSpec, LayoutTheme};
use crate::theme::Theme;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// Every table and flag the host reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub keys: Vec<Key>,
    pub mouse: Vec<MouseBinding>,
    pub groups: Vec<Group>,
    pub layouts: Vec<LayoutSpec>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: Style,
    pub extension_defaults: Style,
    pub screens: Vec<bar::Screen>,
    pub colors: Theme,

    /// Window-to-group assignment rules; none are used.
    pub dgroups_app_rules: Vec<String>,
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub floats_kept_above: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub auto_minimize: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Name reported to Java applications, which misbehave under unknown
    /// non-reparenting window managers.
    pub wmname: String,
}

impl Profile {
    /// Assemble all tables from `config` and validate them.
    pub fn build(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let groups = groups::groups();
        let mut keys = bindings::keys(config.modifier, &config.terminal);
        keys.extend(groups::group_keys(config.modifier, &groups));

        let wallpaper = config.wallpaper.as_ref().map(|w| Wallpaper {
            path: expand_home(&w.path),
            mode: w.mode,
        });
        let widgets = bar::widgets(config.using_spacer, &config.keyboards);
        let widget_defaults = Style::widget_defaults();

        let profile = Self {
            keys,
            mouse: bindings::mouse(config.modifier),
            groups,
            layouts: layout::layouts(&LayoutTheme::default()),
            floating_layout: FloatingLayout::default(),
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            screens: bar::screens(wallpaper, bar::top_bar(widgets)),
            colors: Theme::mocha(),
            dgroups_app_rules: Vec::new(),
            follow_mouse_focus: true,
            bring_front_click: false,
            floats_kept_above: true,
            cursor_warp: false,
            auto_fullscreen: true,
            auto_minimize: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            wmname: "LG3D".into(),
        };
        profile.validate()?;
        debug!(
            "built profile: {} keys, {} mouse bindings, {} groups",
            profile.keys.len(),
            profile.mouse.len(),
            profile.groups.len()
        );
        Ok(profile)
    }

    /// Check the invariants the host relies on:
    ///
    /// * group names are unique;
    /// * every private group is in the group list;
    /// * no two keys share a chord;
    /// * every group action names a known group.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for g in &self.groups {
            if !names.insert(g.name.as_str()) {
                return Err(ConfigError(format!("duplicate group name {:?}", g.name)));
            }
        }

        for private in groups::PRIVATE_GROUP_NAMES {
            if !self.groups.iter().any(|g| g.name == private && g.private) {
                return Err(ConfigError(format!(
                    "private group {:?} missing from group list",
                    private
                )));
            }
        }

        let mut chords = HashSet::new();
        for k in &self.keys {
            if !chords.insert(k.chord()) {
                return Err(ConfigError(format!("key {} is bound twice", k)));
            }
            if let Some(target) = k.action.target_group() {
                if !names.contains(target) {
                    return Err(ConfigError(format!(
                        "key {} targets unknown group {:?}",
                        k, target
                    )));
                }
            }
        }
        Ok(())
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::Edge;
    use crate::bindings::Modifier;
    use crate::command::Action;

    #[test]
    fn default_profile_is_valid() {
        let p = Profile::build(&Config::default()).unwrap();
        assert_eq!(p.keys.len(), 25 + 10);
        assert_eq!(p.mouse.len(), 3);
        assert_eq!(p.groups.len(), 5);
        assert_eq!(p.layouts.len(), 2);
        assert_eq!(p.screens.len(), 2);
        assert_eq!(p.widget_defaults, p.extension_defaults);
    }

    #[test]
    fn scalar_flags() {
        let p = Profile::build(&Config::default()).unwrap();
        assert!(p.follow_mouse_focus);
        assert!(!p.bring_front_click);
        assert!(p.floats_kept_above);
        assert!(!p.cursor_warp);
        assert!(p.auto_fullscreen);
        assert!(p.auto_minimize);
        assert_eq!(p.focus_on_window_activation, FocusOnActivation::Smart);
        assert!(p.reconfigure_screens);
        assert_eq!(p.wmname, "LG3D");
        assert!(p.dgroups_app_rules.is_empty());
    }

    #[test]
    fn modifier_applies_to_every_binding() {
        let config = Config {
            modifier: Modifier::Mod1,
            ..Default::default()
        };
        let p = Profile::build(&config).unwrap();
        assert!(p.keys.iter().all(|k| k.modifiers.contains(&Modifier::Mod1)));
        assert!(p.keys.iter().all(|k| !k.modifiers.contains(&Modifier::Mod4)));
    }

    #[test]
    fn wallpaper_is_shared_and_optional() {
        let p = Profile::build(&Config::default()).unwrap();
        assert!(p.screens.iter().all(|s| s.wallpaper.is_some()));
        assert_eq!(p.screens[0].wallpaper, p.screens[1].wallpaper);

        let config = Config {
            wallpaper: None,
            ..Default::default()
        };
        let p = Profile::build(&config).unwrap();
        assert!(p.screens.iter().all(|s| s.wallpaper.is_none()));
    }

    #[test]
    fn duplicate_chord_is_rejected() {
        let mut p = Profile::build(&Config::default()).unwrap();
        let dup = p.keys[0].clone();
        p.keys.push(dup);
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("bound twice"));
    }

    #[test]
    fn duplicate_group_is_rejected() {
        let mut p = Profile::build(&Config::default()).unwrap();
        let dup = p.groups[0].clone();
        p.groups.push(dup);
        assert!(p.validate().unwrap_err().to_string().contains("duplicate group"));
    }

    #[test]
    fn missing_private_group_is_rejected() {
        let mut p = Profile::build(&Config::default()).unwrap();
        p.groups.retain(|g| !g.private);
        p.keys.retain(|k| k.action.target_group().is_none());
        assert!(p.validate().unwrap_err().to_string().contains("private group"));
    }

    #[test]
    fn key_to_unknown_group_is_rejected() {
        let mut p = Profile::build(&Config::default()).unwrap();
        p.keys.push(Key::new(
            &[Modifier::Mod4],
            "0",
            Action::SwitchToGroup("nowhere".into()),
        ));
        assert!(p.validate().unwrap_err().to_string().contains("unknown group"));
    }

    #[test]
    fn invalid_config_fails_build() {
        let config = Config {
            terminal: String::new(),
            ..Default::default()
        };
        assert!(Profile::build(&config).is_err());
    }

    #[test]
    fn export_uses_host_names() {
        let p = Profile::build(&Config::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&p.to_json().unwrap()).unwrap();
        for name in [
            "keys",
            "mouse",
            "groups",
            "layouts",
            "floating_layout",
            "screens",
            "widget_defaults",
            "extension_defaults",
            "follow_mouse_focus",
            "focus_on_window_activation",
            "wmname",
        ] {
            assert!(json.get(name).is_some(), "missing {}", name);
        }
        assert_eq!(json["focus_on_window_activation"], "smart");
        assert_eq!(json["colors"]["Teal"], "#94e2d5");
        assert_eq!(json["screens"][0]["top"]["Bar"]["size"], 27);
        assert_eq!(json["screens"][1]["left"]["Gap"], 6);
    }

    #[test]
    fn primary_bar_matches_spacer_setting() {
        let config = Config {
            using_spacer: false,
            ..Default::default()
        };
        let p = Profile::build(&config).unwrap();
        match &p.screens[0].top {
            Some(Edge::Bar(b)) => assert!(b
                .widgets
                .iter()
                .all(|w| w.kind != crate::bar::WidgetKind::Spacer)),
            other => panic!("expected a bar, got {:?}", other),
        }
    }
}
