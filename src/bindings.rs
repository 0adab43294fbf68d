//! Key and mouse binding tables.
//!
//! A binding pairs a chord (modifier set + key symbol or mouse button) with
//! an [`Action`].  The host's input dispatcher matches incoming events
//! against these tables; nothing here reacts to input on its own.

use crate::command::{Action, Direction, LayoutCommand, WindowCommand};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A keyboard modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Shift,
    Lock,
    Control,
    Mod1,
    Mod2,
    Mod3,
    Mod4,
    Mod5,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::Shift => "shift",
            Modifier::Lock => "lock",
            Modifier::Control => "control",
            Modifier::Mod1 => "mod1",
            Modifier::Mod2 => "mod2",
            Modifier::Mod3 => "mod3",
            Modifier::Mod4 => "mod4",
            Modifier::Mod5 => "mod5",
        };
        f.write_str(s)
    }
}

/// Parse a modifier name (case-insensitive; accepts the common aliases
/// "ctrl", "alt" and "super").
pub fn parse_modifier(s: &str) -> Option<Modifier> {
    match s.trim().to_lowercase().as_str() {
        "shift" => Some(Modifier::Shift),
        "lock" => Some(Modifier::Lock),
        "control" | "ctrl" => Some(Modifier::Control),
        "mod1" | "alt" => Some(Modifier::Mod1),
        "mod2" => Some(Modifier::Mod2),
        "mod3" => Some(Modifier::Mod3),
        "mod4" | "super" => Some(Modifier::Mod4),
        "mod5" => Some(Modifier::Mod5),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Modifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_modifier(&s).ok_or_else(|| DeError::custom(format!("invalid modifier: {:?}", s)))
    }
}

/// Ordered, duplicate-free set of modifiers.
pub type Modifiers = BTreeSet<Modifier>;

fn modifiers(mods: &[Modifier]) -> Modifiers {
    mods.iter().copied().collect()
}

/// A keybinding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    pub modifiers: Modifiers,
    /// X keysym name, e.g. `"Return"` or `"h"`.
    pub key: String,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl Key {
    pub fn new(mods: &[Modifier], key: impl Into<String>, action: Action) -> Self {
        Self {
            modifiers: modifiers(mods),
            key: key.into(),
            action,
            desc: None,
        }
    }

    /// Attach a human-readable description.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// The `(modifiers, key)` pair the host matches on.
    pub fn chord(&self) -> (&Modifiers, &str) {
        (&self.modifiers, &self.key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{}+", m)?;
        }
        write!(f, "{}", self.key)
    }
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Button {
    Button1,
    Button2,
    Button3,
    Button4,
    Button5,
}

/// A mouse binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MouseBinding {
    /// Pointer drag.  `start` is queried once when the drag begins and
    /// provides the state `action` is applied relative to.
    Drag {
        modifiers: Modifiers,
        button: Button,
        action: Action,
        #[serde(skip_serializing_if = "Option::is_none")]
        start: Option<Action>,
    },
    /// Single click.
    Click {
        modifiers: Modifiers,
        button: Button,
        action: Action,
    },
}

impl MouseBinding {
    pub fn drag(mods: &[Modifier], button: Button, action: Action, start: Option<Action>) -> Self {
        MouseBinding::Drag {
            modifiers: modifiers(mods),
            button,
            action,
            start,
        }
    }

    pub fn click(mods: &[Modifier], button: Button, action: Action) -> Self {
        MouseBinding::Click {
            modifiers: modifiers(mods),
            button,
            action,
        }
    }

    pub fn button(&self) -> Button {
        match self {
            MouseBinding::Drag { button, .. } | MouseBinding::Click { button, .. } => *button,
        }
    }

    pub fn action(&self) -> &Action {
        match self {
            MouseBinding::Drag { action, .. } | MouseBinding::Click { action, .. } => action,
        }
    }
}

//  Default tables

/// Screenshot tool.
pub const SCREENSHOT: &str = "flatpak run org.flameshot.Flameshot gui";
/// Application launcher.
pub const LAUNCHER: &str = "xfce4-appfinder";
pub const BROWSER: &str = "flatpak run org.mozilla.firefox";
pub const FILE_MANAGER: &str = "thunar";
/// Display arrangement tool.
pub const DISPLAY_SETTINGS: &str = "arandr";
pub const EDITOR: &str = "code";
/// Audio mixer opened from the volume widget.
pub const MIXER: &str = "pavucontrol";

/// The static key table, without the generated group keys.
pub fn keys(m: Modifier, terminal: &str) -> Vec<Key> {
    use Modifier::{Control, Shift};

    let mut keys = vec![
        Key::new(&[m], "Print", Action::spawn(SCREENSHOT)),
        Key::new(&[m], "space", Action::NextKeyboardLayout),
        Key::new(&[m], "r", Action::spawn(LAUNCHER)),
        Key::new(&[m], "e", Action::spawn(BROWSER)),
        Key::new(&[m], "f", Action::spawn(FILE_MANAGER)),
        Key::new(&[m], "p", Action::spawn(DISPLAY_SETTINGS)),
        Key::new(&[m], "c", Action::spawn(EDITOR)),
    ];

    for dir in Direction::ALL {
        let desc = match dir {
            Direction::Left => "Move focus to left",
            Direction::Right => "Move focus to right",
            Direction::Down => "Move focus down",
            Direction::Up => "Move focus up",
        };
        keys.push(
            Key::new(&[m], dir.vi_key(), Action::Layout(LayoutCommand::Focus(dir))).desc(desc),
        );
    }
    for dir in Direction::ALL {
        let desc = match dir {
            Direction::Left => "Move window to the left",
            Direction::Right => "Move window to the right",
            Direction::Down => "Move window down",
            Direction::Up => "Move window up",
        };
        keys.push(
            Key::new(&[m, Shift], dir.vi_key(), Action::Layout(LayoutCommand::Shuffle(dir)))
                .desc(desc),
        );
    }
    for dir in Direction::ALL {
        let desc = match dir {
            Direction::Left => "Grow window to the left",
            Direction::Right => "Grow window to the right",
            Direction::Down => "Grow window down",
            Direction::Up => "Grow window up",
        };
        keys.push(
            Key::new(&[m, Control], dir.vi_key(), Action::Layout(LayoutCommand::Grow(dir)))
                .desc(desc),
        );
    }

    keys.extend([
        Key::new(&[m], "n", Action::Layout(LayoutCommand::Normalize))
            .desc("Reset all window sizes"),
        Key::new(&[m], "Return", Action::spawn(terminal)).desc("Launch terminal"),
        Key::new(&[m], "Tab", Action::NextLayout).desc("Toggle between layouts"),
        Key::new(&[m], "w", Action::Window(WindowCommand::Kill)).desc("Kill focused window"),
        Key::new(&[m], "t", Action::Window(WindowCommand::ToggleFloating))
            .desc("Toggle floating on the focused window"),
        Key::new(&[m, Control], "r", Action::ReloadConfig).desc("Reload the config"),
    ]);
    keys
}

/// The mouse table: drag to move or resize floating windows, middle click
/// to raise.
pub fn mouse(m: Modifier) -> Vec<MouseBinding> {
    vec![
        MouseBinding::drag(
            &[m],
            Button::Button1,
            Action::Window(WindowCommand::SetPositionFloating),
            Some(Action::Window(WindowCommand::GetPosition)),
        ),
        MouseBinding::drag(
            &[m],
            Button::Button3,
            Action::Window(WindowCommand::SetSizeFloating),
            Some(Action::Window(WindowCommand::GetSize)),
        ),
        MouseBinding::click(&[m], Button::Button2, Action::Window(WindowCommand::BringToFront)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn modifier_aliases() {
        assert_eq!(parse_modifier("mod4"), Some(Modifier::Mod4));
        assert_eq!(parse_modifier("Super"), Some(Modifier::Mod4));
        assert_eq!(parse_modifier("ctrl"), Some(Modifier::Control));
        assert_eq!(parse_modifier("ALT"), Some(Modifier::Mod1));
        assert_eq!(parse_modifier("hyper"), None);
    }

    #[test]
    fn modifier_set_is_normalised() {
        let k = Key::new(
            &[Modifier::Shift, Modifier::Mod4, Modifier::Shift],
            "h",
            Action::NextLayout,
        );
        let mods: Vec<Modifier> = k.modifiers.iter().copied().collect();
        assert_eq!(mods, vec![Modifier::Shift, Modifier::Mod4]);
        assert_eq!(k.to_string(), "shift+mod4+h");
    }

    #[test]
    fn static_keys_have_unique_chords() {
        let keys = keys(Modifier::Mod4, "kitty");
        assert_eq!(keys.len(), 25);
        let chords: HashSet<_> = keys.iter().map(|k| k.chord()).collect();
        assert_eq!(chords.len(), keys.len());
    }

    #[test]
    fn terminal_key_uses_configured_terminal() {
        let keys = keys(Modifier::Mod1, "alacritty");
        let ret = keys.iter().find(|k| k.key == "Return").unwrap();
        assert_eq!(ret.action, Action::spawn("alacritty"));
        assert!(ret.modifiers.contains(&Modifier::Mod1));
        assert_eq!(ret.desc.as_deref(), Some("Launch terminal"));
    }

    #[test]
    fn reload_needs_control() {
        let keys = keys(Modifier::Mod4, "kitty");
        let reload = keys.iter().find(|k| k.action == Action::ReloadConfig).unwrap();
        assert_eq!(reload.key, "r");
        assert!(reload.modifiers.contains(&Modifier::Control));
    }

    #[test]
    fn mouse_drags_carry_start_getters() {
        let mouse = mouse(Modifier::Mod4);
        assert_eq!(mouse.len(), 3);
        match &mouse[0] {
            MouseBinding::Drag { button, start, .. } => {
                assert_eq!(*button, Button::Button1);
                assert_eq!(*start, Some(Action::Window(WindowCommand::GetPosition)));
            }
            other => panic!("expected drag, got {:?}", other),
        }
        assert_eq!(mouse[2].button(), Button::Button2);
        assert_eq!(mouse[2].action(), &Action::Window(WindowCommand::BringToFront));
    }

    #[test]
    fn key_serializes_without_empty_desc() {
        let k = Key::new(&[Modifier::Mod4], "c", Action::spawn("code"));
        let json = serde_json::to_value(&k).unwrap();
        assert_eq!(json["modifiers"], serde_json::json!(["mod4"]));
        assert!(json.get("desc").is_none());
    }
}
