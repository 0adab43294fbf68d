//! Groups (workspaces) and the private-group rule.
//!
//! One group is *private*: on a multi-monitor setup it belongs on the
//! second screen and must not be pulled onto the primary one.  The rule is
//! written out as a literal table over the two-screen case; it is not meant
//! to generalise to more screens.

use crate::bindings::{Key, Modifier};
use crate::command::Action;
use crate::traits::WindowManager;
use log::debug;
use serde::Serialize;

/// Names of the public groups, in key order (`mod+1` .. `mod+4`).
pub const PUBLIC_GROUP_NAMES: [&str; 4] = ["\u{f269}", "\u{f016c}", "\u{f1c0}", "\u{f07b}"];

/// Names of the private groups.  They follow the public ones in key order.
pub const PRIVATE_GROUP_NAMES: [&str; 1] = ["\u{f033e}"];

/// Index of the screen private groups live on.
pub const PRIVATE_SCREEN: usize = 1;

/// A workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: String,
    pub private: bool,
}

impl Group {
    pub fn new(name: impl Into<String>, private: bool) -> Self {
        Self {
            name: name.into(),
            private,
        }
    }
}

/// The group list: public groups first, then private ones.
pub fn groups() -> Vec<Group> {
    PUBLIC_GROUP_NAMES
        .iter()
        .map(|n| Group::new(*n, false))
        .chain(PRIVATE_GROUP_NAMES.iter().map(|n| Group::new(*n, true)))
        .collect()
}

/// Whether `name` is one of the private groups.
pub fn is_private_name(name: &str) -> bool {
    PRIVATE_GROUP_NAMES.contains(&name)
}

/// The slice of host state the private-group rule looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState {
    /// Number of attached screens.
    pub screen_count: usize,
    /// Index of the focused screen.
    pub current_screen: usize,
    /// Whether the group on the focused screen is private.
    pub current_group_private: bool,
    /// Whether the target group is currently shown on some screen.
    pub target_on_screen: bool,
}

impl ScreenState {
    /// Query `wm` for the state relevant to a move towards `target`.
    pub fn query<W: WindowManager>(wm: &W, target: &str) -> Self {
        Self {
            screen_count: wm.screen_count(),
            current_screen: wm.current_screen(),
            current_group_private: is_private_name(&wm.current_group()),
            target_on_screen: wm.group_screen(target).is_some(),
        }
    }
}

/// Whether switching to (or moving a window into) `target` must be
/// suppressed.
///
/// * A single screen never suppresses anything.
/// * Moving to a private group from any screen but the second one is
///   blocked.
/// * On the second screen, while showing a private group, moving to a group
///   that is already on a screen is blocked.
pub fn is_private_group(state: &ScreenState, target: &str) -> bool {
    if state.screen_count <= 1 {
        return false;
    }
    let on_private_screen = state.current_screen == PRIVATE_SCREEN;
    if is_private_name(target) && !on_private_screen {
        return true;
    }
    on_private_screen && state.current_group_private && state.target_on_screen
}

/// Show `group` on the current screen unless the private-group rule
/// suppresses it.  Returns whether the switch happened.
pub fn move_to_group<W: WindowManager>(wm: &W, group: &str) -> Result<bool, W::Error> {
    let state = ScreenState::query(wm, group);
    if is_private_group(&state, group) {
        debug!("switch to {} suppressed ({:?})", group, state);
        return Ok(false);
    }
    wm.group_to_screen(group)?;
    Ok(true)
}

/// Move the focused window to `group`.  The screen follows the window
/// unless the private-group rule suppresses the switch.  Returns whether
/// the screen followed.
pub fn move_window_to_group<W: WindowManager>(wm: &W, group: &str) -> Result<bool, W::Error> {
    let state = ScreenState::query(wm, group);
    let switch_group = !is_private_group(&state, group);
    if !switch_group {
        debug!("moving window to {} without following ({:?})", group, state);
    }
    wm.move_window_to_group(group, switch_group)?;
    Ok(switch_group)
}

/// Two keys per group: `mod+N` switches to it and `mod+shift+N` moves the
/// focused window there.  `N` is the 1-based position in `groups`.
pub fn group_keys(m: Modifier, groups: &[Group]) -> Vec<Key> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(i, g)| {
            let key = (i + 1).to_string();
            [
                Key::new(&[m], key.clone(), Action::SwitchToGroup(g.name.clone()))
                    .desc(format!("Switch to group {}", g.name)),
                Key::new(
                    &[m, Modifier::Shift],
                    key,
                    Action::MoveWindowToGroup(g.name.clone()),
                )
                .desc(format!("Switch to & move focused window to group {}", g.name)),
            ]
        })
        .collect()
}
