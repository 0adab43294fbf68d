//! Resolves [`Action`]s against the host.
//!
//! [`Dispatcher`] owns a [`WindowManager`] and turns each action found in a
//! binding table into the matching host call.  Group actions go through the
//! private-group rule in [`groups`](crate::groups).  Spawns are launched
//! directly by this process through [`spawn`](crate::spawn).

use crate::command::Action;
use crate::groups;
use crate::spawn::{self, SpawnError};
use crate::traits::WindowManager;
use log::{debug, info};

/// Possible errors from the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),
    /// A spawned command could not be launched.
    #[error("spawn error: {0}")]
    Spawn(#[from] SpawnError),
}

/// Outcome of a dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// The host was called as requested.
    Done,
    /// A group switch was suppressed by the private-group rule.  For
    /// [`Action::MoveWindowToGroup`] the window still moved, but the screen
    /// did not follow it.
    Suppressed,
}

/// Dispatches binding actions to a [`WindowManager`].
///
/// # Typical usage
///
/// ```ignore
/// let mut dispatcher = Dispatcher::new(host);
/// dispatcher.handle(&Action::SwitchToGroup("web".into()))?;
/// ```
pub struct Dispatcher<W: WindowManager> {
    wm: W,
}

impl<W: WindowManager> Dispatcher<W> {
    pub fn new(wm: W) -> Self {
        Self { wm }
    }

    /// Return a shared reference to the underlying window manager.
    pub fn wm(&self) -> &W {
        &self.wm
    }

    /// Process a single [`Action`].
    pub fn handle(&mut self, action: &Action) -> Result<Dispatched, DispatchError> {
        let wm_err = |e: W::Error| DispatchError::WindowManager(e.to_string());

        match action {
            Action::Spawn(cmd) => {
                let child = spawn::spawn(cmd)?;
                info!("spawn {} (pid {})", cmd, child.pid);
            }

            Action::Layout(cmd) => {
                debug!("layout {}", cmd);
                self.wm.layout_command(*cmd).map_err(wm_err)?;
            }

            Action::Window(cmd) => {
                debug!("window {:?}", cmd);
                self.wm.window_command(*cmd).map_err(wm_err)?;
            }

            Action::NextLayout => {
                debug!("next layout");
                self.wm.next_layout().map_err(wm_err)?;
            }

            Action::ReloadConfig => {
                info!("reload config");
                self.wm.reload_config().map_err(wm_err)?;
            }

            Action::NextKeyboardLayout => {
                debug!("next keyboard layout");
                self.wm.next_keyboard_layout().map_err(wm_err)?;
            }

            Action::SwitchToGroup(name) => {
                info!("switch to group {}", name);
                if !groups::move_to_group(&self.wm, name).map_err(wm_err)? {
                    return Ok(Dispatched::Suppressed);
                }
            }

            Action::MoveWindowToGroup(name) => {
                info!("move window to group {}", name);
                if !groups::move_window_to_group(&self.wm, name).map_err(wm_err)? {
                    return Ok(Dispatched::Suppressed);
                }
            }
        }
        Ok(Dispatched::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Direction, LayoutCommand, WindowCommand};
    use crate::groups::{PRIVATE_GROUP_NAMES, PUBLIC_GROUP_NAMES};
    use std::cell::RefCell;

    /// A host double that records every call made to it.
    #[derive(Debug, Default)]
    struct RecorderWm {
        screens: usize,
        current_screen: usize,
        current_group: String,
        visible: Vec<String>,
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("recorder error")]
    struct RecorderErr;

    impl RecorderWm {
        fn two_screens(current_screen: usize, current_group: &str) -> Self {
            Self {
                screens: 2,
                current_screen,
                current_group: current_group.into(),
                visible: vec![current_group.into()],
                ..Default::default()
            }
        }

        fn record(&self, call: String) -> Result<(), RecorderErr> {
            if self.fail {
                return Err(RecorderErr);
            }
            self.calls.borrow_mut().push(call);
            Ok(())
        }
    }

    impl WindowManager for RecorderWm {
        type Error = RecorderErr;

        fn screen_count(&self) -> usize {
            self.screens
        }
        fn current_screen(&self) -> usize {
            self.current_screen
        }
        fn current_group(&self) -> String {
            self.current_group.clone()
        }
        fn group_screen(&self, group: &str) -> Option<usize> {
            self.visible.iter().position(|g| g == group)
        }
        fn layout_command(&self, command: LayoutCommand) -> Result<(), RecorderErr> {
            self.record(format!("layout {}", command))
        }
        fn window_command(&self, command: WindowCommand) -> Result<(), RecorderErr> {
            self.record(format!("window {:?}", command))
        }
        fn next_layout(&self) -> Result<(), RecorderErr> {
            self.record("next_layout".into())
        }
        fn reload_config(&self) -> Result<(), RecorderErr> {
            self.record("reload".into())
        }
        fn next_keyboard_layout(&self) -> Result<(), RecorderErr> {
            self.record("next_keyboard".into())
        }
        fn group_to_screen(&self, group: &str) -> Result<(), RecorderErr> {
            self.record(format!("toscreen {}", group))
        }
        fn move_window_to_group(&self, group: &str, switch_group: bool) -> Result<(), RecorderErr> {
            self.record(format!("togroup {} {}", group, switch_group))
        }
    }

    fn calls(d: &Dispatcher<RecorderWm>) -> Vec<String> {
        d.wm().calls.borrow().clone()
    }

    #[test]
    fn simple_actions_reach_the_host() {
        let mut d = Dispatcher::new(RecorderWm::default());
        d.handle(&Action::Layout(LayoutCommand::Grow(Direction::Left))).unwrap();
        d.handle(&Action::Window(WindowCommand::Kill)).unwrap();
        d.handle(&Action::NextLayout).unwrap();
        d.handle(&Action::ReloadConfig).unwrap();
        d.handle(&Action::NextKeyboardLayout).unwrap();
        assert_eq!(
            calls(&d),
            vec![
                "layout grow left",
                "window Kill",
                "next_layout",
                "reload",
                "next_keyboard",
            ]
        );
    }

    #[test]
    fn spawn_launches_without_the_host() {
        let mut d = Dispatcher::new(RecorderWm::default());
        let out = d.handle(&Action::spawn("sh -c 'exit 0'")).unwrap();
        assert_eq!(out, Dispatched::Done);
        assert!(calls(&d).is_empty());
    }

    #[test]
    fn spawn_failures_are_reported() {
        let mut d = Dispatcher::new(RecorderWm::default());
        let err = d
            .handle(&Action::spawn("tilerc-definitely-not-a-real-program"))
            .unwrap_err();
        assert!(matches!(err, DispatchError::Spawn(SpawnError::Launch { .. })));
        assert!(err.to_string().starts_with("spawn error: failed to launch"));

        let err = d.handle(&Action::spawn("echo 'oops")).unwrap_err();
        assert!(matches!(err, DispatchError::Spawn(SpawnError::UnbalancedQuote(_))));
    }

    #[test]
    fn switch_to_private_group_from_primary_is_suppressed() {
        let mut d = Dispatcher::new(RecorderWm::two_screens(0, PUBLIC_GROUP_NAMES[0]));
        let out = d.handle(&Action::SwitchToGroup(PRIVATE_GROUP_NAMES[0].into())).unwrap();
        assert_eq!(out, Dispatched::Suppressed);
        assert!(calls(&d).is_empty());
    }

    #[test]
    fn switch_to_public_group_is_done() {
        let mut d = Dispatcher::new(RecorderWm::two_screens(0, PUBLIC_GROUP_NAMES[0]));
        let target = PUBLIC_GROUP_NAMES[1];
        let out = d.handle(&Action::SwitchToGroup(target.into())).unwrap();
        assert_eq!(out, Dispatched::Done);
        assert_eq!(calls(&d), vec![format!("toscreen {}", target)]);
    }

    #[test]
    fn move_window_from_private_screen_to_visible_group_does_not_follow() {
        let mut wm = RecorderWm::two_screens(1, PRIVATE_GROUP_NAMES[0]);
        let target = PUBLIC_GROUP_NAMES[0];
        wm.visible.insert(0, target.into());
        let mut d = Dispatcher::new(wm);
        let out = d.handle(&Action::MoveWindowToGroup(target.into())).unwrap();
        assert_eq!(out, Dispatched::Suppressed);
        assert_eq!(calls(&d), vec![format!("togroup {} false", target)]);
    }

    #[test]
    fn host_errors_are_wrapped() {
        let wm = RecorderWm {
            fail: true,
            ..Default::default()
        };
        let mut d = Dispatcher::new(wm);
        let err = d.handle(&Action::NextLayout).unwrap_err();
        assert_eq!(err.to_string(), "window manager error: recorder error");
    }
}
