//! **tilerc**: a typed configuration for a tiling window manager.
//!
//! The window manager ("the host") owns the event loop, the window tree,
//! rendering and input dispatch.  This crate only describes what the host
//! should do: key and mouse bindings, groups, the status bar, colors,
//! layout parameters and a few behavior flags.
//!
//! # Architecture
//!
//! * [`profile::Profile`] assembles every table from a user
//!   [`config::Config`] and checks the invariants the host relies on.
//! * [`traits::WindowManager`] abstracts the host, so the little logic the
//!   configuration has (the private-group rule in [`groups`]) can be
//!   exercised against any backend.
//! * [`dispatch::Dispatcher`] resolves a binding's [`command::Action`]
//!   into host calls.

pub mod bar;
pub mod bindings;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod groups;
pub mod layout;
pub mod profile;
pub mod spawn;
pub mod theme;
pub mod traits;
