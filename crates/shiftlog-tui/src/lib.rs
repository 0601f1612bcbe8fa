//! shiftlog-tui - Terminal UI for shiftlog
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from shiftlog-app with the HTTP backend and adds terminal rendering,
//! key polling and the form widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
