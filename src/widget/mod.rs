//! The "Manny" chat widget
//!
//! This module organizes the widget into focused submodules:
//! - `core`: ChatWidget struct, responder wiring and teardown
//! - `events`: Draining reply events from the responder
//! - `ui::floating`: Chat bubble and its tooltip
//! - `ui::docked`: Desktop card and narrow-window bottom sheet
//! - `ui::fullscreen`: Fullscreen conversation with history sidebar
//! - `ui::input`: Draft input row shared by every layout

pub mod core;
pub mod events;
pub mod ui;

pub use self::core::ChatWidget;
