//! UI rendering modules for the dashboard.
//!
//! This module contains the egui rendering code shared by the app and the chat
//! widget, organized by component:
//! - `dashboard`: Header, navigation sidebar and main content regions
//! - `messages`: Chat message list, shared by all chat layouts
//! - `theme`: Colour roles and styling utilities

pub mod dashboard;
pub mod messages;
pub mod theme;
