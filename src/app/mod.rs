//! Application module structure for DashboardApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: DashboardApp struct, initialization and settings persistence
//! - `update`: Per-frame composition of the dashboard regions and chat widget

pub mod core;
pub mod update;

// Re-export DashboardApp for public API
pub use self::core::DashboardApp;
