//! SLCM dashboard library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod config;
pub mod message;
pub mod protocol;
pub mod responder;
pub mod state;
pub mod ui;
pub mod viewport;
pub mod widget;
