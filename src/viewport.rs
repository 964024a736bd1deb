//! Narrow-viewport detection.

use eframe::egui;

/// Whether a window of `width` points should use the narrow layouts.
pub fn is_narrow_width(width: f32, breakpoint: f32) -> bool {
    width < breakpoint
}

/// Narrow-viewport signal for the current frame.
pub fn is_narrow(ctx: &egui::Context, breakpoint: f32) -> bool {
    is_narrow_width(ctx.screen_rect().width(), breakpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_NARROW_BREAKPOINT;

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert!(is_narrow_width(375.0, DEFAULT_NARROW_BREAKPOINT));
        assert!(is_narrow_width(767.9, DEFAULT_NARROW_BREAKPOINT));
        assert!(!is_narrow_width(768.0, DEFAULT_NARROW_BREAKPOINT));
        assert!(!is_narrow_width(1280.0, DEFAULT_NARROW_BREAKPOINT));
    }
}
