//! Text style definitions and global style setup.

use eframe::egui::{self, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use super::DashboardTheme;

/// Named style for the small captions above sidebar sections.
pub const SECTION_HEADER: &str = "section_header";
/// Named style for the large figures on summary cards.
pub const CARD_VALUE: &str = "card_value";

/// Configure the dashboard text hierarchy.
///
/// - **Small**: 11px - timestamps, metadata
/// - **Body**: 14px - standard UI text
/// - **Button**: 13px - button labels
/// - **Heading**: 20px - page and panel titles
/// - **Monospace**: 13px
/// - **section_header**: 11px - sidebar section captions
/// - **card_value**: 24px - figures on the summary cards
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(11.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(20.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name(SECTION_HEADER.into()), FontId::new(11.0, Proportional)),
        (TextStyle::Name(CARD_VALUE.into()), FontId::new(24.0, Proportional)),
    ]
    .into()
}

/// Font of the named text style `name`, or a proportional font of `fallback`
/// points when the dashboard styles have not been installed on this context.
pub fn named_font(style: &egui::Style, name: &str, fallback: f32) -> FontId {
    style
        .text_styles
        .get(&TextStyle::Name(name.into()))
        .cloned()
        .unwrap_or_else(|| FontId::proportional(fallback))
}

/// Apply visuals, spacing and widget styling for `theme` to the context.
///
/// Called once at startup and again whenever the header toggles the theme.
pub fn apply_app_style(ctx: &egui::Context, theme: &DashboardTheme, dark_mode: bool) {
    ctx.set_theme(if dark_mode {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();

    // 8px grid
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    let radius = egui::CornerRadius::same(8);
    style.visuals.widgets.inactive.bg_fill = theme.secondary;
    style.visuals.widgets.inactive.weak_bg_fill = theme.secondary;
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.inactive.corner_radius = radius;

    style.visuals.widgets.hovered.bg_fill = theme.border;
    style.visuals.widgets.hovered.weak_bg_fill = theme.border;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.hovered.corner_radius = radius;

    style.visuals.widgets.active.bg_fill = theme.accent;
    style.visuals.widgets.active.weak_bg_fill = theme.accent;
    style.visuals.widgets.active.corner_radius = radius;

    // Text input
    style.visuals.extreme_bg_color = theme.card;
    style.visuals.selection.bg_fill = theme.accent.linear_multiply(0.4);
    style.visuals.panel_fill = theme.background;
    style.visuals.window_fill = theme.card;

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_complete() {
        let styles = configure_text_styles();
        assert_eq!(styles[&TextStyle::Body].size, 14.0);
        assert!(styles.contains_key(&TextStyle::Name(SECTION_HEADER.into())));
        assert!(styles.contains_key(&TextStyle::Name(CARD_VALUE.into())));
    }

    #[test]
    fn test_named_font_falls_back_on_unstyled_context() {
        let style = egui::Style::default();
        assert_eq!(named_font(&style, CARD_VALUE, 24.0), FontId::proportional(24.0));

        let ctx = egui::Context::default();
        apply_app_style(&ctx, &DashboardTheme::light(), false);
        let font = named_font(&ctx.style(), SECTION_HEADER, 99.0);
        assert_eq!(font.size, 11.0);
    }
}
