//! Named colour roles for the light and dark dashboard palettes.
//!
//! Renderers never pick raw colours; they ask the active [`DashboardTheme`]
//! for a role:
//!
//! - `background`: window background behind every panel
//! - `card`: header, sidebars, chat panels and content cards
//! - `secondary`: hover states and bot message bubbles
//! - `border`: one-pixel separators and panel outlines
//! - `primary` / `primary_foreground`: user bubbles and their text
//! - `accent` / `accent_hover`: the assistant's orange (bubble button, send
//!   button, bot avatar)
//! - `text_primary`, `text_muted`: text hierarchy
//! - `overlay`: translucent veil behind the narrow-window history drawer

use eframe::egui::Color32;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardTheme {
    pub name: &'static str,
    pub background: Color32,
    pub card: Color32,
    pub secondary: Color32,
    pub border: Color32,
    pub primary: Color32,
    pub primary_foreground: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub overlay: Color32,
}

impl DashboardTheme {
    pub fn light() -> Self {
        Self {
            name: "Light",
            background: Color32::from_rgb(248, 249, 251),
            card: Color32::WHITE,
            secondary: Color32::from_rgb(241, 243, 246),
            border: Color32::from_rgb(226, 229, 234),
            primary: Color32::from_rgb(30, 58, 138),
            primary_foreground: Color32::WHITE,
            accent: Color32::from_rgb(249, 115, 22),
            accent_hover: Color32::from_rgb(234, 88, 12),
            text_primary: Color32::from_rgb(17, 24, 39),
            text_muted: Color32::from_rgb(107, 114, 128),
            overlay: Color32::from_black_alpha(128),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark",
            background: Color32::from_rgb(12, 14, 20),
            card: Color32::from_rgb(22, 25, 34),
            secondary: Color32::from_rgb(38, 42, 54),
            border: Color32::from_rgb(48, 52, 64),
            primary: Color32::from_rgb(96, 130, 230),
            primary_foreground: Color32::WHITE,
            accent: Color32::from_rgb(249, 115, 22),
            accent_hover: Color32::from_rgb(251, 146, 60),
            text_primary: Color32::from_rgb(236, 238, 242),
            text_muted: Color32::from_rgb(148, 155, 164),
            overlay: Color32::from_black_alpha(128),
        }
    }

    /// Palette matching the current egui visuals.
    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_dark_mode_picks_palette() {
        assert_eq!(DashboardTheme::for_dark_mode(true).name, "Dark");
        assert_eq!(DashboardTheme::for_dark_mode(false).name, "Light");
    }

    #[test]
    fn test_accent_shared_between_palettes() {
        assert_eq!(DashboardTheme::light().accent, DashboardTheme::dark().accent);
    }

    #[test]
    fn test_user_bubble_text_contrasts() {
        for theme in [DashboardTheme::light(), DashboardTheme::dark()] {
            assert_ne!(theme.primary, theme.primary_foreground);
            assert_ne!(theme.card, theme.text_primary);
        }
    }
}
