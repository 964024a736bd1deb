//! Left navigation sidebar.

use eframe::egui::{self, RichText, Stroke};

use crate::ui::theme::{self, DashboardTheme};

/// A sidebar navigation entry: icon and label.
pub type NavItem = (&'static str, &'static str);

/// Navigation entries, top to bottom. The first one is the current page.
pub const NAV_ITEMS: [NavItem; 8] = [
    ("🏠", "Dashboard"),
    ("📚", "Academics"),
    ("🗓", "Attendance"),
    ("📝", "Examinations"),
    ("📖", "Library"),
    ("💳", "Fee Payment"),
    ("💬", "Counselling"),
    ("⚙", "Settings"),
];

const SIDEBAR_WIDTH: f32 = 240.0;
const RAIL_WIDTH: f32 = 56.0;

/// Render the navigation sidebar. On narrow windows it collapses to an icon rail.
pub fn render_sidebar(ctx: &egui::Context, theme: &DashboardTheme, narrow: bool) {
    let width = if narrow { RAIL_WIDTH } else { SIDEBAR_WIDTH };

    egui::SidePanel::left("dashboard_sidebar")
        .resizable(false)
        .exact_width(width)
        .frame(
            egui::Frame::new()
                .fill(theme.card)
                .inner_margin(egui::Margin::symmetric(8, 12))
                .stroke(Stroke::new(1.0, theme.border)),
        )
        .show(ctx, |ui| {
            if !narrow {
                ui.label(
                    RichText::new("MENU")
                        .font(theme::named_font(ui.style(), theme::SECTION_HEADER, 11.0))
                        .strong()
                        .color(theme.text_muted),
                );
                ui.add_space(6.0);
            }

            for (index, (icon, label)) in NAV_ITEMS.iter().enumerate() {
                let selected = index == 0;
                let text = if narrow {
                    RichText::new(*icon).size(18.0)
                } else {
                    RichText::new(format!("{}  {}", icon, label))
                };
                let text = if selected {
                    text.color(theme.accent).strong()
                } else {
                    text.color(theme.text_primary)
                };

                let response = ui.add_sized(
                    egui::vec2(ui.available_width(), 36.0),
                    egui::SelectableLabel::new(selected, text),
                );
                if narrow {
                    response.on_hover_text(*label);
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_starts_with_dashboard() {
        assert_eq!(NAV_ITEMS[0].1, "Dashboard");
        assert!(NAV_ITEMS.iter().all(|(icon, label)| !icon.is_empty() && !label.is_empty()));
    }
}
