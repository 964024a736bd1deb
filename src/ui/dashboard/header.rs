//! Top header with product title and theme toggle.

use eframe::egui::{self, RichText, Stroke};

use crate::config::ThemeChoice;
use crate::ui::theme::DashboardTheme;

/// Actions that the header can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// User clicked the light/dark toggle
    ToggleTheme,
}

/// Render the dashboard header.
/// Returns Some(HeaderAction) if an action was requested.
pub fn render_header(
    ctx: &egui::Context,
    theme: &DashboardTheme,
    theme_choice: ThemeChoice,
    narrow: bool,
) -> Option<HeaderAction> {
    let mut action = None;

    egui::TopBottomPanel::top("dashboard_header")
        .frame(
            egui::Frame::new()
                .fill(theme.card)
                .inner_margin(egui::Margin::symmetric(16, 10))
                .stroke(Stroke::new(1.0, theme.border)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("SLCM")
                        .size(20.0)
                        .strong()
                        .color(theme.accent),
                );
                if !narrow {
                    ui.label(
                        RichText::new("Student Lifecycle Management")
                            .size(14.0)
                            .color(theme.text_muted),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("Student").color(theme.text_primary));

                    let icon = if theme_choice.is_dark() { "☀" } else { "🌙" };
                    let hint = if theme_choice.is_dark() {
                        "Switch to light theme"
                    } else {
                        "Switch to dark theme"
                    };
                    if ui
                        .add(egui::Button::new(RichText::new(icon).size(16.0)).frame(false))
                        .on_hover_text(hint)
                        .clicked()
                    {
                        action = Some(HeaderAction::ToggleTheme);
                    }
                });
            });
        });

    action
}
