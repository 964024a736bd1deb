//! Floating chat bubble and its tooltip

use eframe::egui::{self, Color32, RichText, Stroke};

use crate::ui::theme::DashboardTheme;
use crate::widget::ChatWidget;

pub const TOOLTIP_TEXT: &str = "Chat with our chatbot Manny";

const BUBBLE_SIZE: f32 = 56.0;
const SCREEN_OFFSET: f32 = 24.0;

impl ChatWidget {
    /// Render the round bubble in the bottom-right corner.
    pub(in crate::widget) fn render_floating(&mut self, ctx: &egui::Context, theme: &DashboardTheme) {
        let mut hovered = false;
        let mut clicked = false;

        egui::Area::new(egui::Id::new("chat_bubble"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-SCREEN_OFFSET, -SCREEN_OFFSET])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let fill = if self.state.tooltip_visible() {
                    theme.accent_hover
                } else {
                    theme.accent
                };
                let response = ui.add(
                    egui::Button::new(RichText::new("💬").size(24.0).color(Color32::WHITE))
                        .fill(fill)
                        .corner_radius(BUBBLE_SIZE / 2.0)
                        .min_size(egui::vec2(BUBBLE_SIZE, BUBBLE_SIZE)),
                );
                hovered = response.hovered();
                clicked = response.clicked();
            });

        self.state.set_tooltip_visible(hovered);
        if clicked {
            self.state.open();
            return;
        }

        if self.state.tooltip_visible() {
            egui::Area::new(egui::Id::new("chat_bubble_tooltip"))
                .anchor(
                    egui::Align2::RIGHT_BOTTOM,
                    [-SCREEN_OFFSET, -(SCREEN_OFFSET + BUBBLE_SIZE + 8.0)],
                )
                .order(egui::Order::Tooltip)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::new()
                        .fill(theme.card)
                        .stroke(Stroke::new(1.0, theme.border))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(RichText::new(TOOLTIP_TEXT).size(13.0).color(theme.text_primary));
                        });
                });
        }
    }
}
