//! Docked chat panel: floating card on wide windows, bottom sheet on narrow ones

use eframe::egui::{self, CornerRadius, RichText, Stroke};

use super::icon_button;
use super::input::{InputStyle, DOCKED_HINT};
use crate::message::{Sender, ASSISTANT_NAME};
use crate::ui::messages::{render_message_list, Density};
use crate::ui::theme::{self, DashboardTheme};
use crate::widget::ChatWidget;

const CARD_WIDTH: f32 = 320.0;
const CARD_LIST_HEIGHT: f32 = 280.0;
const CARD_OFFSET: [f32; 2] = [-24.0, -80.0];

/// Share of the window height the sheet may cover.
pub const SHEET_MAX_FRACTION: f32 = 0.7;
/// Messages stay at least this tall however small the window gets.
pub const SHEET_MIN_LIST_HEIGHT: f32 = 200.0;
/// Header, separators, input row and padding of the sheet.
const SHEET_CHROME_HEIGHT: f32 = 120.0;
const SHEET_PADDING: i8 = 16;

/// Message list height of the bottom sheet for a window of `screen_height`.
pub fn sheet_list_height(screen_height: f32) -> f32 {
    (screen_height * SHEET_MAX_FRACTION - SHEET_CHROME_HEIGHT).max(SHEET_MIN_LIST_HEIGHT)
}

/// Which docked variant a header belongs to; they differ in the collapse icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DockedVariant {
    Card,
    Sheet,
}

impl ChatWidget {
    pub(in crate::widget) fn render_docked_card(&mut self, ctx: &egui::Context, theme: &DashboardTheme) {
        egui::Area::new(egui::Id::new("chat_docked_card"))
            .anchor(egui::Align2::RIGHT_BOTTOM, CARD_OFFSET)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme.card)
                    .stroke(Stroke::new(1.0, theme.border))
                    .corner_radius(12.0)
                    .inner_margin(egui::Margin::same(12))
                    .shadow(ui.style().visuals.popup_shadow)
                    .show(ui, |ui| {
                        ui.set_width(CARD_WIDTH);
                        self.render_docked_header(ui, theme, DockedVariant::Card);
                        ui.separator();
                        render_message_list(
                            ui,
                            self.state.messages(),
                            Density::Card,
                            theme,
                            CARD_LIST_HEIGHT,
                        );
                        ui.separator();
                        self.render_input_row(
                            ui,
                            theme,
                            InputStyle {
                                height: 32.0,
                                hint: DOCKED_HINT,
                            },
                        );
                    });
            });
    }

    pub(in crate::widget) fn render_docked_sheet(&mut self, ctx: &egui::Context, theme: &DashboardTheme) {
        let screen = ctx.screen_rect();
        let list_height = sheet_list_height(screen.height());
        let inner_width = screen.width() - 2.0 * f32::from(SHEET_PADDING) - 2.0;

        egui::Area::new(egui::Id::new("chat_docked_sheet"))
            .anchor(egui::Align2::LEFT_BOTTOM, [0.0, 0.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme.card)
                    .stroke(Stroke::new(1.0, theme.border))
                    .corner_radius(CornerRadius {
                        nw: 16,
                        ne: 16,
                        sw: 0,
                        se: 0,
                    })
                    .inner_margin(egui::Margin::same(SHEET_PADDING))
                    .show(ui, |ui| {
                        ui.set_width(inner_width);
                        self.render_docked_header(ui, theme, DockedVariant::Sheet);
                        ui.separator();
                        render_message_list(
                            ui,
                            self.state.messages(),
                            Density::Sheet,
                            theme,
                            list_height,
                        );
                        ui.separator();
                        self.render_input_row(
                            ui,
                            theme,
                            InputStyle {
                                height: 40.0,
                                hint: DOCKED_HINT,
                            },
                        );
                    });
            });
    }

    fn render_docked_header(&mut self, ui: &mut egui::Ui, theme: &DashboardTheme, variant: DockedVariant) {
        ui.horizontal(|ui| {
            theme::render_avatar(
                ui,
                Sender::Bot.avatar_initial(),
                24.0,
                theme::avatar_fill(Sender::Bot, theme),
            );
            ui.label(
                RichText::new(ASSISTANT_NAME)
                    .size(14.0)
                    .strong()
                    .color(theme.text_primary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Right to left: the collapse control sits in the corner
                let (icon, hint) = match variant {
                    DockedVariant::Card => ("🗕", "Minimize"),
                    DockedVariant::Sheet => ("🗙", "Close"),
                };
                if icon_button(ui, icon, hint) {
                    self.state.close();
                }
                if icon_button(ui, "🗖", "Maximize") {
                    self.state.maximize();
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_list_height_caps_at_seventy_percent() {
        let height = sheet_list_height(1000.0);
        assert_eq!(height, 1000.0 * SHEET_MAX_FRACTION - SHEET_CHROME_HEIGHT);
        assert!(height + SHEET_CHROME_HEIGHT <= 700.0);
    }

    #[test]
    fn test_sheet_list_height_has_floor() {
        assert_eq!(sheet_list_height(300.0), SHEET_MIN_LIST_HEIGHT);
    }
}
