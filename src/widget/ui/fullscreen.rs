//! Fullscreen conversation with the chat history sidebar

use eframe::egui::{self, RichText, Stroke};

use super::icon_button;
use super::input::{InputStyle, FULLSCREEN_HINT};
use crate::message::{Sender, ASSISTANT_NAME, CHAT_HISTORY};
use crate::ui::messages::{render_message_list, Density};
use crate::ui::theme::{self, DashboardTheme};
use crate::widget::ChatWidget;

const HISTORY_WIDTH: f32 = 320.0;

impl ChatWidget {
    /// Render the fullscreen layout. Must run before any other panel of the frame.
    ///
    /// On wide windows the history is a side panel; on narrow ones it is a
    /// drawer over the conversation with a dismissible overlay behind it.
    pub(in crate::widget) fn render_fullscreen(
        &mut self,
        ctx: &egui::Context,
        theme: &DashboardTheme,
        narrow: bool,
    ) {
        if self.state.sidebar_visible() && !narrow {
            egui::SidePanel::left("chat_history_panel")
                .resizable(false)
                .exact_width(HISTORY_WIDTH)
                .frame(history_frame(theme))
                .show(ctx, |ui| render_history(ui, theme));
        }

        egui::TopBottomPanel::top("chat_fullscreen_header")
            .frame(
                egui::Frame::new()
                    .fill(theme.card)
                    .inner_margin(egui::Margin::same(16))
                    .stroke(Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| self.render_fullscreen_header(ui, theme));

        let column = Density::Spacious.metrics().column_max_width;
        egui::TopBottomPanel::bottom("chat_fullscreen_input")
            .frame(
                egui::Frame::new()
                    .fill(theme.card)
                    .inner_margin(egui::Margin::same(16))
                    .stroke(Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                let width = ui.available_width().min(column);
                let inset = ((ui.available_width() - width) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(inset);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        self.render_input_row(
                            ui,
                            theme,
                            InputStyle {
                                height: 48.0,
                                hint: FULLSCREEN_HINT,
                            },
                        );
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme.background)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                let height = ui.available_height();
                render_message_list(ui, self.state.messages(), Density::Spacious, theme, height);
            });

        if self.state.shows_sidebar_overlay(narrow) {
            self.render_history_drawer(ctx, theme);
        }
    }

    fn render_fullscreen_header(&mut self, ui: &mut egui::Ui, theme: &DashboardTheme) {
        ui.horizontal(|ui| {
            if icon_button(ui, "☰", "Toggle chat history") {
                self.state.toggle_sidebar();
            }
            theme::render_avatar(
                ui,
                Sender::Bot.avatar_initial(),
                32.0,
                theme::avatar_fill(Sender::Bot, theme),
            );
            ui.label(
                RichText::new(format!("{} - Your AI Assistant", ASSISTANT_NAME))
                    .size(20.0)
                    .strong()
                    .color(theme.text_primary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if icon_button(ui, "🗙", "Close") {
                    self.state.close();
                }
                if icon_button(ui, "🗕", "Minimize") {
                    self.state.minimize();
                }
            });
        });
    }

    /// Narrow-window history: veil over the whole window plus a drawer on the left.
    fn render_history_drawer(&mut self, ctx: &egui::Context, theme: &DashboardTheme) {
        let screen = ctx.screen_rect();
        let mut dismissed = false;

        egui::Area::new(egui::Id::new("chat_history_overlay"))
            .fixed_pos(screen.min)
            .order(egui::Order::Middle)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter().rect_filled(rect, 0.0, theme.overlay);
                dismissed = response.clicked();
            });

        egui::Area::new(egui::Id::new("chat_history_drawer"))
            .fixed_pos(screen.min)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                history_frame(theme).show(ui, |ui| {
                    ui.set_width(HISTORY_WIDTH.min(screen.width()));
                    ui.set_min_height(screen.height());
                    render_history(ui, theme);
                });
            });

        if dismissed {
            self.state.dismiss_sidebar();
        }
    }
}

fn history_frame(theme: &DashboardTheme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.card)
        .inner_margin(egui::Margin::same(8))
        .stroke(Stroke::new(1.0, theme.border))
}

/// Past conversations (static, not clickable into anything).
fn render_history(ui: &mut egui::Ui, theme: &DashboardTheme) {
    ui.add_space(8.0);
    ui.label(
        RichText::new("Chat History")
            .size(16.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("chat_history_list")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for entry in CHAT_HISTORY.iter() {
                egui::Frame::new()
                    .fill(theme.background)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(entry.title)
                                .size(14.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.add(
                            egui::Label::new(
                                RichText::new(entry.last_message)
                                    .small()
                                    .color(theme.text_muted),
                            )
                            .truncate(),
                        );
                    });
                ui.add_space(4.0);
            }
        });
}
