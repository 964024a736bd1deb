//! Message list rendering with avatars and mirrored user bubbles.

use eframe::egui::{self, Align, CornerRadius, Layout, Margin};

use crate::message::Message;
use crate::ui::theme::{self, DashboardTheme};

/// How tightly the list is laid out. Each chat layout picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    /// Desktop docked card
    Card,
    /// Narrow-window bottom sheet
    Sheet,
    /// Fullscreen conversation
    Spacious,
}

/// Sizes derived from a [`Density`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityMetrics {
    pub avatar_size: f32,
    pub text_size: f32,
    pub bubble_max_width: f32,
    pub bubble_padding: i8,
    pub bubble_radius: u8,
    pub row_spacing: f32,
    /// Messages are centred in a column no wider than this.
    pub column_max_width: f32,
}

impl Density {
    pub fn metrics(self) -> DensityMetrics {
        match self {
            Density::Card => DensityMetrics {
                avatar_size: 24.0,
                text_size: 12.0,
                bubble_max_width: 200.0,
                bubble_padding: 12,
                bubble_radius: 8,
                row_spacing: 12.0,
                column_max_width: f32::INFINITY,
            },
            Density::Sheet => DensityMetrics {
                avatar_size: 24.0,
                text_size: 12.0,
                bubble_max_width: 250.0,
                bubble_padding: 12,
                bubble_radius: 8,
                row_spacing: 12.0,
                column_max_width: f32::INFINITY,
            },
            Density::Spacious => DensityMetrics {
                avatar_size: 32.0,
                text_size: 14.0,
                bubble_max_width: 448.0,
                bubble_padding: 16,
                bubble_radius: 16,
                row_spacing: 16.0,
                column_max_width: 896.0,
            },
        }
    }
}

/// Render `messages` in a scroll area that sticks to the newest message.
pub fn render_message_list(
    ui: &mut egui::Ui,
    messages: &[Message],
    density: Density,
    theme: &DashboardTheme,
    max_height: f32,
) {
    let metrics = density.metrics();

    egui::ScrollArea::vertical()
        .id_salt(("chat_messages", density))
        .auto_shrink([false; 2])
        .max_height(max_height)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let width = ui.available_width().min(metrics.column_max_width);
            let inset = ((ui.available_width() - width) / 2.0).max(0.0);

            ui.horizontal(|ui| {
                ui.add_space(inset);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    ui.add_space(metrics.row_spacing / 2.0);
                    for msg in messages {
                        render_message_row(ui, msg, &metrics, theme);
                        ui.add_space(metrics.row_spacing);
                    }
                });
            });
        });
}

fn render_message_row(
    ui: &mut egui::Ui,
    msg: &Message,
    metrics: &DensityMetrics,
    theme: &DashboardTheme,
) {
    let from_user = msg.is_from_user();
    let layout = if from_user {
        Layout::right_to_left(Align::Min)
    } else {
        Layout::left_to_right(Align::Min)
    };

    ui.with_layout(layout, |ui| {
        theme::render_avatar(
            ui,
            msg.sender.avatar_initial(),
            metrics.avatar_size,
            theme::avatar_fill(msg.sender, theme),
        );

        let (fill, text_color) = if from_user {
            (theme.primary, theme.primary_foreground)
        } else {
            (theme.secondary, theme.text_primary)
        };

        egui::Frame::new()
            .fill(fill)
            .corner_radius(bubble_corners(from_user, metrics.bubble_radius))
            .inner_margin(Margin::same(metrics.bubble_padding))
            .show(ui, |ui| {
                ui.set_max_width(metrics.bubble_max_width);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&msg.text)
                            .size(metrics.text_size)
                            .color(text_color),
                    )
                    .wrap(),
                );
            })
            .response
            .on_hover_text(msg.time_label());
    });
}

/// Bubble corners with the corner next to the avatar squared off.
fn bubble_corners(from_user: bool, radius: u8) -> CornerRadius {
    let tight = radius / 3;
    if from_user {
        CornerRadius {
            nw: radius,
            ne: tight,
            sw: radius,
            se: radius,
        }
    } else {
        CornerRadius {
            nw: tight,
            ne: radius,
            sw: radius,
            se: radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacious_is_roomier_than_card() {
        let card = Density::Card.metrics();
        let spacious = Density::Spacious.metrics();
        assert!(spacious.avatar_size > card.avatar_size);
        assert!(spacious.text_size > card.text_size);
        assert!(spacious.bubble_max_width > card.bubble_max_width);
        assert!(spacious.column_max_width.is_finite());
        assert!(card.column_max_width.is_infinite());
    }

    #[test]
    fn test_sheet_bubbles_wider_than_card() {
        assert!(Density::Sheet.metrics().bubble_max_width > Density::Card.metrics().bubble_max_width);
    }

    #[test]
    fn test_bubble_corner_next_to_avatar_is_tight() {
        let user = bubble_corners(true, 16);
        assert!(user.ne < user.nw);
        let bot = bubble_corners(false, 16);
        assert!(bot.nw < bot.ne);
    }
}
