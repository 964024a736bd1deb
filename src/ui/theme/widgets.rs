//! Avatar rendering.

use eframe::egui::{self, Color32};

use super::DashboardTheme;
use crate::message::Sender;

/// Circle colour behind a sender's initial.
pub fn avatar_fill(sender: Sender, theme: &DashboardTheme) -> Color32 {
    match sender {
        Sender::Bot => theme.accent,
        Sender::User => theme.primary,
    }
}

/// Render a circular avatar with a single-letter initial.
///
/// Returns the response for hover handling.
pub fn render_avatar(ui: &mut egui::Ui, initial: &str, size: f32, fill: Color32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();

    painter.circle_filled(rect.center(), size / 2.0, fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(size * 0.45),
        Color32::WHITE,
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_fill_by_sender() {
        let theme = DashboardTheme::light();
        assert_eq!(avatar_fill(Sender::Bot, &theme), theme.accent);
        assert_eq!(avatar_fill(Sender::User, &theme), theme.primary);
    }
}
