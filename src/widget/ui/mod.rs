//! Layout renderers for the chat widget.

pub mod docked;
pub mod floating;
pub mod fullscreen;
pub mod input;

use eframe::egui::{self, RichText};

/// Frameless icon button used in the chat headers. Returns true when clicked.
pub(in crate::widget) fn icon_button(ui: &mut egui::Ui, icon: &str, hint: &str) -> bool {
    ui.add(egui::Button::new(RichText::new(icon).size(14.0)).frame(false))
        .on_hover_text(hint)
        .clicked()
}
