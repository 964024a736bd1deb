//! Draft input row shared by every chat layout

use eframe::egui::{self, Color32, RichText};

use crate::ui::theme::DashboardTheme;
use crate::widget::ChatWidget;

pub const DOCKED_HINT: &str = "Type your message...";
pub const FULLSCREEN_HINT: &str = "Ask Manny anything about SLCM...";

/// Id of the draft field. Only one layout renders it per frame.
pub fn draft_input_id() -> egui::Id {
    egui::Id::new("chat_draft_input")
}

/// Size and placeholder of the input row in one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputStyle {
    pub height: f32,
    pub hint: &'static str,
}

impl ChatWidget {
    /// Render the draft field and the send button.
    ///
    /// Enter in the field or a click on the button sends; the button is
    /// disabled while the draft is blank.
    pub(in crate::widget) fn render_input_row(
        &mut self,
        ui: &mut egui::Ui,
        theme: &DashboardTheme,
        style: InputStyle,
    ) {
        let mut submit = false;

        ui.horizontal(|ui| {
            let spacing = ui.spacing().item_spacing.x;
            let field_width = (ui.available_width() - style.height - spacing).max(40.0);

            let response = ui.add_sized(
                egui::vec2(field_width, style.height),
                egui::TextEdit::singleline(self.state.draft_mut())
                    .id(draft_input_id())
                    .hint_text(style.hint)
                    .vertical_align(egui::Align::Center),
            );

            // Singleline edits drop focus on Enter
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
                response.request_focus();
            }

            let send = ui.add_enabled(
                self.state.can_send(),
                egui::Button::new(RichText::new("➤").color(Color32::WHITE))
                    .fill(theme.accent)
                    .min_size(egui::vec2(style.height, style.height)),
            );
            if send.on_hover_text("Send").clicked() {
                submit = true;
            }
        });

        if submit {
            self.send_message();
        }
    }
}
