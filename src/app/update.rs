//! Main update loop: header, sidebar, content, chat widget

use eframe::egui;
use std::time::Duration;

use super::DashboardApp;
use crate::ui::dashboard::{self, HeaderAction};
use crate::viewport;

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keep polling for delayed bot replies
        ctx.request_repaint_after(Duration::from_millis(100));

        let narrow = viewport::is_narrow(ctx, self.settings.narrow_breakpoint);

        // Fullscreen chat covers the whole page
        if self.chat.covers_window() {
            self.chat.show(ctx, narrow);
            return;
        }

        let theme = self.get_theme();

        if let Some(HeaderAction::ToggleTheme) =
            dashboard::render_header(ctx, &theme, self.settings.theme, narrow)
        {
            self.toggle_theme(ctx);
        }
        dashboard::render_sidebar(ctx, &theme, narrow);
        dashboard::render_main_content(ctx, &theme, narrow);

        self.chat.show(ctx, narrow);
    }
}
