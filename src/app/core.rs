//! Core DashboardApp struct definition and initialization

use eframe::egui;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::{load_settings, settings_path, write_settings, Settings};
use crate::ui::theme::{self, DashboardTheme};
use crate::widget::ChatWidget;

pub struct DashboardApp {
    // Persisted preferences (theme, reply delay, breakpoint)
    pub settings: Settings,

    // Where settings are written back on exit (None = don't persist)
    settings_path: Option<PathBuf>,

    // The single chat widget mounted on the page
    pub chat: ChatWidget,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let path = match settings_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "settings will not be persisted");
                None
            }
        };
        let settings = path.as_deref().map(load_settings).unwrap_or_default();
        info!(
            theme = ?settings.theme,
            reply_delay_ms = settings.reply_delay_ms,
            narrow_breakpoint = settings.narrow_breakpoint,
            "starting dashboard"
        );

        let app = Self::with_settings(settings, path);
        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Build the app state without touching any window.
    pub fn with_settings(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let chat = ChatWidget::new(settings.reply_delay());
        Self {
            settings,
            settings_path,
            chat,
        }
    }

    /// Get the current theme based on the settings
    pub(super) fn get_theme(&self) -> DashboardTheme {
        DashboardTheme::for_dark_mode(self.settings.theme.is_dark())
    }

    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        theme::apply_app_style(ctx, &self.get_theme(), self.settings.theme.is_dark());
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = self.settings.theme.toggled();
        info!(theme = ?self.settings.theme, "theme changed");
        self.apply_theme(ctx);
    }
}

impl Drop for DashboardApp {
    fn drop(&mut self) {
        // Persist settings on exit
        if let Some(path) = &self.settings_path {
            if let Err(e) = write_settings(path, &self.settings) {
                warn!(error = %e, "failed to save settings");
            }
        }
    }
}
