//! Core ChatWidget struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::protocol::{ResponderAction, WidgetEvent};
use crate::responder::run_responder;
use crate::state::{ChatLayout, ChatState, DisplayMode};
use crate::ui::theme::DashboardTheme;

pub struct ChatWidget {
    // Display mode, messages, draft and visibility flags
    pub(super) state: ChatState,

    // Channels for responder communication
    pub(super) action_tx: Sender<ResponderAction>,
    pub(super) event_rx: Receiver<WidgetEvent>,

    responder: Option<JoinHandle<()>>,
}

impl ChatWidget {
    /// Create a widget and start its reply responder thread.
    pub fn new(reply_delay: Duration) -> Self {
        // Create channels for UI <-> Responder
        let (action_tx, action_rx) = unbounded::<ResponderAction>();
        let (event_tx, event_rx) = unbounded::<WidgetEvent>();

        let responder = thread::Builder::new()
            .name("chat-responder".into())
            .spawn(move || run_responder(action_rx, event_tx, reply_delay));
        let responder = match responder {
            Ok(handle) => Some(handle),
            Err(e) => {
                error!(error = %e, "failed to spawn chat responder thread");
                None
            }
        };

        Self {
            state: ChatState::new(),
            action_tx,
            event_rx,
            responder,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ChatState {
        &mut self.state
    }

    /// Send the current draft and schedule the bot's reply.
    ///
    /// Blank drafts are ignored.
    pub fn send_message(&mut self) {
        let Some(prompt) = self.state.send_message() else {
            return;
        };
        if self.action_tx.send(ResponderAction::Schedule { prompt }).is_err() {
            warn!("chat responder is not running, no reply will arrive");
        }
    }

    /// Whether the widget currently covers the whole window.
    pub fn covers_window(&self) -> bool {
        self.state.display_mode() == DisplayMode::Fullscreen
    }

    /// Drain responder events and render the layout for the current state.
    pub fn show(&mut self, ctx: &egui::Context, narrow: bool) {
        self.process_events();

        let theme = DashboardTheme::for_dark_mode(ctx.style().visuals.dark_mode);
        match self.state.layout(narrow) {
            ChatLayout::FloatingButton => self.render_floating(ctx, &theme),
            ChatLayout::DockedCard => self.render_docked_card(ctx, &theme),
            ChatLayout::DockedSheet => self.render_docked_sheet(ctx, &theme),
            ChatLayout::Fullscreen => self.render_fullscreen(ctx, &theme, narrow),
        }
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        // Cancel pending replies so nothing lands after teardown
        let _ = self.action_tx.send(ResponderAction::Shutdown);
        if let Some(handle) = self.responder.take() {
            if handle.join().is_err() {
                error!("chat responder thread panicked");
            } else {
                debug!("chat responder joined");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_window_only_in_fullscreen() {
        let mut widget = ChatWidget::new(Duration::from_millis(10));
        assert!(!widget.covers_window());

        widget.state_mut().open();
        assert!(!widget.covers_window());

        widget.state_mut().maximize();
        assert!(widget.covers_window());

        widget.state_mut().minimize();
        assert!(!widget.covers_window());
    }
}
