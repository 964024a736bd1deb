//! Event processing from the responder

use tracing::debug;

use super::ChatWidget;
use crate::protocol::WidgetEvent;

impl ChatWidget {
    /// Apply every reply that arrived since the last frame.
    ///
    /// Returns the number of events applied.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                WidgetEvent::BotReply { text } => {
                    debug!(len = text.len(), "bot reply delivered");
                    self.state.push_bot_reply(text);
                }
            }
            applied += 1;
        }
        applied
    }
}
