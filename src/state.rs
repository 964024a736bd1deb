//! Chat widget state, separated from UI logic.
//!
//! `ChatState` is the single UI-state record of the widget: display mode,
//! message list, draft text and the two visibility flags. Every mutation goes
//! through a named transition so renderers only ever read it.

use tracing::debug;

use crate::message::{Message, MessageId, Sender, WELCOME_TEXT};

/// Which of the three presentations the widget is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Round chat bubble in the bottom-right corner.
    #[default]
    Floating,
    /// Compact chat panel (card on wide windows, bottom sheet on narrow ones).
    Docked,
    /// Chat covering the whole window with a history sidebar.
    Fullscreen,
}

/// Concrete layout chosen from the display mode and viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatLayout {
    FloatingButton,
    DockedSheet,
    DockedCard,
    Fullscreen,
}

/// All state owned by one chat widget instance.
#[derive(Debug, Clone)]
pub struct ChatState {
    display_mode: DisplayMode,

    /// Append-only for the lifetime of the widget.
    messages: Vec<Message>,

    /// Text currently typed in the input field.
    draft: String,

    /// History sidebar in fullscreen mode.
    sidebar_visible: bool,

    /// Hover tooltip above the floating bubble.
    tooltip_visible: bool,

    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    /// Create the initial state: floating, seeded with the welcome message.
    pub fn new() -> Self {
        let mut state = Self {
            display_mode: DisplayMode::Floating,
            messages: Vec::new(),
            draft: String::new(),
            sidebar_visible: true,
            tooltip_visible: false,
            next_id: 1,
        };
        state.append(Sender::Bot, WELCOME_TEXT.to_string());
        state
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Draft buffer bound to the input field.
    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    /// Switch presentation. Any mode is reachable from any other.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.display_mode != mode {
            debug!(from = ?self.display_mode, to = ?mode, "chat display mode changed");
        }
        self.display_mode = mode;
        if mode != DisplayMode::Floating {
            self.tooltip_visible = false;
        }
    }

    /// Chat bubble clicked.
    pub fn open(&mut self) {
        self.set_display_mode(DisplayMode::Docked);
    }

    pub fn maximize(&mut self) {
        self.set_display_mode(DisplayMode::Fullscreen);
    }

    /// Leave fullscreen for the docked panel.
    pub fn minimize(&mut self) {
        self.set_display_mode(DisplayMode::Docked);
    }

    /// Collapse back to the floating bubble.
    pub fn close(&mut self) {
        self.set_display_mode(DisplayMode::Floating);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    /// Overlay tapped outside the sidebar on a narrow window.
    pub fn dismiss_sidebar(&mut self) {
        self.sidebar_visible = false;
    }

    pub fn set_tooltip_visible(&mut self, visible: bool) {
        self.tooltip_visible = visible && self.display_mode == DisplayMode::Floating;
    }

    /// Whether the draft holds anything besides whitespace.
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Append the draft as a user message and clear it.
    ///
    /// Returns the sent text so the caller can schedule the bot reply, or
    /// `None` when the draft is blank (nothing changes in that case).
    pub fn send_message(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.append(Sender::User, text.clone());
        debug!(len = text.len(), "user message sent");
        Some(text)
    }

    /// Append a bot reply delivered by the responder.
    pub fn push_bot_reply(&mut self, text: String) {
        self.append(Sender::Bot, text);
    }

    /// Pick the concrete layout for the current mode and viewport.
    pub fn layout(&self, narrow: bool) -> ChatLayout {
        match (self.display_mode, narrow) {
            (DisplayMode::Floating, _) => ChatLayout::FloatingButton,
            (DisplayMode::Docked, true) => ChatLayout::DockedSheet,
            (DisplayMode::Docked, false) => ChatLayout::DockedCard,
            (DisplayMode::Fullscreen, _) => ChatLayout::Fullscreen,
        }
    }

    /// Dimming overlay behind the history drawer (fullscreen, narrow window).
    pub fn shows_sidebar_overlay(&self, narrow: bool) -> bool {
        narrow && self.sidebar_visible && self.display_mode == DisplayMode::Fullscreen
    }

    fn append(&mut self, sender: Sender, text: String) {
        let id = MessageId::new(self.next_id);
        self.next_id += 1;
        self.messages.push(Message::new(id, sender, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_state_new() {
        let state = ChatState::new();
        assert_eq!(state.display_mode(), DisplayMode::Floating);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].sender, Sender::Bot);
        assert_eq!(state.messages()[0].text, WELCOME_TEXT);
        assert!(state.sidebar_visible());
        assert!(!state.tooltip_visible());
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_send_message_appends_user_message() {
        let mut state = ChatState::new();
        state.set_draft("  When is the exam?");

        let sent = state.send_message();
        assert_eq!(sent.as_deref(), Some("  When is the exam?"));
        assert_eq!(state.messages().len(), 2);
        let last = &state.messages()[1];
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "  When is the exam?");
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_draft_edits_do_not_touch_messages() {
        let mut state = ChatState::new();
        state.set_draft("hel");
        state.draft_mut().push_str("lo");
        assert_eq!(state.draft(), "hello");
        assert!(state.can_send());
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn test_send_blank_is_noop() {
        let mut state = ChatState::new();
        for blank in ["", " ", "\t\n", "   \r\n  "] {
            state.set_draft(blank);
            assert!(!state.can_send());
            assert_eq!(state.send_message(), None);
            assert_eq!(state.messages().len(), 1);
            assert_eq!(state.draft(), blank);
        }
    }

    #[test]
    fn test_message_ids_unique_under_rapid_sends() {
        let mut state = ChatState::new();
        for i in 0..50 {
            state.set_draft(format!("msg {}", i));
            state.send_message();
            state.push_bot_reply("ok".to_string());
        }
        let mut ids: Vec<_> = state.messages().iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), state.messages().len());
    }

    #[test]
    fn test_display_mode_transitions() {
        let mut state = ChatState::new();
        state.open();
        assert_eq!(state.display_mode(), DisplayMode::Docked);
        state.maximize();
        assert_eq!(state.display_mode(), DisplayMode::Fullscreen);
        state.minimize();
        assert_eq!(state.display_mode(), DisplayMode::Docked);
        state.close();
        assert_eq!(state.display_mode(), DisplayMode::Floating);

        state.set_display_mode(DisplayMode::Fullscreen);
        state.close();
        assert_eq!(state.display_mode(), DisplayMode::Floating);
    }

    #[test]
    fn test_toggle_sidebar_twice_is_identity() {
        let mut state = ChatState::new();
        let before = state.sidebar_visible();
        state.toggle_sidebar();
        assert_ne!(state.sidebar_visible(), before);
        state.toggle_sidebar();
        assert_eq!(state.sidebar_visible(), before);
    }

    #[test]
    fn test_tooltip_only_in_floating_mode() {
        let mut state = ChatState::new();
        state.set_tooltip_visible(true);
        assert!(state.tooltip_visible());

        state.open();
        assert!(!state.tooltip_visible());
        state.set_tooltip_visible(true);
        assert!(!state.tooltip_visible());
    }

    #[test]
    fn test_layout_selection() {
        let mut state = ChatState::new();
        assert_eq!(state.layout(false), ChatLayout::FloatingButton);
        assert_eq!(state.layout(true), ChatLayout::FloatingButton);

        state.open();
        assert_eq!(state.layout(false), ChatLayout::DockedCard);
        assert_eq!(state.layout(true), ChatLayout::DockedSheet);

        state.maximize();
        assert_eq!(state.layout(false), ChatLayout::Fullscreen);
        assert_eq!(state.layout(true), ChatLayout::Fullscreen);
    }

    #[test]
    fn test_sidebar_overlay_narrow_fullscreen_only() {
        let mut state = ChatState::new();
        state.maximize();
        assert!(state.shows_sidebar_overlay(true));
        assert!(!state.shows_sidebar_overlay(false));

        state.dismiss_sidebar();
        assert!(!state.sidebar_visible());
        assert!(!state.shows_sidebar_overlay(true));

        state.toggle_sidebar();
        state.minimize();
        assert!(!state.shows_sidebar_overlay(true));
    }
}
