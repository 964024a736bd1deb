/// Actions sent from the chat widget to the reply responder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponderAction {
    /// Schedule one delayed bot reply to the given user text
    Schedule { prompt: String },
    /// Cancel every pending reply and stop the responder
    Shutdown,
}

/// Events sent from the reply responder back to the chat widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A simulated bot reply is ready to be appended
    BotReply { text: String },
}
