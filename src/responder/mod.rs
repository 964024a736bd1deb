/// Simulated bot responder
///
/// Runs next to the UI thread and turns every scheduled user message into one
/// delayed bot reply:
/// - `main_loop`: runtime setup, action polling and cancellable reply tasks
mod main_loop;

pub use main_loop::{deliver_reply, run_responder, DEFAULT_REPLY_DELAY};

/// Bot reply text for a given user message.
pub fn reply_text(prompt: &str) -> String {
    format!(
        "Thank you for your message: \"{}\". I'm here to help with any SLCM related queries!",
        prompt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_embeds_prompt_verbatim() {
        assert_eq!(
            reply_text("When is the exam?"),
            "Thank you for your message: \"When is the exam?\". I'm here to help with any SLCM related queries!"
        );
        assert!(reply_text("  spaced  ").contains("\"  spaced  \""));
    }
}
