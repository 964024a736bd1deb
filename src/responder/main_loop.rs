//! Responder event loop with cancellable delayed replies.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

use super::reply_text;
use crate::protocol::{ResponderAction, WidgetEvent};

/// Delay before the simulated bot answers.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// How often the loop checks for actions when idle.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run the responder event loop on a tokio runtime.
///
/// Returns once a `Shutdown` action arrives or the widget side of the action
/// channel is dropped. Replies still waiting for their delay at that point are
/// cancelled and never sent.
pub fn run_responder(
    action_rx: Receiver<ResponderAction>,
    event_tx: Sender<WidgetEvent>,
    reply_delay: Duration,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to create Tokio runtime, bot replies disabled");
            return;
        }
    };

    rt.block_on(async move {
        let shutdown = CancellationToken::new();
        let tracker = TaskTracker::new();
        info!(delay_ms = reply_delay.as_millis() as u64, "chat responder started");

        'outer: loop {
            // Drain everything queued since the last tick
            loop {
                match action_rx.try_recv() {
                    Ok(ResponderAction::Schedule { prompt }) => {
                        tracker.spawn(deliver_reply(
                            shutdown.child_token(),
                            reply_delay,
                            prompt,
                            event_tx.clone(),
                        ));
                    }
                    Ok(ResponderAction::Shutdown) => break 'outer,
                    Err(TryRecvError::Disconnected) => {
                        debug!("chat widget dropped its action channel");
                        break 'outer;
                    }
                    Err(TryRecvError::Empty) => break,
                }
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }

        shutdown.cancel();
        tracker.close();
        tracker.wait().await;
        info!("chat responder stopped");
    });
}

/// Wait `delay`, then send the reply for `prompt`, unless `token` is
/// cancelled first.
pub async fn deliver_reply(
    token: CancellationToken,
    delay: Duration,
    prompt: String,
    event_tx: Sender<WidgetEvent>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            debug!("pending bot reply cancelled");
        }
        _ = tokio::time::sleep(delay) => {
            let event = WidgetEvent::BotReply { text: reply_text(&prompt) };
            if event_tx.send(event).is_err() {
                debug!("bot reply dropped, widget is gone");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[tokio::test(start_paused = true)]
    async fn test_deliver_reply_waits_full_delay() {
        let (event_tx, event_rx) = unbounded::<WidgetEvent>();
        let start = tokio::time::Instant::now();

        deliver_reply(
            CancellationToken::new(),
            DEFAULT_REPLY_DELAY,
            "When is the exam?".to_string(),
            event_tx,
        )
        .await;

        assert!(start.elapsed() >= DEFAULT_REPLY_DELAY);
        match event_rx.try_recv() {
            Ok(WidgetEvent::BotReply { text }) => assert!(text.contains("When is the exam?")),
            other => panic!("expected a bot reply, got {:?}", other),
        }
        assert!(event_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_reply_cancelled_sends_nothing() {
        let (event_tx, event_rx) = unbounded::<WidgetEvent>();
        let token = CancellationToken::new();
        token.cancel();

        deliver_reply(token, DEFAULT_REPLY_DELAY, "hello".to_string(), event_tx).await;

        assert!(event_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_reply_cancelled_mid_delay() {
        let (event_tx, event_rx) = unbounded::<WidgetEvent>();
        let token = CancellationToken::new();
        let task = tokio::spawn(deliver_reply(
            token.clone(),
            DEFAULT_REPLY_DELAY,
            "hello".to_string(),
            event_tx,
        ));

        tokio::time::sleep(Duration::from_millis(500)).await;
        token.cancel();
        task.await.expect("reply task panicked");

        assert!(event_rx.try_recv().is_err());
    }
}
