//! Termination signals as quit requests
//!
//! SIGINT/SIGTERM (Ctrl+C on Windows) are turned into [`Message::Quit`] so the
//! event loop leaves through the same path as the `q` key and the terminal
//! is restored before the process exits. Unsaved form edits are not committed.

use std::future::Future;

use tokio::sync::mpsc;

use crate::message::Message;
use profile_core::prelude::*;

/// Receiving end of the signal listener, drained by the event loop.
#[derive(Debug)]
pub struct ShutdownListener {
    rx: mpsc::Receiver<Message>,
}

impl ShutdownListener {
    /// Quit request delivered since the last call, if any.
    pub fn try_next(&mut self) -> Option<Message> {
        self.rx.try_recv().ok()
    }
}

/// Start listening for termination signals on the current tokio runtime.
pub fn spawn_signal_handler() -> ShutdownListener {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(forward_shutdown(wait_for_signal(), tx));
    ShutdownListener { rx }
}

/// Wait for `signal`, then ask the event loop to quit.
async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<()>>,
{
    if let Err(e) = signal.await {
        error!("Signal listener stopped: {}", e);
        return;
    }

    info!("Termination signal received, leaving the profile page");
    if tx.send(Message::Quit).await.is_err() {
        debug!("Event loop already finished, quit request dropped");
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("cannot listen for SIGINT: {}", e)))?;
    let mut terminate = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("cannot listen for SIGTERM: {}", e)))?;

    tokio::select! {
        _ = interrupt.recv() => debug!("SIGINT"),
        _ = terminate.recv() => debug!("SIGTERM"),
    }
    Ok(())
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
    debug!("Ctrl+C");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_sends_quit() {
        let (tx, mut rx) = mpsc::channel(1);

        forward_shutdown(async { Ok(()) }, tx).await;

        assert_eq!(rx.recv().await, Some(Message::Quit));
        // Sender dropped after the single request
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_listener_error_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);

        forward_shutdown(async { Err(Error::terminal("no signal support")) }, tx).await;

        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_closed_event_loop_is_tolerated() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must return quietly
        forward_shutdown(async { Ok(()) }, tx).await;
    }

    #[tokio::test]
    async fn test_listener_drains_quit_once() {
        let (tx, rx) = mpsc::channel(1);
        let mut listener = ShutdownListener { rx };
        assert_eq!(listener.try_next(), None);

        forward_shutdown(async { Ok(()) }, tx).await;

        assert_eq!(listener.try_next(), Some(Message::Quit));
        assert_eq!(listener.try_next(), None);
    }
}
