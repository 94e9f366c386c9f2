//! Push channel over tokio-tungstenite.
//!
//! A background task runs [`PushConnection`] against a real socket: it dials,
//! turns every inbound message into [`PushEvent::Notice`], and on drop or
//! failure sleeps for the backoff delay before dialing again. The client never
//! sends on the socket.

use std::collections::VecDeque;

use futures_util::StreamExt;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tweetline_core::{BackoffConfig, PushAction, PushChannel, PushConnection, PushEvent, PushState};

use crate::ClientConfig;

type EventTx = mpsc::UnboundedSender<PushEvent>;

/// WebSocket implementation of [`PushChannel`].
///
/// Must be used inside a tokio runtime; [`PushChannel::connect`] spawns the
/// connection task.
#[derive(Debug)]
pub struct WsPushChannel {
    url: String,
    backoff: BackoffConfig,
    events_tx: Option<EventTx>,
    events_rx: mpsc::UnboundedReceiver<PushEvent>,
    task: Option<JoinHandle<()>>,
}

impl WsPushChannel {
    /// Channel for the push URL in `config`. Nothing is dialed until
    /// [`PushChannel::connect`].
    pub fn new(config: &ClientConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            url: config.push_url.clone(),
            backoff: config.backoff.clone(),
            events_tx: Some(events_tx),
            events_rx,
            task: None,
        }
    }

    /// URL being dialed.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl PushChannel for WsPushChannel {
    fn connect(&mut self) {
        if self.is_running() {
            return;
        }

        let events = match &self.events_tx {
            Some(tx) => tx.clone(),
            None => {
                let (tx, rx) = mpsc::unbounded_channel();
                self.events_rx = rx;
                self.events_tx = Some(tx.clone());
                tx
            },
        };

        tracing::info!(url = %self.url, "starting push channel");
        self.task = Some(tokio::spawn(run_channel(self.url.clone(), self.backoff.clone(), events)));
    }

    async fn next_event(&mut self) -> Option<PushEvent> {
        self.events_rx.recv().await
    }

    fn close(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if let Some(tx) = self.events_tx.take() {
            let _ = tx.send(PushEvent::State(PushState::Closed));
        }
        tracing::info!(url = %self.url, "push channel closed");
    }
}

impl Drop for WsPushChannel {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_channel(url: String, config: BackoffConfig, events: EventTx) {
    let mut connection = PushConnection::new(config);
    let mut pending: VecDeque<PushAction> = connection.start().into();

    while let Some(action) = pending.pop_front() {
        let next = match action {
            PushAction::Dial => dial(&url, &mut connection, &events).await,
            PushAction::Wait(delay) => {
                tokio::time::sleep(delay).await;
                connection.retry_elapsed()
            },
            PushAction::Notify | PushAction::StateChanged(_) => {
                publish(&events, action);
                Vec::new()
            },
        };
        pending.extend(next);
    }
}

/// Dial once and listen until the connection ends. Returns the follow-up
/// actions (a scheduled retry, or nothing once the budget is spent).
async fn dial(url: &str, connection: &mut PushConnection, events: &EventTx) -> Vec<PushAction> {
    let mut stream = match connect_async(url).await {
        Ok((stream, _)) => stream,
        Err(err) => return connection.failed(&err.to_string()),
    };

    connection.opened().into_iter().for_each(|action| publish(events, action));

    let reason = loop {
        match stream.next().await {
            Some(Ok(Message::Text(_) | Message::Binary(_))) => {
                connection.message().into_iter().for_each(|action| publish(events, action));
            },
            Some(Ok(Message::Close(_))) | None => break "closed by server".to_string(),
            Some(Ok(_)) => {},
            Some(Err(err)) => break err.to_string(),
        }
    };

    connection.failed(&reason)
}

fn publish(events: &EventTx, action: PushAction) {
    let event = match action {
        PushAction::Notify => PushEvent::Notice,
        PushAction::StateChanged(state) => PushEvent::State(state),
        PushAction::Dial | PushAction::Wait(_) => return,
    };
    // Receiver gone means the channel owner was dropped; the task is aborted
    // with it.
    let _ = events.send(event);
}
