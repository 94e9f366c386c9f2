//! Push channel fed by [`SimServer`](crate::SimServer) broadcasts.
//!
//! Lifecycle events are queued locally so a test observes the same sequence a
//! socket produces on a clean connect: `Connecting { attempt: 0 }`, then
//! `Open`. Notices broadcast while the channel is not connected are dropped.

use std::{collections::VecDeque, future::Future};

use tokio::sync::mpsc;
use tweetline_core::{PushChannel, PushEvent, PushState};

/// Simulated push channel.
#[derive(Debug)]
pub struct SimPush {
    notices: mpsc::UnboundedReceiver<PushEvent>,
    pending: VecDeque<PushEvent>,
    connected: bool,
    connects: usize,
}

impl SimPush {
    pub(crate) fn new(notices: mpsc::UnboundedReceiver<PushEvent>) -> Self {
        Self { notices, pending: VecDeque::new(), connected: false, connects: 0 }
    }

    /// Whether the channel is currently connected.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Number of `connect` calls that opened the channel.
    pub fn connects(&self) -> usize {
        self.connects
    }
}

impl PushChannel for SimPush {
    fn connect(&mut self) {
        if self.connected {
            return;
        }
        // Anything broadcast while disconnected is stale.
        while self.notices.try_recv().is_ok() {}

        self.connected = true;
        self.connects = self.connects.saturating_add(1);
        self.pending.push_back(PushEvent::State(PushState::Connecting { attempt: 0 }));
        self.pending.push_back(PushEvent::State(PushState::Open));
    }

    fn next_event(&mut self) -> impl Future<Output = Option<PushEvent>> + Send {
        async move {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if !self.connected {
                return None;
            }
            self.notices.recv().await
        }
    }

    fn close(&mut self) {
        if !self.connected {
            return;
        }
        self.connected = false;
        self.pending.clear();
        self.pending.push_back(PushEvent::State(PushState::Closed));
    }
}
