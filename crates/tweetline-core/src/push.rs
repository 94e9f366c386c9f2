//! Realtime push channel lifecycle.
//!
//! The server pushes an opaque message whenever its state changes. The client
//! never inspects the payload; any message means "re-fetch". This module holds
//! the connection lifecycle as a pure state machine and the [`PushChannel`]
//! capability the application depends on.
//!
//! # State Machine
//!
//! ```text
//! ┌──────┐ start ┌────────────┐ opened ┌──────┐
//! │ Idle │──────>│ Connecting │───────>│ Open │──┐ message → Notify
//! └──────┘       └────────────┘        └──────┘<─┘
//!                   │      ↑               │
//!            failed │      │ retry_elapsed │ failed (drop)
//!                   ↓      │               │
//!                ┌─────────────┐<──────────┘
//!                │   Backoff   │── budget spent ──> Closed
//!                └─────────────┘
//!
//! close() from any state → Closed
//! ```

use std::{fmt, future::Future, time::Duration};

use crate::backoff::{Backoff, BackoffConfig};

/// Observable push channel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushState {
    /// Not started.
    Idle,
    /// Dial in progress.
    Connecting {
        /// Consecutive failures before this attempt.
        attempt: u32,
    },
    /// Receiving notices.
    Open,
    /// Waiting before the next dial.
    Backoff {
        /// Consecutive failures so far.
        attempt: u32,
        /// Delay until the next dial.
        retry_in: Duration,
    },
    /// Stopped; no further notices.
    Closed,
}

impl fmt::Display for PushState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("offline"),
            Self::Connecting { .. } => f.write_str("connecting"),
            Self::Open => f.write_str("live"),
            Self::Backoff { retry_in, .. } => {
                write!(f, "retrying in {:.1}s", retry_in.as_secs_f32())
            },
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// Actions the transport executes on behalf of [`PushConnection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushAction {
    /// Open the underlying connection.
    Dial,
    /// Tell the application that server state may have changed.
    Notify,
    /// Sleep, then call [`PushConnection::retry_elapsed`].
    Wait(Duration),
    /// State changed; surface it to the application.
    StateChanged(PushState),
}

/// Push connection state machine.
///
/// Pure: no sockets, no timers. The transport feeds it lifecycle inputs and
/// executes the returned [`PushAction`]s.
#[derive(Debug, Clone)]
pub struct PushConnection {
    state: PushState,
    backoff: Backoff,
}

impl PushConnection {
    /// Create an idle connection.
    pub fn new(config: BackoffConfig) -> Self {
        Self { state: PushState::Idle, backoff: Backoff::new(config) }
    }

    /// Current state.
    pub fn state(&self) -> PushState {
        self.state
    }

    /// Returns true once closed.
    pub fn is_closed(&self) -> bool {
        self.state == PushState::Closed
    }

    /// Begin dialing. Only valid from `Idle` or `Backoff`.
    pub fn start(&mut self) -> Vec<PushAction> {
        match self.state {
            PushState::Idle | PushState::Backoff { .. } => {
                self.transition(PushState::Connecting { attempt: self.backoff.attempt() });
                vec![PushAction::StateChanged(self.state), PushAction::Dial]
            },
            _ => vec![],
        }
    }

    /// The dial succeeded.
    pub fn opened(&mut self) -> Vec<PushAction> {
        if !matches!(self.state, PushState::Connecting { .. }) {
            return vec![];
        }
        self.backoff.reset();
        self.transition(PushState::Open);
        vec![PushAction::StateChanged(self.state)]
    }

    /// A message arrived. Its content is irrelevant.
    pub fn message(&self) -> Vec<PushAction> {
        if self.state == PushState::Open { vec![PushAction::Notify] } else { vec![] }
    }

    /// The dial failed or an open connection dropped.
    pub fn failed(&mut self, reason: &str) -> Vec<PushAction> {
        if !matches!(self.state, PushState::Connecting { .. } | PushState::Open) {
            return vec![];
        }

        if let Some(retry_in) = self.backoff.next_delay() {
            tracing::warn!(%reason, ?retry_in, "push channel lost, scheduling reconnect");
            self.transition(PushState::Backoff { attempt: self.backoff.attempt(), retry_in });
            vec![PushAction::StateChanged(self.state), PushAction::Wait(retry_in)]
        } else {
            tracing::error!(%reason, "push channel reconnect budget exhausted");
            self.transition(PushState::Closed);
            vec![PushAction::StateChanged(self.state)]
        }
    }

    /// The backoff delay elapsed.
    pub fn retry_elapsed(&mut self) -> Vec<PushAction> {
        if matches!(self.state, PushState::Backoff { .. }) { self.start() } else { vec![] }
    }

    /// Stop for good.
    pub fn close(&mut self) -> Vec<PushAction> {
        if self.is_closed() {
            return vec![];
        }
        self.transition(PushState::Closed);
        vec![PushAction::StateChanged(self.state)]
    }

    fn transition(&mut self, next: PushState) {
        tracing::debug!(from = ?self.state, to = ?next, "push state");
        self.state = next;
    }
}

/// Events a [`PushChannel`] delivers to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEvent {
    /// Server state may have changed.
    Notice,
    /// Connection state changed.
    State(PushState),
}

/// Realtime notification capability.
///
/// The application depends on this trait, not on a concrete socket, so the
/// terminal client and the simulation harness share one runtime.
pub trait PushChannel: Send {
    /// Start (or restart) the channel. Idempotent while running.
    fn connect(&mut self);

    /// Next event. Pending while nothing happens; `None` once the channel is
    /// closed and drained.
    fn next_event(&mut self) -> impl Future<Output = Option<PushEvent>> + Send;

    /// Stop the channel and any pending reconnect.
    fn close(&mut self);
}
