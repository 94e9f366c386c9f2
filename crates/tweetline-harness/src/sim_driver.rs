//! Scripted driver for deterministic runs.
//!
//! Input comes from a queue of [`AppEvent`]s filled by the test. Renders are
//! recorded as view values instead of being drawn, so assertions look at what
//! the user would have seen.

use std::{collections::VecDeque, fmt, future::Future};

use tweetline_app::{
    App, AppAction, AppEvent, Driver, KeyInput, Screen,
    view::{self, TimelineView, UserView},
};
use tweetline_core::Report;

/// Error produced when a test asks the driver to fail.
#[derive(Debug, Clone, thiserror::Error)]
#[error("simulated driver failure: {0}")]
pub struct SimDriverError(pub String);

type QuitPredicate = Box<dyn Fn(&App) -> bool + Send>;

/// What the last render showed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Screen shown.
    pub screen: Screen,
    /// Timeline area.
    pub timeline: TimelineView,
    /// User list.
    pub users: Vec<UserView>,
    /// Status line.
    pub status: Option<Report>,
}

/// Driver that replays scripted input and records renders.
#[derive(Default)]
pub struct SimDriver {
    script: VecDeque<AppEvent>,
    frames: Vec<Frame>,
    quit_when: Option<QuitPredicate>,
    fail_render: Option<String>,
    stopped: bool,
}

impl fmt::Debug for SimDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimDriver")
            .field("script", &self.script.len())
            .field("frames", &self.frames.len())
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

impl SimDriver {
    /// Driver with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a typed line followed by Enter.
    #[must_use]
    pub fn type_line(mut self, line: &str) -> Self {
        self.script.extend(line.chars().map(|c| AppEvent::Key(KeyInput::Char(c))));
        self.script.push_back(AppEvent::Key(KeyInput::Enter));
        self
    }

    /// Queue a single key.
    #[must_use]
    pub fn press(mut self, key: KeyInput) -> Self {
        self.script.push_back(AppEvent::Key(key));
        self
    }

    /// Quit once the script is exhausted and `predicate` holds.
    ///
    /// Without a predicate the driver stays pending after the script, which
    /// leaves the run to completions and push events.
    #[must_use]
    pub fn quit_when(mut self, predicate: impl Fn(&App) -> bool + Send + 'static) -> Self {
        self.quit_when = Some(Box::new(predicate));
        self
    }

    /// Make the next render fail with `reason`.
    pub fn fail_next_render(&mut self, reason: impl Into<String>) {
        self.fail_render = Some(reason.into());
    }

    /// Every recorded render, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recent render.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Scripted events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Whether the runtime called [`Driver::stop`].
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send {
        async move {
            if let Some(event) = self.script.pop_front() {
                return Ok(app.handle(event));
            }
            if self.quit_when.as_ref().is_some_and(|done| done(app)) {
                return Ok(app.quit());
            }
            std::future::pending().await
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        if let Some(reason) = self.fail_render.take() {
            return Err(SimDriverError(reason));
        }
        self.frames.push(Frame {
            screen: app.screen(),
            timeline: view::timeline(app),
            users: view::users(app),
            status: app.status().cloned(),
        });
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
