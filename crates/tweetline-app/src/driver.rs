//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from the terminal.
//! Each frontend implements the trait to provide input and rendering, while
//! the generic [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{App, AppAction};

/// Abstracts user-facing I/O for the application runtime.
///
/// Network access is not part of the driver: the runtime owns the
/// [`TweetApi`](tweetline_client::TweetApi) and the
/// [`PushChannel`](tweetline_core::PushChannel) directly.
///
/// # Implementations
///
/// - **TUI**: crossterm for keyboard events, ratatui for rendering
/// - **Simulation**: scripted input, recorded renders
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next user input and apply it to `app`.
    ///
    /// Returns the resulting actions. Stays pending while there is no input.
    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release resources before exit.
    fn stop(&mut self);
}
