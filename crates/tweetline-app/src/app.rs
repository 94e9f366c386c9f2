//! Application state machine.
//!
//! This module defines the [`App`] state machine, which keeps the displayed
//! timeline in sync with the server, completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Issues timeline fetches and applies only the newest response.
//! - Tracks the author filter, the author list and the push channel state.
//! - Validates mutations and auth input before anything is sent.
//! - Turns every failure into a [`Report`] with the shared severity policy.
//!
//! The displayed snapshot is never patched locally: after any successful
//! mutation or push notice the whole timeline is fetched again.

use tweetline_client::validate;
use tweetline_core::{ApiError, Operation, PushState, Report, Severity, Theme};
use tweetline_proto::{Filter, LoginRequest, Post, PostId, RegisterRequest, Token};

use crate::{
    AppAction, AppEvent, Command, InputState, KeyInput, RequestSequence, Screen, TimelineStatus,
    command,
};

/// Shown after a successful registration.
pub const REGISTERED: &str = "Registration successful! Please login.";

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    screen: Screen,
    filter: Filter,
    requests: RequestSequence,
    /// Latest applied snapshot, newest first.
    posts: Vec<Post>,
    timeline: TimelineStatus,
    users: Vec<String>,
    push: PushState,
    theme: Theme,
    /// Message shown to the user. `None` if nothing to show.
    status: Option<Report>,
    input: InputState,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create an App on the login screen with the persisted theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            screen: Screen::Login,
            filter: Filter::All,
            requests: RequestSequence::new(),
            posts: Vec::new(),
            timeline: TimelineStatus::Loading,
            users: Vec::new(),
            push: PushState::Idle,
            theme,
            status: None,
            input: InputState::new(),
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::TimelineLoaded { request, posts } => {
                if !self.requests.is_current(request) {
                    tracing::debug!(%request, "discarding stale timeline response");
                    return vec![];
                }
                self.posts = posts.into_iter().rev().collect();
                self.timeline = TimelineStatus::Ready;
                vec![AppAction::Render]
            },
            AppEvent::TimelineFailed { request, error } => {
                if !self.requests.is_current(request) {
                    tracing::debug!(%request, %error, "discarding stale timeline failure");
                    return vec![];
                }
                self.timeline_failed(&error)
            },
            AppEvent::UsersLoaded { users } => {
                if self.screen != Screen::Timeline {
                    tracing::debug!(count = users.len(), "discarding users loaded after logout");
                    return vec![];
                }
                self.users = users;
                vec![AppAction::Render]
            },
            AppEvent::UsersFailed { error } => {
                if self.screen != Screen::Timeline {
                    tracing::debug!(%error, "discarding users failure after logout");
                    return vec![];
                }
                self.surface(Report::failure(Operation::Users, &error))
            },
            AppEvent::MutationSucceeded { operation } => {
                if self.screen != Screen::Timeline {
                    return vec![];
                }
                let mut actions = self.refresh();
                if matches!(operation, Operation::Create | Operation::Delete) {
                    actions.push(AppAction::FetchUsers);
                }
                actions.push(AppAction::Render);
                actions
            },
            AppEvent::MutationFailed { operation, error } => {
                if self.screen != Screen::Timeline {
                    tracing::debug!(?operation, %error, "discarding mutation failure after logout");
                    return vec![];
                }
                self.surface(Report::failure(operation, &error))
            },
            AppEvent::LoggedIn { token } => {
                if self.screen != Screen::Login {
                    return vec![];
                }
                self.status = None;
                let mut actions = vec![AppAction::StoreToken(token)];
                actions.extend(self.start_timeline());
                actions
            },
            AppEvent::LoginFailed { error } => self.surface(Report::failure(Operation::Login, &error)),
            AppEvent::Registered => {
                self.status = Some(Report::info(REGISTERED));
                vec![AppAction::Render]
            },
            AppEvent::RegisterFailed { error } => {
                self.surface(Report::failure(Operation::Register, &error))
            },
            AppEvent::PushNotice => self.refresh(),
            AppEvent::PushState(state) => {
                self.push = state;
                vec![AppAction::Render]
            },
        }
    }

    /// Show the timeline: start the push channel and load users and posts.
    pub fn start_timeline(&mut self) -> Vec<AppAction> {
        self.screen = Screen::Timeline;
        self.posts.clear();
        self.timeline = TimelineStatus::Loading;

        let mut actions = vec![AppAction::ConnectPush, AppAction::FetchUsers];
        actions.extend(self.refresh());
        actions.push(AppAction::Render);
        actions
    }

    /// Show the login screen because no token is stored.
    pub fn require_login(&mut self) -> Vec<AppAction> {
        self.screen = Screen::Login;
        vec![AppAction::Render]
    }

    /// Fetch the timeline for the current filter, superseding any fetch in
    /// flight. Does nothing outside the timeline screen.
    pub fn refresh(&mut self) -> Vec<AppAction> {
        if self.screen != Screen::Timeline {
            return vec![];
        }
        let request = self.requests.issue();
        vec![AppAction::FetchTimeline { request, filter: self.filter.clone() }]
    }

    /// Filter by author. Blank input shows everyone.
    pub fn set_filter(&mut self, input: &str) -> Vec<AppAction> {
        if self.screen != Screen::Timeline {
            return vec![];
        }
        self.filter = Filter::from_input(input);
        self.posts.clear();
        self.timeline = TimelineStatus::Loading;

        let mut actions = self.refresh();
        actions.push(AppAction::Render);
        actions
    }

    /// Cycle the filter: all → each known author in order → all.
    pub fn select_next_author(&mut self) -> Vec<AppAction> {
        let next = match self.filter.author() {
            None => self.users.first(),
            Some(current) => {
                let position = self.users.iter().position(|u| u == current);
                position.and_then(|i| self.users.get(i.saturating_add(1)))
            },
        };
        let next = next.cloned().unwrap_or_default();
        self.set_filter(&next)
    }

    /// Create a post.
    pub fn create_post(&mut self, content: String) -> Vec<AppAction> {
        self.mutate(Operation::Create, validate::content(&content), || AppAction::CreatePost {
            content,
        })
    }

    /// Replace a post's content.
    pub fn edit_post(&mut self, id: PostId, content: String) -> Vec<AppAction> {
        self.mutate(Operation::Edit, validate::content(&content), || AppAction::EditPost {
            id,
            content,
        })
    }

    /// Delete a post.
    pub fn delete_post(&mut self, id: PostId) -> Vec<AppAction> {
        self.mutate(Operation::Delete, Ok(()), || AppAction::DeletePost { id })
    }

    /// Like a post.
    pub fn like_post(&mut self, id: PostId) -> Vec<AppAction> {
        self.mutate(Operation::Like, Ok(()), || AppAction::LikePost { id })
    }

    /// Log in with `username` and `password`.
    pub fn login(&mut self, username: String, password: String) -> Vec<AppAction> {
        if self.screen != Screen::Login {
            return vec![];
        }
        let request = LoginRequest { username, password };
        if let Err(error) = validate::login(&request) {
            return self.reject(Operation::Login, error);
        }
        self.status = Some(Report::info("Logging in..."));
        vec![AppAction::Login(request), AppAction::Render]
    }

    /// Register a new account.
    pub fn register(&mut self, username: String, email: String, password: String) -> Vec<AppAction> {
        if self.screen != Screen::Login {
            return vec![];
        }
        let request = RegisterRequest { username, email, password };
        if let Err(error) = validate::register(&request) {
            return self.reject(Operation::Register, error);
        }
        self.status = Some(Report::info("Registering..."));
        vec![AppAction::Register(request), AppAction::Render]
    }

    /// Forget the session and return to the login screen.
    ///
    /// Outstanding timeline fetches are superseded so late responses are
    /// dropped.
    pub fn logout(&mut self) -> Vec<AppAction> {
        self.screen = Screen::Login;
        self.requests.invalidate();
        self.filter = Filter::All;
        self.posts.clear();
        self.users.clear();
        self.timeline = TimelineStatus::Loading;
        self.theme = Theme::default();
        self.status = Some(Report::info("Logged out"));
        vec![AppAction::ClosePush, AppAction::ClearSession, AppAction::Render]
    }

    /// Switch between light and dark.
    pub fn toggle_theme(&mut self) -> Vec<AppAction> {
        self.theme = self.theme.toggled();
        vec![AppAction::StoreTheme(self.theme), AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Set an informational status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(Report::info(message));
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if self.status.as_ref().is_some_and(|r| r.severity == Severity::Alert) {
            self.status = None;
        }

        if self.input.edit(key) {
            return vec![AppAction::Render];
        }

        match key {
            KeyInput::Enter => {
                let line = self.input.take();
                if line.is_empty() {
                    return vec![AppAction::Render];
                }
                self.execute(command::parse(&line))
            },
            KeyInput::Tab => self.select_next_author(),
            KeyInput::Esc => self.quit(),
            _ => vec![AppAction::Render],
        }
    }

    fn execute(&mut self, command: Command) -> Vec<AppAction> {
        match command {
            Command::Login { username, password } => self.login(username, password),
            Command::Register { username, email, password } => {
                self.register(username, email, password)
            },
            Command::Quit => self.quit(),
            Command::ToggleTheme => self.toggle_theme(),
            Command::Unknown { input } => {
                self.set_status(format!("Unknown command: /{input}"));
                vec![AppAction::Render]
            },
            Command::InvalidArgs { command, error } => {
                self.set_status(format!("/{command}: {error}"));
                vec![AppAction::Render]
            },
            _ if self.screen != Screen::Timeline => {
                self.set_status("Log in first: /login <username> <password>");
                vec![AppAction::Render]
            },
            Command::Filter { author } => self.set_filter(&author),
            Command::Refresh => {
                let mut actions = self.refresh();
                actions.extend([AppAction::FetchUsers, AppAction::Render]);
                actions
            },
            Command::Like { id } => self.like_post(id),
            Command::Edit { id, content } => self.edit_post(id, content),
            Command::Delete { id } => self.delete_post(id),
            Command::Logout => self.logout(),
            Command::Post { content } => self.create_post(content),
        }
    }

    fn mutate(
        &mut self,
        operation: Operation,
        check: Result<(), ApiError>,
        action: impl FnOnce() -> AppAction,
    ) -> Vec<AppAction> {
        if self.screen != Screen::Timeline {
            return vec![];
        }
        if let Err(error) = check {
            return self.reject(operation, error);
        }
        vec![action(), AppAction::Render]
    }

    fn timeline_failed(&mut self, error: &ApiError) -> Vec<AppAction> {
        if let (true, Some(author)) = (error.is_not_found(), self.filter.author()) {
            self.posts.clear();
            self.timeline = TimelineStatus::NotFound { author: author.to_string() };
        } else if self.timeline == TimelineStatus::Loading {
            self.timeline = TimelineStatus::Unavailable;
        }
        self.surface(Report::failure(Operation::Timeline, error))
    }

    fn reject(&mut self, operation: Operation, error: ApiError) -> Vec<AppAction> {
        let report = match error {
            ApiError::Validation(message) => Report::rejected(operation, message),
            other => Report::failure(operation, &other),
        };
        self.surface(report)
    }

    fn surface(&mut self, report: Report) -> Vec<AppAction> {
        if report.severity != Severity::Log {
            self.status = Some(report.clone());
        }
        vec![AppAction::Report(report), AppAction::Render]
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current author filter.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Latest applied snapshot, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// What the timeline area reflects.
    pub fn timeline_status(&self) -> &TimelineStatus {
        &self.timeline
    }

    /// Known authors in server order.
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Push channel state.
    pub fn push_state(&self) -> PushState {
        self.push
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Message for the user. `None` if nothing to show.
    pub fn status(&self) -> Option<&Report> {
        self.status.as_ref()
    }

    /// Line being edited.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
