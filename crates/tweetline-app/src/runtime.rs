//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: timeline synchronizer
//! - [`Driver`]: user input and rendering
//! - [`TweetApi`]: HTTP requests, each spawned as its own task
//! - [`PushChannel`]: realtime change notices
//! - [`Session`]: persisted token and theme
//!
//! All state lives on one task. Request tasks only perform I/O and send their
//! outcome back as an [`AppEvent`] over the completion channel; they are never
//! cancelled, and stale timeline responses are discarded by [`App`].

use std::{future::Future, sync::Arc};

use tokio::sync::mpsc;
use tweetline_client::TweetApi;
use tweetline_core::{ApiError, Operation, PushChannel, PushEvent, Session, SessionStore};

use crate::{App, AppAction, AppEvent, Driver};

/// Generic runtime that orchestrates App, Driver, API and push channel.
///
/// # Type Parameters
///
/// - `D`: Platform-specific input and rendering
/// - `A`: API client
/// - `P`: Push channel
/// - `S`: Session storage
pub struct Runtime<D, A, P, S>
where
    D: Driver,
    A: TweetApi,
    P: PushChannel,
    S: SessionStore,
{
    driver: D,
    app: App,
    api: Arc<A>,
    push: P,
    push_live: bool,
    session: Session<S>,
    completions_tx: mpsc::UnboundedSender<AppEvent>,
    completions_rx: mpsc::UnboundedReceiver<AppEvent>,
    in_flight: usize,
}

impl<D, A, P, S> Runtime<D, A, P, S>
where
    D: Driver,
    A: TweetApi,
    P: PushChannel,
    S: SessionStore,
{
    /// Create a runtime. The App starts with the persisted theme.
    pub fn new(driver: D, api: A, push: P, store: S) -> Self {
        let session = Session::new(store);
        let app = App::new(session.theme());
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            driver,
            app,
            api: Arc::new(api),
            push,
            push_live: false,
            session,
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    /// Run the main event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        let mut quit = self.start()?;
        while !quit {
            quit = self.step().await?;
        }

        self.push.close();
        self.driver.stop();
        Ok(())
    }

    /// Pick the first screen: the timeline if a token is stored, otherwise
    /// the login screen.
    ///
    /// Returns `true` if the application should quit.
    pub fn start(&mut self) -> Result<bool, D::Error> {
        let actions = match self.session.guard() {
            Ok(_) => self.app.start_timeline(),
            Err(err) => {
                tracing::info!(%err, "no stored session, showing login");
                self.app.require_login()
            },
        };
        self.process_actions(actions)
    }

    /// Wait for one completion, push event or user input and process it.
    ///
    /// Completions are preferred so results are applied before new input.
    /// Returns `true` if the application should quit.
    pub async fn step(&mut self) -> Result<bool, D::Error> {
        let actions = tokio::select! {
            biased;

            Some(event) = self.completions_rx.recv() => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.app.handle(event)
            }

            event = self.push.next_event(), if self.push_live => match event {
                Some(PushEvent::Notice) => self.app.handle(AppEvent::PushNotice),
                Some(PushEvent::State(state)) => self.app.handle(AppEvent::PushState(state)),
                None => {
                    self.push_live = false;
                    vec![]
                },
            },

            result = self.driver.poll_event(&mut self.app) => result?,
        };
        self.process_actions(actions)
    }

    /// Process completions until no request is in flight.
    ///
    /// Returns `true` if the application should quit.
    pub async fn settle(&mut self) -> Result<bool, D::Error> {
        while self.in_flight > 0 {
            let Some(event) = self.completions_rx.recv().await else {
                break;
            };
            self.in_flight = self.in_flight.saturating_sub(1);
            let actions = self.app.handle(event);
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Call an [`App`] operation and execute the actions it returns.
    ///
    /// Returns `true` if the application should quit.
    pub fn apply(&mut self, f: impl FnOnce(&mut App) -> Vec<AppAction>) -> Result<bool, D::Error> {
        let actions = f(&mut self.app);
        self.process_actions(actions)
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::Report(report) => report.emit(),
                AppAction::StoreToken(token) => {
                    if let Err(err) = self.session.set_token(&token) {
                        tracing::error!(%err, "failed to persist token");
                    }
                },
                AppAction::ClearSession => {
                    if let Err(err) = self.session.clear() {
                        tracing::error!(%err, "failed to clear session");
                    }
                },
                AppAction::StoreTheme(theme) => {
                    if let Err(err) = self.session.set_theme(theme) {
                        tracing::warn!(%err, "failed to persist theme");
                    }
                },
                AppAction::ConnectPush => {
                    self.push.connect();
                    self.push_live = true;
                },
                AppAction::ClosePush => self.push.close(),

                // Network operations run as their own tasks
                AppAction::FetchTimeline { .. }
                | AppAction::FetchUsers
                | AppAction::CreatePost { .. }
                | AppAction::EditPost { .. }
                | AppAction::DeletePost { .. }
                | AppAction::LikePost { .. }
                | AppAction::Login(_)
                | AppAction::Register(_) => self.dispatch(action),
            }
        }
        Ok(false)
    }

    /// Spawn the request for a network action.
    fn dispatch(&mut self, action: AppAction) {
        let api = Arc::clone(&self.api);
        let token = self.session.token();

        match action {
            AppAction::FetchTimeline { request, filter } => self.spawn(async move {
                match api.list_posts(&filter, token.as_ref()).await {
                    Ok(posts) => AppEvent::TimelineLoaded { request, posts },
                    Err(error) => AppEvent::TimelineFailed { request, error },
                }
            }),
            AppAction::FetchUsers => self.spawn(async move {
                match api.list_users(token.as_ref()).await {
                    Ok(users) => AppEvent::UsersLoaded { users },
                    Err(error) => AppEvent::UsersFailed { error },
                }
            }),
            AppAction::CreatePost { content } => self.spawn(async move {
                let result = api.create_post(&content, token.as_ref()).await.map(drop);
                mutation_outcome(Operation::Create, result)
            }),
            AppAction::EditPost { id, content } => self.spawn(async move {
                let result = api.update_post(id, &content, token.as_ref()).await.map(drop);
                mutation_outcome(Operation::Edit, result)
            }),
            AppAction::DeletePost { id } => self.spawn(async move {
                let result = api.delete_post(id, token.as_ref()).await;
                mutation_outcome(Operation::Delete, result)
            }),
            AppAction::LikePost { id } => self.spawn(async move {
                let result = api.like_post(id, token.as_ref()).await.map(drop);
                mutation_outcome(Operation::Like, result)
            }),
            AppAction::Login(request) => self.spawn(async move {
                match api.login(&request).await {
                    Ok(access) => AppEvent::LoggedIn { token: access.access_token },
                    Err(error) => AppEvent::LoginFailed { error },
                }
            }),
            AppAction::Register(request) => self.spawn(async move {
                match api.register(&request).await {
                    Ok(()) => AppEvent::Registered,
                    Err(error) => AppEvent::RegisterFailed { error },
                }
            }),
            other => tracing::warn!(?other, "not a network action"),
        }
    }

    fn spawn(&mut self, request: impl Future<Output = AppEvent> + Send + 'static) {
        let completions = self.completions_tx.clone();
        self.in_flight = self.in_flight.saturating_add(1);
        tokio::spawn(async move {
            // Receiver lives as long as the runtime; a failed send means it
            // is shutting down.
            let _ = completions.send(request.await);
        });
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a reference to the session
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Requests spawned but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

fn mutation_outcome(operation: Operation, result: Result<(), ApiError>) -> AppEvent {
    match result {
        Ok(()) => AppEvent::MutationSucceeded { operation },
        Err(error) => AppEvent::MutationFailed { operation, error },
    }
}
