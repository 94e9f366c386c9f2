//! In-memory tweet service.
//!
//! `SimServer` implements [`TweetApi`] directly, so the runtime talks to it
//! exactly as it talks to the HTTP client. State is shared behind an
//! `Arc<Mutex<_>>`; clones are handles to the same server, which lets a test
//! keep one while the runtime owns another.
//!
//! Beyond the service behaviour it records every request, can go offline, and
//! can hold a listing response until the test releases it.

use std::{
    collections::{HashMap, VecDeque},
    future::{Future, ready},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tokio::sync::{mpsc, oneshot};
use tweetline_client::{Endpoint, TweetApi};
use tweetline_core::{ApiError, PushEvent};
use tweetline_proto::{AccessToken, Filter, LoginRequest, Post, PostId, RegisterRequest, Token};

use crate::SimPush;

/// Error text for unknown post ids.
pub const TWEET_NOT_FOUND: &str = "Tweet not found";

/// Error text for an author without posts.
pub const USER_NOT_FOUND: &str = "User not found";

/// Error text for bad credentials.
pub const BAD_CREDENTIALS: &str = "Incorrect username or password";

/// Error text for requests without a valid token.
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Error text for a taken username.
pub const USERNAME_TAKEN: &str = "Username already registered";

/// A request as the server saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Which capability was called.
    pub endpoint: Endpoint,
    /// Bearer token received, if any.
    pub bearer: Option<Token>,
}

/// Handle for a held listing response.
#[derive(Debug)]
pub struct Release(oneshot::Sender<()>);

impl Release {
    /// Let the held response complete.
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

#[derive(Debug)]
struct Account {
    password: String,
}

#[derive(Debug, Default)]
struct ServerState {
    posts: Vec<Post>,
    next_id: u64,
    accounts: HashMap<String, Account>,
    /// Issued token → username.
    sessions: HashMap<String, String>,
    held_listings: VecDeque<oneshot::Receiver<()>>,
    requests: Vec<RecordedRequest>,
    subscribers: Vec<mpsc::UnboundedSender<PushEvent>>,
    offline: bool,
}

impl ServerState {
    fn record(&mut self, endpoint: Endpoint, token: Option<&Token>) -> Result<(), ApiError> {
        let bearer = token.filter(|_| endpoint.sends_token()).cloned();
        tracing::debug!(?endpoint, authenticated = bearer.is_some(), offline = self.offline, "request");
        self.requests.push(RecordedRequest { endpoint, bearer });
        if self.offline {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    fn author(&self, token: Option<&Token>) -> Result<String, ApiError> {
        token
            .and_then(|t| self.sessions.get(t.as_str()))
            .cloned()
            .ok_or_else(|| http(401, NOT_AUTHENTICATED))
    }

    fn issue(&mut self, username: &str) -> Token {
        let token = format!("sim-token-{}", self.sessions.len().saturating_add(1));
        self.sessions.insert(token.clone(), username.to_string());
        Token::new(token)
    }

    fn insert(&mut self, user: &str, content: &str) -> Post {
        self.next_id = self.next_id.saturating_add(1);
        let post = Post::new(self.next_id, user, content);
        self.posts.push(post.clone());
        post
    }

    fn post_mut(&mut self, id: PostId) -> Result<&mut Post, ApiError> {
        self.posts.iter_mut().find(|p| p.id == id).ok_or_else(|| http(404, TWEET_NOT_FOUND))
    }

    fn list(&self, filter: &Filter) -> Result<Vec<Post>, ApiError> {
        match filter {
            Filter::All => Ok(self.posts.clone()),
            Filter::Author(name) => {
                let posts: Vec<_> = self.posts.iter().filter(|p| &p.user == name).cloned().collect();
                if posts.is_empty() { Err(http(404, USER_NOT_FOUND)) } else { Ok(posts) }
            },
        }
    }

    fn users(&self) -> Vec<String> {
        let mut users: Vec<String> = Vec::new();
        for post in &self.posts {
            if !users.contains(&post.user) {
                users.push(post.user.clone());
            }
        }
        users
    }

    fn broadcast(&mut self) {
        self.subscribers.retain(|tx| tx.send(PushEvent::Notice).is_ok());
    }
}

fn http(status: u16, message: &str) -> ApiError {
    ApiError::Http { status, message: message.to_string() }
}

/// In-memory tweet service.
#[derive(Debug, Clone, Default)]
pub struct SimServer {
    state: Arc<Mutex<ServerState>>,
}

impl SimServer {
    /// Empty server with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ServerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an account.
    #[must_use]
    pub fn with_account(self, username: &str, password: &str) -> Self {
        self.lock()
            .accounts
            .insert(username.to_string(), Account { password: password.to_string() });
        self
    }

    /// Issue a token for an existing or new account without a login request.
    pub fn issue_token(&self, username: &str) -> Token {
        self.lock().issue(username)
    }

    /// Insert a post directly, without a request or a push notice.
    pub fn seed_post(&self, user: &str, content: &str) -> PostId {
        self.lock().insert(user, content).id
    }

    /// Send a push notice to every connected channel.
    pub fn notify_all(&self) {
        self.lock().broadcast();
    }

    /// A new push channel subscribed to this server's notices.
    pub fn push_channel(&self) -> SimPush {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().subscribers.push(tx);
        SimPush::new(rx)
    }

    /// Hold the next listing response until the returned handle is released.
    ///
    /// The response content is taken when the request arrives, not when it is
    /// released.
    pub fn hold_next_listing(&self) -> Release {
        let (tx, rx) = oneshot::channel();
        self.lock().held_listings.push_back(rx);
        Release(tx)
    }

    /// Fail every request with a network error while `offline` is set.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Posts in server order.
    pub fn posts(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    /// Server-side answer for `filter`, used as a test oracle.
    pub fn expected_listing(&self, filter: &Filter) -> Vec<Post> {
        self.lock().list(filter).unwrap_or_default()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Number of connected push channels.
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.iter().filter(|tx| !tx.is_closed()).count()
    }
}

impl TweetApi for SimServer {
    fn list_posts(
        &self,
        filter: &Filter,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Vec<Post>, ApiError>> + Send {
        let (result, held) = {
            let mut state = self.lock();
            let endpoint = match filter {
                Filter::All => Endpoint::ListAll,
                Filter::Author(name) => Endpoint::ListByUser(name.clone()),
            };
            let result = state.record(endpoint, token).and_then(|()| state.list(filter));
            (result, state.held_listings.pop_front())
        };

        async move {
            if let Some(held) = held {
                let _ = held.await;
            }
            result
        }
    }

    fn create_post(
        &self,
        content: &str,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Post, ApiError>> + Send {
        let mut state = self.lock();
        let result = state.record(Endpoint::Create, token).and_then(|()| {
            let author = state.author(token)?;
            let post = state.insert(&author, content);
            state.broadcast();
            Ok(post)
        });
        ready(result)
    }

    fn update_post(
        &self,
        id: PostId,
        content: &str,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Post, ApiError>> + Send {
        let mut state = self.lock();
        let result = state.record(Endpoint::Update(id), token).and_then(|()| {
            let post = state.post_mut(id)?;
            post.content = content.to_string();
            let post = post.clone();
            state.broadcast();
            Ok(post)
        });
        ready(result)
    }

    fn delete_post(
        &self,
        id: PostId,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let mut state = self.lock();
        let result = state.record(Endpoint::Delete(id), token).and_then(|()| {
            let index = state
                .posts
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| http(404, TWEET_NOT_FOUND))?;
            state.posts.remove(index);
            state.broadcast();
            Ok(())
        });
        ready(result)
    }

    fn like_post(
        &self,
        id: PostId,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Post, ApiError>> + Send {
        let mut state = self.lock();
        let result = state.record(Endpoint::Like(id), token).and_then(|()| {
            let post = state.post_mut(id)?;
            post.likes = post.likes.saturating_add(1);
            let post = post.clone();
            state.broadcast();
            Ok(post)
        });
        ready(result)
    }

    fn list_users(
        &self,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send {
        let mut state = self.lock();
        let result = state.record(Endpoint::ListUsers, token).map(|()| state.users());
        ready(result)
    }

    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<AccessToken, ApiError>> + Send {
        let mut state = self.lock();
        let result = state.record(Endpoint::Login, None).and_then(|()| {
            let valid = state
                .accounts
                .get(&request.username)
                .is_some_and(|account| account.password == request.password);
            if !valid {
                return Err(http(401, BAD_CREDENTIALS));
            }
            Ok(AccessToken { access_token: state.issue(&request.username) })
        });
        ready(result)
    }

    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let mut state = self.lock();
        let result = state.record(Endpoint::Register, None).and_then(|()| {
            if state.accounts.contains_key(&request.username) {
                return Err(http(400, USERNAME_TAKEN));
            }
            state
                .accounts
                .insert(request.username.clone(), Account { password: request.password.clone() });
            Ok(())
        });
        ready(result)
    }
}
