//! The API capability the application depends on.

use std::future::Future;

use tweetline_core::ApiError;
use tweetline_proto::{AccessToken, Filter, LoginRequest, Post, PostId, RegisterRequest, Token};

/// One async operation per server capability.
///
/// Implementations attach `token` to every request that carries one, perform
/// exactly one round trip, and never retry.
///
/// # Implementations
///
/// - **Terminal client**: [`crate::transport::HttpApi`] over reqwest
/// - **Simulation**: an in-memory server in the test harness
pub trait TweetApi: Send + Sync + 'static {
    /// Posts selected by `filter`, in server order.
    fn list_posts(
        &self,
        filter: &Filter,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Vec<Post>, ApiError>> + Send;

    /// Create a post and return it.
    fn create_post(
        &self,
        content: &str,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Post, ApiError>> + Send;

    /// Replace a post's content and return the updated post.
    fn update_post(
        &self,
        id: PostId,
        content: &str,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Post, ApiError>> + Send;

    /// Delete a post.
    fn delete_post(
        &self,
        id: PostId,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Like a post and return the updated post.
    fn like_post(
        &self,
        id: PostId,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Post, ApiError>> + Send;

    /// Distinct author names, in server order.
    fn list_users(
        &self,
        token: Option<&Token>,
    ) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;

    /// Exchange credentials for a bearer token.
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<AccessToken, ApiError>> + Send;

    /// Create an account.
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
