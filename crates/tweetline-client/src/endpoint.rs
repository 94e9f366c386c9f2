//! Request construction.
//!
//! One [`Endpoint`] per server capability. An [`ApiRequest`] pairs an endpoint
//! with its JSON body and bearer token; the transport only has to send it.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tweetline_core::ApiError;
use tweetline_proto::{
    ContentBody, Filter, LoginRequest, PostId, RegisterRequest, Token, encode_component,
};

use crate::validate;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// Server capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /tweet/all`
    ListAll,
    /// `GET /tweet/{user}`
    ListByUser(String),
    /// `POST /tweet/create`
    Create,
    /// `PUT /tweet/{id}`
    Update(PostId),
    /// `DELETE /tweet/{id}`
    Delete(PostId),
    /// `POST /tweet/{id}/like`
    Like(PostId),
    /// `GET /users`
    ListUsers,
    /// `POST /auth/login`
    Login,
    /// `POST /auth/register`
    Register,
}

impl Endpoint {
    /// HTTP method for this endpoint.
    pub fn method(&self) -> Method {
        match self {
            Self::ListAll | Self::ListByUser(_) | Self::ListUsers => Method::Get,
            Self::Create | Self::Like(_) | Self::Login | Self::Register => Method::Post,
            Self::Update(_) => Method::Put,
            Self::Delete(_) => Method::Delete,
        }
    }

    /// Path relative to the server base URL.
    pub fn path(&self) -> String {
        match self {
            Self::ListAll => "/tweet/all".to_string(),
            Self::ListByUser(user) => format!("/tweet/{}", encode_component(user)),
            Self::Create => "/tweet/create".to_string(),
            Self::Update(id) | Self::Delete(id) => format!("/tweet/{id}"),
            Self::Like(id) => format!("/tweet/{id}/like"),
            Self::ListUsers => "/users".to_string(),
            Self::Login => "/auth/login".to_string(),
            Self::Register => "/auth/register".to_string(),
        }
    }

    /// Whether the bearer token is attached when one is available.
    ///
    /// Every endpoint except the two auth endpoints carries it.
    pub fn sends_token(&self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }
}

/// A fully described request, ready for a transport to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Target capability.
    pub endpoint: Endpoint,
    /// JSON body, if the endpoint takes one.
    pub body: Option<Value>,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<Token>,
}

impl ApiRequest {
    fn new(endpoint: Endpoint) -> Self {
        Self { endpoint, body: None, bearer: None }
    }

    fn with_body(endpoint: Endpoint, body: &impl Serialize) -> Result<Self, ApiError> {
        Ok(Self { endpoint, body: Some(serde_json::to_value(body)?), bearer: None })
    }

    /// List the timeline selected by `filter`.
    pub fn list(filter: &Filter) -> Self {
        match filter {
            Filter::All => Self::new(Endpoint::ListAll),
            Filter::Author(user) => Self::new(Endpoint::ListByUser(user.clone())),
        }
    }

    /// Create a post. Rejects blank content.
    pub fn create(content: &str) -> Result<Self, ApiError> {
        validate::content(content)?;
        Self::with_body(Endpoint::Create, &ContentBody { content: content.to_string() })
    }

    /// Replace a post's content. Rejects blank content.
    pub fn update(id: PostId, content: &str) -> Result<Self, ApiError> {
        validate::content(content)?;
        Self::with_body(Endpoint::Update(id), &ContentBody { content: content.to_string() })
    }

    /// Delete a post.
    pub fn delete(id: PostId) -> Self {
        Self::new(Endpoint::Delete(id))
    }

    /// Like a post.
    pub fn like(id: PostId) -> Self {
        Self::new(Endpoint::Like(id))
    }

    /// List known authors.
    pub fn users() -> Self {
        Self::new(Endpoint::ListUsers)
    }

    /// Exchange credentials for a token. Rejects missing fields.
    pub fn login(request: &LoginRequest) -> Result<Self, ApiError> {
        validate::login(request)?;
        Self::with_body(Endpoint::Login, request)
    }

    /// Create an account. Rejects missing fields.
    pub fn register(request: &RegisterRequest) -> Result<Self, ApiError> {
        validate::register(request)?;
        Self::with_body(Endpoint::Register, request)
    }

    /// Attach `token` if the endpoint carries one.
    #[must_use]
    pub fn with_token(mut self, token: Option<&Token>) -> Self {
        if self.endpoint.sends_token() {
            self.bearer = token.cloned();
        }
        self
    }

    /// HTTP method.
    pub fn method(&self) -> Method {
        self.endpoint.method()
    }

    /// Path relative to the base URL.
    pub fn path(&self) -> String {
        self.endpoint.path()
    }
}
