//! [`TweetApi`] over reqwest.

use serde::de::DeserializeOwned;
use tracing::instrument;
use tweetline_core::ApiError;
use tweetline_proto::{AccessToken, Filter, LoginRequest, Post, PostId, RegisterRequest, Token};

use crate::{ApiRequest, ClientConfig, Method, TweetApi, decode_empty, decode_json};

/// HTTP client for the tweet service.
///
/// One request per call. No retries and no timeouts beyond what the
/// operating system imposes.
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client for the server in `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Network(format!("client setup failed: {e}")))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, request: ApiRequest) -> Result<(u16, Vec<u8>), ApiError> {
        let url = format!("{}{}", self.base_url, request.path());
        tracing::debug!(method = %request.method(), %url, "sending request");

        let mut builder = self.http.request(request.method().into(), url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(network)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(network)?;
        Ok((status, body.to_vec()))
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let (status, body) = self.execute(request).await?;
        decode_json(status, &body)
    }
}

fn network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

impl TweetApi for HttpApi {
    #[instrument(skip_all, fields(%filter))]
    async fn list_posts(
        &self,
        filter: &Filter,
        token: Option<&Token>,
    ) -> Result<Vec<Post>, ApiError> {
        self.fetch(ApiRequest::list(filter).with_token(token)).await
    }

    #[instrument(skip_all)]
    async fn create_post(&self, content: &str, token: Option<&Token>) -> Result<Post, ApiError> {
        self.fetch(ApiRequest::create(content)?.with_token(token)).await
    }

    #[instrument(skip_all, fields(%id))]
    async fn update_post(
        &self,
        id: PostId,
        content: &str,
        token: Option<&Token>,
    ) -> Result<Post, ApiError> {
        self.fetch(ApiRequest::update(id, content)?.with_token(token)).await
    }

    #[instrument(skip_all, fields(%id))]
    async fn delete_post(&self, id: PostId, token: Option<&Token>) -> Result<(), ApiError> {
        let (status, body) = self.execute(ApiRequest::delete(id).with_token(token)).await?;
        decode_empty(status, &body)
    }

    #[instrument(skip_all, fields(%id))]
    async fn like_post(&self, id: PostId, token: Option<&Token>) -> Result<Post, ApiError> {
        self.fetch(ApiRequest::like(id).with_token(token)).await
    }

    #[instrument(skip_all)]
    async fn list_users(&self, token: Option<&Token>) -> Result<Vec<String>, ApiError> {
        self.fetch(ApiRequest::users().with_token(token)).await
    }

    #[instrument(skip_all, fields(username = %request.username))]
    async fn login(&self, request: &LoginRequest) -> Result<AccessToken, ApiError> {
        self.fetch(ApiRequest::login(request)?).await
    }

    #[instrument(skip_all, fields(username = %request.username))]
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let (status, body) = self.execute(ApiRequest::register(request)?).await?;
        decode_empty(status, &body)
    }
}
