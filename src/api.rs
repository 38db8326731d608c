use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Error;
use crate::models::{CreatePostRequest, LoginRequest, Post, RegisterRequest, User};

// 1. BoardApi Contract

/// BoardApi
///
/// Defines the abstract contract for every interaction with the external
/// collaborator (the HTTP backend that owns durable User and Post records).
/// This trait allows us to swap the concrete implementation, from the real
/// HTTP client (`HttpBoardApi`) to an in-memory mock during testing, without
/// affecting the session authority that calls it.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn BoardApi>`) safely shareable across async task boundaries.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Authenticate with the collaborator. Any non-success response is an
    /// `Error::Authentication`; the body is treated as opaque.
    async fn login(&self, req: &LoginRequest) -> Result<User, Error>;

    /// Create an account. A collaborator rejection (e.g. duplicate email)
    /// surfaces as `Error::Registration`, carrying the collaborator's own
    /// message when it provides one.
    async fn register(&self, req: &RegisterRequest) -> Result<User, Error>;

    /// Fetch the full (unfiltered) post sequence. Visibility filtering is the
    /// caller's concern; the collaborator returns everything.
    async fn fetch_posts(&self) -> Result<Vec<Post>, Error>;

    /// Submit a new post. The collaborator resolves the author and assigns the id.
    async fn create_post(&self, req: &CreatePostRequest) -> Result<Post, Error>;
}

/// ApiState
///
/// The concrete type used to share collaborator access across the client.
pub type ApiState = Arc<dyn BoardApi>;

// 2. The Real Implementation (HTTP)

/// RejectionBody
///
/// Minimal struct to deserialize the collaborator's error payload. The backend
/// reports rejections as `{"detail": "..."}`; anything else is treated as opaque.
#[derive(Deserialize)]
struct RejectionBody {
    detail: String,
}

/// HttpBoardApi
///
/// The concrete implementation of `BoardApi` speaking JSON over HTTP to the
/// collaborator at a configured base URL. All four operations are single,
/// short-lived, user-initiated calls: no retries, no cancellation.
#[derive(Clone)]
pub struct HttpBoardApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBoardApi {
    /// Constructs the client for the given collaborator base URL
    /// (e.g. `http://localhost:8000`). A trailing slash is tolerated.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Extracts the collaborator's rejection message, if the body is parseable.
async fn rejection_detail(response: reqwest::Response) -> Option<String> {
    response.json::<RejectionBody>().await.ok().map(|b| b.detail)
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn login(&self, req: &LoginRequest) -> Result<User, Error> {
        tracing::debug!(email = %req.email, "POST /api/login");
        let response = self
            .client
            .post(self.url("/api/login"))
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Wrong credentials or unknown user. The body may vary, so it is
            // deliberately not surfaced.
            return Err(Error::Authentication(format!(
                "login rejected by the server ({status})"
            )));
        }

        response
            .json::<User>()
            .await
            .map_err(|e| Error::Network(format!("malformed login response: {e}")))
    }

    async fn register(&self, req: &RegisterRequest) -> Result<User, Error> {
        tracing::debug!(email = %req.email, role = %req.role, "POST /api/register");
        let response = self
            .client
            .post(self.url("/api/register"))
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Surface the collaborator's message verbatim when available
            // (e.g. "Email already registered"), else a generic one.
            let detail = rejection_detail(response)
                .await
                .unwrap_or_else(|| format!("registration rejected by the server ({status})"));
            return Err(Error::Registration(detail));
        }

        response
            .json::<User>()
            .await
            .map_err(|e| Error::Network(format!("malformed registration response: {e}")))
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, Error> {
        tracing::debug!("GET /api/posts");
        let response = self.client.get(self.url("/api/posts")).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("post listing failed ({status})")));
        }

        response
            .json::<Vec<Post>>()
            .await
            .map_err(|e| Error::Network(format!("malformed post listing: {e}")))
    }

    async fn create_post(&self, req: &CreatePostRequest) -> Result<Post, Error> {
        tracing::debug!(department = %req.department, "POST /api/posts");
        let response = self
            .client
            .post(self.url("/api/posts"))
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("post creation failed ({status})")));
        }

        response
            .json::<Post>()
            .await
            .map_err(|e| Error::Network(format!("malformed post creation response: {e}")))
    }
}
