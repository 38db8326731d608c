use crate::api::ApiState;
use crate::error::Error;
use crate::models::{CreatePostRequest, LoginRequest, Post, RegisterRequest, User};
use crate::visibility;

/// Session
///
/// The single source of truth for "who is currently logged in" in this client
/// instance. The session starts Anonymous, lives only for the lifetime of the
/// process, and is never persisted.
///
/// Ownership discipline: the `Option<User>` inside is mutated exclusively by
/// `login`, `register` and `logout` (the three `&mut self` operations below).
/// Every other component, the visibility filter in particular, only reads it
/// through `current_user()`. State transitions happen strictly after the
/// collaborator has responded; a failed operation leaves the session exactly
/// as it was.
pub struct Session {
    api: ApiState,
    current: Option<User>,
}

impl Session {
    /// Creates an Anonymous session bound to the given collaborator.
    pub fn new(api: ApiState) -> Self {
        Self { api, current: None }
    }

    /// The current authenticated user, or `None` when Anonymous. This is the
    /// read surface consumed by all visibility decisions.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// login
    ///
    /// Sends the credentials to the collaborator. On rejection the
    /// `Error::Authentication` propagates to the caller and the session state
    /// is untouched. On success the returned record replaces the current user,
    /// which also covers re-authentication while already logged in.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, Error> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = self.api.login(&req).await.inspect_err(|e| {
            tracing::warn!(email, error = %e, "login failed");
        })?;

        tracing::info!(email = %user.email, role = %user.role, "login succeeded");
        Ok(self.current.insert(user))
    }

    /// register
    ///
    /// Creates an account and auto-logs-in as it. Client-side validation runs
    /// first: an invalid profile (missing required field, User role without a
    /// department) is rejected with `Error::Validation` without the
    /// collaborator ever being contacted. A collaborator rejection surfaces as
    /// `Error::Registration`; in both failure cases the session is untouched.
    pub async fn register(&mut self, req: RegisterRequest) -> Result<&User, Error> {
        req.validate()?;

        let user = self.api.register(&req).await.inspect_err(|e| {
            tracing::warn!(email = %req.email, error = %e, "registration failed");
        })?;

        tracing::info!(email = %user.email, role = %user.role, "registered and logged in");
        Ok(self.current.insert(user))
    }

    /// logout
    ///
    /// Unconditionally clears the current user. Never fails; a no-op when
    /// already Anonymous.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(email = %user.email, "logged out");
        }
    }

    /// visible_posts
    ///
    /// Fetches all posts from the collaborator and returns only those the
    /// current user may see, in collaborator order. An Anonymous session sees
    /// nothing (the fetch still happens; anonymity is a visibility decision,
    /// not a transport one).
    pub async fn visible_posts(&self) -> Result<Vec<Post>, Error> {
        let posts = self.api.fetch_posts().await?;
        Ok(visibility::filter_visible_posts(posts, self.current_user()))
    }

    /// create_post
    ///
    /// Submits a new post on behalf of the current user. Gated client-side:
    /// only an authenticated Admin or Manager may publish, and the content
    /// must be non-blank. Gate failures are `Error::Validation` and never
    /// reach the collaborator.
    pub async fn create_post(&self, req: CreatePostRequest) -> Result<Post, Error> {
        if !visibility::can_create_post(self.current_user()) {
            tracing::warn!("post creation attempted without Admin/Manager role");
            return Err(Error::Validation(
                "only Admin and Manager accounts can publish posts".to_string(),
            ));
        }
        req.validate()?;

        let post = self.api.create_post(&req).await?;
        tracing::info!(id = %post.id, department = %post.department, "post created");
        Ok(post)
    }
}
