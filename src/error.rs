/// Error
///
/// The client-core error taxonomy. Every failure in this crate is one of these
/// four cases, and none of them is fatal: the triggering action can always be
/// retried by the user.
///
/// - `Validation` fires before any network call and means the collaborator was
///   never contacted.
/// - `Authentication` and `Registration` are collaborator rejections of the
///   corresponding operation; `Registration` carries the collaborator's own
///   message verbatim when it provides one.
/// - `Network` covers transport failures and malformed responses.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("registration rejected: {0}")]
    Registration(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}
