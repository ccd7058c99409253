#[derive(Debug)]
pub enum Error {
    /// Presentation is missing, unreadable with the current credentials or unreachable.
    Access(String),
    /// Batch update was rejected by the remote service.
    Batch(String),
    /// Service account token could not be obtained.
    Auth(String),
}

impl std::convert::From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Error::Auth(err.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Access(message) => write!(f, "{}", message),
            Error::Batch(message) => write!(f, "{}", message),
            Error::Auth(message) => write!(f, "authentication failed: {}", message),
        }
    }
}

impl std::error::Error for Error {}
