use slides_client::error::Error as ClientError;

#[derive(Debug)]
pub enum ArchiveError {
    /// Deck ids or credentials are missing or malformed.
    Config(String),
    Access(ClientError),
    Copy(ClientError),
    Clear(ClientError),
}

impl ArchiveError {
    pub fn stage(&self) -> &'static str {
        match self {
            ArchiveError::Config(_) => "config",
            ArchiveError::Access(_) => "validate",
            ArchiveError::Copy(_) => "copy",
            ArchiveError::Clear(_) => "clear",
        }
    }
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ArchiveError::Config(message) => write!(f, "{}", message),
            ArchiveError::Access(err) => write!(f, "Access validation failed: {}", err),
            ArchiveError::Copy(err) => write!(f, "Failed to copy slides: {}", err),
            ArchiveError::Clear(err) => write!(f, "Failed to delete slides: {}", err),
        }
    }
}

impl std::error::Error for ArchiveError {}
