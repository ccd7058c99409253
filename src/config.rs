use crate::error::ArchiveError;
use crate::logger::LogFormat;
use clap::Parser;
use slides_client::auth::ServiceAccountKey;
use slides_client::google::DEFAULT_BASE_URL;

const MISSING_VARIABLES: &str = "Missing required environment variables";

/// Startup options. Deck ids and credentials stay optional here so that a
/// misconfigured deployment still answers with a structured failure.
#[derive(Parser, Debug, Clone)]
#[clap(version, about = "Archives the current week's slides into the archive deck")]
pub struct Options {
    #[clap(long, env = "CURRENT_SLIDES_ID")]
    pub current_slides_id: Option<String>,

    #[clap(long, env = "ARCHIVE_SLIDES_ID")]
    pub archive_slides_id: Option<String>,

    /// Service account key document (JSON)
    #[clap(long, env = "GOOGLE_SERVICE_ACCOUNT_KEY", hide_env_values = true)]
    pub service_account_key: Option<String>,

    #[clap(long, env = "SLIDES_API_URL", default_value = DEFAULT_BASE_URL)]
    pub slides_api_url: String,

    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[clap(long, env = "LOG_FORMAT", value_enum, default_value = "auto")]
    pub log_format: LogFormat,

    /// Link behind the "add slides" button of the index page
    #[clap(long, env = "EDIT_SLIDES_URL")]
    pub edit_url: Option<String>,

    /// Link behind the "present" button of the index page
    #[clap(long, env = "PRESENT_SLIDES_URL")]
    pub present_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub current_id: String,
    pub archive_id: String,
    pub credentials: ServiceAccountKey,
    pub api_url: String,
}

impl Options {
    /// Resolves the settings one archive run needs. Called on every invocation.
    pub fn archive_config(&self) -> Result<ArchiveConfig, ArchiveError> {
        let (current_id, archive_id, key) = match (
            non_blank(&self.current_slides_id),
            non_blank(&self.archive_slides_id),
            non_blank(&self.service_account_key),
        ) {
            (Some(current_id), Some(archive_id), Some(key)) => (current_id, archive_id, key),
            _ => return Err(ArchiveError::Config(MISSING_VARIABLES.to_string())),
        };
        let credentials = ServiceAccountKey::from_json(key)
            .map_err(|err| ArchiveError::Config(format!("Invalid service account key: {}", err)))?;
        Ok(ArchiveConfig {
            current_id: current_id.to_string(),
            archive_id: archive_id.to_string(),
            credentials,
            api_url: self.slides_api_url.clone(),
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
