use crate::config::ArchiveConfig;
use slides_client::google::GoogleSlides;
use slides_client::PresentationService;

/// Builds the presentation backend for one archive invocation.
pub trait Connector: Send + Sync {
    fn connect(&self, config: &ArchiveConfig) -> Box<dyn PresentationService>;
}

pub struct GoogleConnector;

impl Connector for GoogleConnector {
    fn connect(&self, config: &ArchiveConfig) -> Box<dyn PresentationService> {
        Box::new(GoogleSlides::with_base_url(
            config.credentials.clone(),
            config.api_url.as_str(),
        ))
    }
}
