use std::sync::Arc;

pub use archive::{ArchiveSummary, Archiver};
pub use config::{ArchiveConfig, Options};
pub use connector::{Connector, GoogleConnector};
pub use error::ArchiveError;

pub mod archive;
pub mod config;
pub mod connector;
pub mod error;
pub mod logger;
mod metrics;
pub mod response;
pub mod server;

pub struct SlidesArchiver {
    options: Options,
    connector: Arc<dyn Connector>,
}

impl SlidesArchiver {
    pub fn new(options: Options) -> Self {
        SlidesArchiver {
            options,
            connector: Arc::new(GoogleConnector),
        }
    }

    pub fn connector(mut self, connector: Arc<dyn Connector>) -> Self {
        self.connector = connector;
        self
    }

    pub async fn run(&self) -> std::io::Result<()> {
        server::run(self.options.clone(), self.connector.clone()).await
    }
}
