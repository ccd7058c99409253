use crate::entities::{MutationRequest, Slide};
use crate::error::Error;

/// Remote presentation service as seen by the archive workflow.
#[async_trait::async_trait]
pub trait PresentationService: Send + Sync {
    /// Ordered slides of a presentation. A deck with no slides yields an empty vector.
    async fn fetch_slides(&self, presentation_id: &str) -> Result<Vec<Slide>, Error>;
    /// Submits `requests` as a single batch. Nothing is sent when `requests` is empty.
    async fn apply_batch(
        &self,
        presentation_id: &str,
        requests: &[MutationRequest],
    ) -> Result<(), Error>;
    async fn check_access(&self, presentation_id: &str) -> Result<(), Error>;
}
