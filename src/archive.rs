//! Archive workflow: validate access to both decks, copy every slide of the
//! current deck into the archive deck, then delete all but the first slide of
//! the current deck.
//!
//! Stages run strictly in order and the first failure ends the run. Nothing
//! already applied is rolled back: when clearing fails after a successful
//! copy, the archive keeps the copied slides and the current deck is left
//! untouched.

use crate::config::ArchiveConfig;
use crate::error::ArchiveError;
use slides_client::entities::{MutationRequest, Slide};
use slides_client::error::Error as ClientError;
use slides_client::PresentationService;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Copying,
    Clearing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Validating => write!(f, "validating"),
            Stage::Copying => write!(f, "copying"),
            Stage::Clearing => write!(f, "clearing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub copied_slides: usize,
    pub deleted_slides: usize,
    pub archive_id: String,
    pub current_id: String,
}

pub struct Archiver<'a, S: PresentationService + ?Sized> {
    service: &'a S,
    config: &'a ArchiveConfig,
}

impl<'a, S: PresentationService + ?Sized> Archiver<'a, S> {
    pub fn new(service: &'a S, config: &'a ArchiveConfig) -> Self {
        Archiver { service, config }
    }

    pub async fn run(&self) -> Result<ArchiveSummary, ArchiveError> {
        self.validate().await.map_err(ArchiveError::Access)?;
        let copied_slides = self.copy_slides().await.map_err(ArchiveError::Copy)?;
        let deleted_slides = self.clear_slides().await.map_err(ArchiveError::Clear)?;
        info!(copied_slides, deleted_slides, "archive process completed");
        Ok(ArchiveSummary {
            copied_slides,
            deleted_slides,
            archive_id: self.config.archive_id.clone(),
            current_id: self.config.current_id.clone(),
        })
    }

    async fn validate(&self) -> Result<(), ClientError> {
        info!(stage = %Stage::Validating, "validating access to both presentations");
        self.service.check_access(&self.config.current_id).await?;
        self.service.check_access(&self.config.archive_id).await?;
        Ok(())
    }

    async fn copy_slides(&self) -> Result<usize, ClientError> {
        info!(stage = %Stage::Copying, "starting slide copy");
        let slides = self.service.fetch_slides(&self.config.current_id).await?;
        if slides.is_empty() {
            info!(stage = %Stage::Copying, "no slides to copy");
            return Ok(0);
        }
        let requests = copy_requests(&slides);
        self.service.apply_batch(&self.config.archive_id, &requests).await?;
        info!(stage = %Stage::Copying, copied = slides.len(), "copied slides to archive");
        Ok(slides.len())
    }

    async fn clear_slides(&self) -> Result<usize, ClientError> {
        info!(stage = %Stage::Clearing, "starting slide deletion");
        // The copy stage may have seen a different deck; always fetch again.
        let slides = self.service.fetch_slides(&self.config.current_id).await?;
        let requests = delete_requests(&slides);
        if requests.is_empty() {
            info!(stage = %Stage::Clearing, fetched = slides.len(), "no slides to delete");
            return Ok(0);
        }
        self.service.apply_batch(&self.config.current_id, &requests).await?;
        info!(stage = %Stage::Clearing, deleted = requests.len(), "deleted slides from current deck");
        Ok(requests.len())
    }
}

/// One copy request per slide, destination ids `slide_1..slide_N` in deck order.
pub fn copy_requests(slides: &[Slide]) -> Vec<MutationRequest> {
    slides.iter()
        .enumerate()
        .map(|(index, slide)| MutationRequest::copy(slide, format!("slide_{}", index + 1)))
        .collect()
}

/// Delete requests for every slide but the first, which stays as placeholder.
pub fn delete_requests(slides: &[Slide]) -> Vec<MutationRequest> {
    slides.iter()
        .skip(1)
        .map(MutationRequest::delete)
        .collect()
}
