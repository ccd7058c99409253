use crate::archive::ArchiveSummary;
use crate::error::ArchiveError;
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Weekly slides archived successfully";
pub const FAILURE_MESSAGE: &str = "Failed to archive weekly slides";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed. Use POST.";

/// Body of every `/api/archive` response.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ArchiveData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveData {
    pub copied_slides: usize,
    pub deleted_slides: usize,
    pub archive_id: String,
    pub current_id: String,
}

impl From<ArchiveSummary> for ArchiveData {
    fn from(summary: ArchiveSummary) -> Self {
        ArchiveData {
            copied_slides: summary.copied_slides,
            deleted_slides: summary.deleted_slides,
            archive_id: summary.archive_id,
            current_id: summary.current_id,
        }
    }
}

impl ArchiveResponse {
    pub fn success(summary: ArchiveSummary) -> Self {
        ArchiveResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(summary.into()),
            error: None,
        }
    }

    pub fn failure(error: &ArchiveError) -> Self {
        ArchiveResponse {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
            data: None,
            error: Some(error.to_string()),
        }
    }

    pub fn method_not_allowed() -> Self {
        ArchiveResponse {
            success: false,
            message: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            data: None,
            error: None,
        }
    }
}
