use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub object_id: String,
    pub position: usize,
}

impl Slide {
    pub fn new(object_id: impl Into<String>, position: usize) -> Self {
        Slide {
            object_id: object_id.into(),
            position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Presentation {
    pub id: String,
    pub slides: Vec<Slide>,
}

/// Single slide-level change submitted inside a batch update.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum MutationRequest {
    #[serde(rename = "copyPaste", rename_all = "camelCase")]
    Copy {
        object_id: String,
        destination_object_id: String,
    },
    #[serde(rename = "deleteObject", rename_all = "camelCase")]
    Delete { object_id: String },
}

impl MutationRequest {
    pub fn copy(slide: &Slide, destination_object_id: impl Into<String>) -> Self {
        MutationRequest::Copy {
            object_id: slide.object_id.clone(),
            destination_object_id: destination_object_id.into(),
        }
    }

    pub fn delete(slide: &Slide) -> Self {
        MutationRequest::Delete {
            object_id: slide.object_id.clone(),
        }
    }

    pub fn object_id(&self) -> &str {
        match self {
            MutationRequest::Copy { object_id, .. } => object_id,
            MutationRequest::Delete { object_id } => object_id,
        }
    }
}
