use crate::entities::{self, MutationRequest, Slide};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub presentation_id: Option<String>,
    pub slides: Option<Vec<Page>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub object_id: String,
}

#[derive(Serialize, Debug)]
pub struct BatchUpdateRequest<'a> {
    pub requests: &'a [MutationRequest],
}

impl Presentation {
    pub fn into_entity(self, requested_id: &str) -> entities::Presentation {
        let slides = self.slides
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(position, page)| Slide::new(page.object_id, position))
            .collect();
        entities::Presentation {
            id: self.presentation_id.unwrap_or_else(|| requested_id.to_string()),
            slides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BatchUpdateRequest, Presentation};
    use crate::entities::{MutationRequest, Slide};
    use serde_json::json;

    #[test]
    fn slides_keep_remote_order() {
        let payload = json!({
            "presentationId": "deck",
            "slides": [{"objectId": "p"}, {"objectId": "g2"}, {"objectId": "g3"}],
            "title": "Weekly"
        });
        let presentation = serde_json::from_value::<Presentation>(payload)
            .unwrap()
            .into_entity("deck");
        assert_eq!(presentation.id, "deck");
        assert_eq!(
            presentation.slides,
            vec![Slide::new("p", 0), Slide::new("g2", 1), Slide::new("g3", 2)]
        );
    }

    #[test]
    fn missing_slides_field_is_empty_deck() {
        let payload = json!({"title": "Empty"});
        let presentation = serde_json::from_value::<Presentation>(payload)
            .unwrap()
            .into_entity("empty-deck");
        assert_eq!(presentation.id, "empty-deck");
        assert!(presentation.slides.is_empty());
    }

    #[test]
    fn batch_update_body() {
        let requests = vec![MutationRequest::Delete { object_id: "g2".to_string() }];
        let body = BatchUpdateRequest { requests: &requests };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"requests": [{"deleteObject": {"objectId": "g2"}}]})
        );
    }
}
