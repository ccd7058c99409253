use self::api::BatchUpdateRequest;
use crate::auth::{ServiceAccountKey, TokenProvider};
use crate::entities::{MutationRequest, Presentation, Slide};
use crate::error::Error;
use crate::metrics::ObserverExt;
use crate::PresentationService;
use reqwest::Client;
use tracing::debug;

mod api;

pub const DEFAULT_BASE_URL: &str = "https://slides.googleapis.com/v1";

/// Google Slides REST backend authenticated with a service account.
pub struct GoogleSlides {
    client: Client,
    base_url: String,
    tokens: TokenProvider,
}

impl GoogleSlides {
    pub fn with_base_url(key: ServiceAccountKey, base_url: impl Into<String>) -> Self {
        let client = Client::new();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        GoogleSlides {
            tokens: TokenProvider::new(client.clone(), key),
            client,
            base_url,
        }
    }

    fn presentation_url(&self, presentation_id: &str) -> String {
        format!("{}/presentations/{}", self.base_url, presentation_id)
    }

    fn batch_update_url(&self, presentation_id: &str) -> String {
        format!("{}/presentations/{}:batchUpdate", self.base_url, presentation_id)
    }

    pub async fn presentation(&self, presentation_id: &str) -> Result<Presentation, Error> {
        let token = self.tokens.access_token().await?;
        let response = self.client
            .get(self.presentation_url(presentation_id))
            .bearer_auth(token)
            .send()
            .observe_duration("get_presentation")
            .await
            .map_err(|err| Error::Access(format!("presentation {} is unreachable: {}", presentation_id, err)))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Access(format!(
                "presentation {} returned {}: {}", presentation_id, status, body
            )));
        }
        let presentation = response
            .json::<api::Presentation>()
            .await
            .map_err(|err| Error::Access(format!("malformed presentation {}: {}", presentation_id, err)))?;
        Ok(presentation.into_entity(presentation_id))
    }
}

#[async_trait::async_trait]
impl PresentationService for GoogleSlides {
    async fn fetch_slides(&self, presentation_id: &str) -> Result<Vec<Slide>, Error> {
        let presentation = self.presentation(presentation_id).await?;
        debug!(
            presentation_id = presentation.id.as_str(),
            slides = presentation.slides.len(),
            "fetched slides"
        );
        Ok(presentation.slides)
    }

    async fn apply_batch(
        &self,
        presentation_id: &str,
        requests: &[MutationRequest],
    ) -> Result<(), Error> {
        if requests.is_empty() {
            return Ok(());
        }
        let token = self.tokens.access_token().await?;
        let response = self.client
            .post(self.batch_update_url(presentation_id))
            .bearer_auth(token)
            .json(&BatchUpdateRequest { requests })
            .send()
            .observe_duration("batch_update")
            .await
            .map_err(|err| Error::Batch(format!("batch update of {} failed: {}", presentation_id, err)))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Batch(format!(
                "batch update of {} returned {}: {}", presentation_id, status, body
            )));
        }
        debug!(presentation_id, requests = requests.len(), "applied batch update");
        Ok(())
    }

    async fn check_access(&self, presentation_id: &str) -> Result<(), Error> {
        self.presentation(presentation_id).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::GoogleSlides;
    use crate::auth::ServiceAccountKey;
    use crate::PresentationService;

    fn key() -> ServiceAccountKey {
        ServiceAccountKey::from_json(r#"{
            "private_key": "invalid",
            "client_email": "archiver@example.iam.gserviceaccount.com",
            "token_uri": "http://127.0.0.1:9/token"
        }"#).unwrap()
    }

    #[test]
    fn endpoint_urls() {
        let slides = GoogleSlides::with_base_url(key(), "http://localhost:8080/v1/");
        assert_eq!(slides.presentation_url("abc"), "http://localhost:8080/v1/presentations/abc");
        assert_eq!(
            slides.batch_update_url("abc"),
            "http://localhost:8080/v1/presentations/abc:batchUpdate"
        );
    }

    #[tokio::test]
    async fn empty_batch_is_not_sent() {
        let slides = GoogleSlides::with_base_url(key(), "http://127.0.0.1:9/v1");
        slides.apply_batch("abc", &[]).await.unwrap();
    }
}
