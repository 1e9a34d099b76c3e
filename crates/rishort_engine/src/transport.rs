use reqwest::header::CONTENT_TYPE;
use rishort_core::{RequestError, RequestErrorKind};

use crate::types::ShortenRequestBody;
use crate::{ShortenResponse, SubmitSettings};

/// One attempt against the shortening service.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn shorten(&self, long_url: &str) -> Result<ShortenResponse, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: SubmitSettings,
}

impl ReqwestTransport {
    pub fn new(settings: SubmitSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, RequestError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| RequestError::new(RequestErrorKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn shorten(&self, long_url: &str) -> Result<ShortenResponse, RequestError> {
        let client = self.build_client()?;
        let body = serde_json::to_vec(&ShortenRequestBody { long_url })
            .map_err(|err| RequestError::new(RequestErrorKind::Network, err.to_string()))?;

        let response = client
            .post(self.settings.shorten_endpoint())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::new(
                RequestErrorKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        // The service has already accepted the URL; a broken body must not trigger a re-POST.
        let bytes = response.bytes().await.map_err(|err| {
            RequestError::new(RequestErrorKind::InvalidResponse, err.to_string())
        })?;
        serde_json::from_slice(&bytes)
            .map_err(|err| RequestError::new(RequestErrorKind::InvalidResponse, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(RequestErrorKind::Timeout, err.to_string());
    }
    RequestError::new(RequestErrorKind::Network, err.to_string())
}
