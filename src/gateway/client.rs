//! reqwest implementation of the review gateway.

use std::time::Duration;

use async_trait::async_trait;
use http::HeaderName;
use http::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::AvisGateway;
use super::error_mapping::{map_decode_error, map_status_error, map_transport_error};
use super::models::{LikeReply, ModerationReply, ModerationRequest};
use crate::csrf::CsrfToken;
use crate::error::InteractionError;
use crate::page::ReviewId;
use crate::page::markup::CSRF_HEADER_NAME;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Path of the like endpoint, relative to the server base URL.
#[must_use]
pub fn like_path(review: ReviewId) -> String {
    format!("avis/avis/{review}/like/")
}

/// Path of the moderation endpoint, relative to the server base URL.
#[must_use]
pub fn moderation_path(review: ReviewId) -> String {
    format!("avis/avis/{review}/moderer/")
}

/// Gateway posting to the review endpoints over HTTP.
#[derive(Debug, Clone)]
pub struct ReqwestAvisGateway {
    client: Client,
    base_url: Url,
}

impl ReqwestAvisGateway {
    /// Creates a gateway for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::InvalidUrl`] when `base_url` cannot be
    /// parsed, or [`InteractionError::Configuration`] when the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, InteractionError> {
        let parsed = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| InteractionError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Base URL every endpoint path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn post(&self, path: &str, csrf: &CsrfToken) -> Result<RequestBuilder, InteractionError> {
        let endpoint = self
            .base_url
            .join(path)
            .map_err(|error| InteractionError::InvalidUrl(format!("{path}: {error}")))?;

        Ok(self
            .client
            .post(endpoint)
            .header(HeaderName::from_static(CSRF_HEADER_NAME), csrf.value())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE))
    }
}

#[async_trait]
impl AvisGateway for ReqwestAvisGateway {
    async fn toggle_like(
        &self,
        review: ReviewId,
        csrf: &CsrfToken,
    ) -> Result<LikeReply, InteractionError> {
        let request = self.post(&like_path(review), csrf)?;
        send_json("like toggle", request).await
    }

    async fn moderate(
        &self,
        review: ReviewId,
        request: &ModerationRequest,
        csrf: &CsrfToken,
    ) -> Result<ModerationReply, InteractionError> {
        let builder = self.post(&moderation_path(review), csrf)?.json(request);
        send_json("moderation", builder).await
    }
}

async fn send_json<T: DeserializeOwned>(
    operation: &str,
    request: RequestBuilder,
) -> Result<T, InteractionError> {
    let response = request
        .send()
        .await
        .map_err(|error| map_transport_error(operation, &error))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| map_transport_error(operation, &error))?;
    tracing::debug!("{operation} answered {status}");

    if !status.is_success() {
        return Err(map_status_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|error| map_decode_error(operation, &error))
}

/// Parses the base URL so relative endpoint paths are appended to its path.
fn parse_base_url(input: &str) -> Result<Url, InteractionError> {
    let mut parsed = Url::parse(input.trim())
        .map_err(|error| InteractionError::InvalidUrl(format!("{input}: {error}")))?;
    if parsed.cannot_be_a_base() {
        return Err(InteractionError::InvalidUrl(format!(
            "{input}: URL cannot be used as a base"
        )));
    }
    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }
    Ok(parsed)
}
