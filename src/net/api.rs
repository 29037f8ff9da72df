//! Notice repository client: thin HTTP facade over `/notices`.
//!
//! No retry, auth header or status interpretation happens here. Any non-2xx
//! response becomes `ApiError::Response` with the body kept verbatim; pure
//! helpers (`list_query`, `notice_endpoint`, `parse_body`) carry the
//! testable logic.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Notice, NoticeFilters, NoticeListResponse, NoticePayload, NoticeStatus};
use crate::config::NoticeBoardConfig;
use crate::util::date::iso_date;

/// Remote notice collection keyed by notice id.
#[async_trait::async_trait]
pub trait NoticeApi: Send + Sync {
    /// `POST /notices`.
    async fn create(&self, payload: &NoticePayload) -> Result<Notice, ApiError>;

    /// `GET /notices?page=&search=&departmentsOrIndividuals=&status=&publishedOn=`.
    async fn list(&self, page: u32, filters: &NoticeFilters) -> Result<NoticeListResponse, ApiError>;

    /// `GET /notices/{id}`.
    async fn get_by_id(&self, id: &str) -> Result<Notice, ApiError>;

    /// `PATCH /notices/{id}` with `{ status }`.
    async fn update_status(&self, id: &str, status: NoticeStatus) -> Result<Notice, ApiError>;

    /// `PATCH /notices/{id}` with the full form payload.
    async fn update(&self, id: &str, payload: &NoticePayload) -> Result<Notice, ApiError>;

    /// `DELETE /notices/{id}`. Returns the service acknowledgement as-is.
    async fn delete(&self, id: &str) -> Result<serde_json::Value, ApiError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpNoticeApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpNoticeApi {
    /// Build a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &NoticeBoardConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "notice service rejected request");
            return Err(ApiError::Response { status: status.as_u16(), body: text });
        }

        parse_body(&text)
    }
}

#[async_trait::async_trait]
impl NoticeApi for HttpNoticeApi {
    async fn create(&self, payload: &NoticePayload) -> Result<Notice, ApiError> {
        let url = collection_endpoint(&self.base_url);
        tracing::debug!(%url, status = %payload.status, "creating notice");
        self.send(self.http.post(url).json(payload)).await
    }

    async fn list(&self, page: u32, filters: &NoticeFilters) -> Result<NoticeListResponse, ApiError> {
        let url = collection_endpoint(&self.base_url);
        let query = list_query(page, filters);
        tracing::debug!(%url, page, "listing notices");
        self.send(self.http.get(url).query(&query)).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Notice, ApiError> {
        self.send(self.http.get(notice_endpoint(&self.base_url, id)))
            .await
    }

    async fn update_status(&self, id: &str, status: NoticeStatus) -> Result<Notice, ApiError> {
        let body = StatusPatch { status };
        tracing::debug!(notice_id = id, %status, "patching notice status");
        self.send(self.http.patch(notice_endpoint(&self.base_url, id)).json(&body))
            .await
    }

    async fn update(&self, id: &str, payload: &NoticePayload) -> Result<Notice, ApiError> {
        tracing::debug!(notice_id = id, "updating notice");
        self.send(self.http.patch(notice_endpoint(&self.base_url, id)).json(payload))
            .await
    }

    async fn delete(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(notice_id = id, "deleting notice");
        self.send(self.http.delete(notice_endpoint(&self.base_url, id)))
            .await
    }
}

// =============================================================================
// WIRE HELPERS
// =============================================================================

#[derive(serde::Serialize)]
struct StatusPatch {
    status: NoticeStatus,
}

fn collection_endpoint(base_url: &str) -> String {
    format!("{base_url}/notices")
}

fn notice_endpoint(base_url: &str, id: &str) -> String {
    format!("{base_url}/notices/{id}")
}

/// Query pairs for a list request. Blank filters are sent as empty strings,
/// never omitted, and the date is serialized as `YYYY-MM-DD`.
#[must_use]
pub fn list_query(page: u32, filters: &NoticeFilters) -> Vec<(&'static str, String)> {
    let published_on = filters.published_on.map(iso_date).unwrap_or_default();
    vec![
        ("page", page.to_string()),
        ("search", filters.search.clone()),
        (
            "departmentsOrIndividuals",
            filters.audience.map(|a| a.as_str().to_owned()).unwrap_or_default(),
        ),
        ("status", filters.status.map(|s| s.as_str().to_owned()).unwrap_or_default()),
        ("publishedOn", published_on),
    ]
}

/// Decode a success body. An empty body decodes as JSON `null` so bare
/// acknowledgements (e.g. `204` on delete) are accepted where `T` allows it.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let body = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}
