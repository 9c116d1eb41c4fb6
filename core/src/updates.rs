//! Update feed service: ingestion history, record deletion, sync trigger,
//! and the RSTK spreadsheet export.

use chrono::{DateTime, FixedOffset};

use crate::error::ApiError;
use crate::http::{check_status, HttpMethod, HttpRequest, HttpResponse, ResponseFormat};
use crate::types::{Ack, UpdatesInfo};

/// Stateless client for the `/updates` routes.
#[derive(Debug, Clone)]
pub struct UpdatesClient {
    base_url: String,
}

impl UpdatesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/updates` — the full ingestion-history envelope.
    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/updates", self.base_url),
            headers: Vec::new(),
            body: None,
            response_format: ResponseFormat::Json,
        }
    }

    /// DELETE `/updates/rstk/{id}` — no existence check is made first; a
    /// missing id is the backend's to report.
    pub fn build_delete_entry(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/updates/rstk/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
            response_format: ResponseFormat::Json,
        }
    }

    /// POST `/updates/uploadERC` — ask the backend to pull fresh data from
    /// the external registry. Only the acknowledgment is awaited; the sync
    /// itself runs server-side.
    pub fn build_trigger_sync(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/updates/uploadERC", self.base_url),
            headers: Vec::new(),
            body: None,
            response_format: ResponseFormat::Json,
        }
    }

    /// POST `/updates/make-rstk-excel` — request the RSTK report for a date
    /// range as an xlsx document.
    ///
    /// Each bound is normalized to the calendar date in its own offset and
    /// sent as `YYYY-MM-DD`; time-of-day and zone never reach the wire.
    pub fn build_export_range(
        &self,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Result<HttpRequest, ApiError> {
        let dates = [
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ];
        let body =
            serde_json::to_string(&dates).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/updates/make-rstk-excel", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            response_format: ResponseFormat::Binary,
        })
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<UpdatesInfo, ApiError> {
        check_status(&response)?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_delete_entry(&self, response: HttpResponse) -> Result<Ack, ApiError> {
        check_status(&response)?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_trigger_sync(&self, response: HttpResponse) -> Result<Ack, ApiError> {
        check_status(&response)?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Return the spreadsheet bytes untouched. No text or JSON decoding is
    /// attempted on a success response.
    pub fn parse_export_range(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }
}
