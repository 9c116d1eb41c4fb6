//! Violation ("breaker") service: list flagged records, mark one checked or
//! unchecked, and export rows to a spreadsheet.
//!
//! The original client shipped two conflicting copies of this module, one
//! with a trailing slash on the paths and a single-argument check call. The
//! backend requires the `checked` flag and exposes `/breakers` without a
//! slash, so that is the one contract implemented here.

use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{check_status, HttpMethod, HttpRequest, HttpResponse, ResponseFormat};
use crate::types::{Breaker, BreakerView, Enveloped};

/// Stateless client for the `/breakers` routes.
#[derive(Debug, Clone)]
pub struct BreakersClient {
    base_url: String,
}

impl BreakersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/breakers` — every violation record, enveloped by the backend.
    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/breakers", self.base_url),
            headers: Vec::new(),
            body: None,
            response_format: ResponseFormat::Json,
        }
    }

    /// POST `/breakers/check?snils=<snils>&checked=<flag>` — mark a record
    /// checked or unchecked. The SNILS is sent as an opaque string; no
    /// format validation happens client-side.
    pub fn build_check(&self, snils: &str, checked: bool) -> HttpRequest {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("snils", snils)
            .append_pair("checked", if checked { "true" } else { "false" })
            .finish();
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/breakers/check?{query}", self.base_url),
            headers: Vec::new(),
            body: None,
            response_format: ResponseFormat::Json,
        }
    }

    /// POST `/breakers/make-excel` — export the given rows as an xlsx
    /// document. The rows travel as the JSON request body, exactly as
    /// `serde_json` renders them.
    pub fn build_export(&self, rows: &[BreakerView]) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(rows).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/breakers/make-excel", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            response_format: ResponseFormat::Binary,
        })
    }

    /// Unwrap the `data` array from the list envelope.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<BreakerView>, ApiError> {
        check_status(&response)?;
        let envelope: Enveloped<Vec<BreakerView>> = serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Unwrap the stored record echoed back by the check route.
    pub fn parse_check(&self, response: HttpResponse) -> Result<Breaker, ApiError> {
        check_status(&response)?;
        let envelope: Enveloped<Breaker> = serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Return the spreadsheet bytes untouched.
    pub fn parse_export(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }
}
