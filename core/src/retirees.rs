//! Retiree query service: list and free-text search over benefit records.

use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{check_status, HttpMethod, HttpRequest, HttpResponse, ResponseFormat};
use crate::types::Retiree;

/// Stateless client for the `/retiree` routes.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller executes the HTTP round-trip between
/// `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct RetireesClient {
    base_url: String,
}

impl RetireesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/retiree` — the full collection, no client-side filtering.
    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/retiree", self.base_url),
            headers: Vec::new(),
            body: None,
            response_format: ResponseFormat::Json,
        }
    }

    /// GET `/retiree?search=<term>` — backend-side filtered search.
    ///
    /// The term is percent-encoded here; an empty term is sent as-is and
    /// yields whatever the backend's default behavior is.
    pub fn build_find(&self, term: &str) -> HttpRequest {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("search", term)
            .finish();
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/retiree?{query}", self.base_url),
            headers: Vec::new(),
            body: None,
            response_format: ResponseFormat::Json,
        }
    }

    /// Decode the bare JSON array returned by `build_list`'s request.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Retiree>, ApiError> {
        check_status(&response)?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Decode the bare JSON array returned by `build_find`'s request.
    pub fn parse_find(&self, response: HttpResponse) -> Result<Vec<Retiree>, ApiError> {
        self.parse_list(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RetireesClient {
        RetireesClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/retiree");
        assert_eq!(req.response_format, ResponseFormat::Json);
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_find_percent_encodes_the_term() {
        let req = client().build_find("Иванов Иван");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:3000/retiree?search=%D0%98%D0%B2%D0%B0%D0%BD%D0%BE%D0%B2+%D0%98%D0%B2%D0%B0%D0%BD"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_find_empty_term_keeps_parameter() {
        let req = client().build_find("");
        assert_eq!(req.path, "http://localhost:3000/retiree?search=");
    }

    #[test]
    fn parse_list_returns_backend_array_unmodified() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: br#"[{"snils":"123"}]"#.to_vec(),
        };
        let retirees = client().parse_list(response).unwrap();
        assert_eq!(retirees.len(), 1);
        assert_eq!(retirees[0].snils, "123");
    }

    #[test]
    fn parse_list_error_status_carries_backend_body() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: br#"{"status":"error","error":"db down"}"#.to_vec(),
        };
        let err = client().parse_list(response).unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("db down"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_list_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: b"not json".to_vec(),
        };
        let err = client().parse_list(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = RetireesClient::new("http://localhost:3000/");
        let req = client.build_list();
        assert_eq!(req.path, "http://localhost:3000/retiree");
    }
}
