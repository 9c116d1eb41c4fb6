//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test.
//!
//! Response bodies are raw bytes rather than text because two backend routes
//! (the spreadsheet exports) return binary xlsx payloads. `response_format`
//! tells the host how the body should be treated; a host that decodes a
//! `Binary` response as text will corrupt it.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// How the response body of a request is expected to be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Body is JSON text, parsed by the matching `parse_*` method.
    Json,
    /// Body is an opaque binary document, returned to the caller as bytes.
    Binary,
}

/// An HTTP request described as plain data.
///
/// Built by the `build_*` methods of the service clients. The caller is
/// responsible for executing this request against the network and returning
/// the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub response_format: ResponseFormat,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to the matching `parse_*` method for decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Reject non-200 responses, keeping the raw body for debugging.
pub(crate) fn check_status(response: &HttpResponse) -> Result<(), crate::error::ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(crate::error::ApiError::Status {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}
