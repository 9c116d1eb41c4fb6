//! API client core for the retiree benefits registry.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - One client per backend domain: `RetireesClient`, `UpdatesClient`,
//!   `BreakersClient`. Each is stateless — it holds only `base_url` — and
//!   every call is an independent request/response exchange.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The two spreadsheet exports return opaque binary bodies; their requests
//!   carry `ResponseFormat::Binary` so the host never decodes them as text.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod breakers;
pub mod error;
pub mod http;
pub mod locale;
pub mod retirees;
pub mod types;
pub mod updates;

pub use breakers::BreakersClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, ResponseFormat};
pub use locale::{format_display_date, Locale};
pub use retirees::RetireesClient;
pub use types::{
    Ack, Breaker, BreakerView, Enveloped, ErcError, ErcStats, ErcUpdate, Retiree, RstkUpdate,
    UpdatesInfo,
};
pub use updates::UpdatesClient;
