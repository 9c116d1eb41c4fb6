//! Wire DTOs for the registry backend.
//!
//! # Design
//! Field names and JSON shapes are bit-exact with the backend's responses.
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch schema drift between the two crates.
//!
//! Deserialization is lenient where the backend may omit or null a field
//! (`#[serde(default)]`): the layer passes records through unmodified and
//! never rejects a row the backend chose to send. Free-form columns the
//! backend stores as raw JSON (`sale_coupons`, `timeline`, `incorrect`,
//! `errors`) stay `serde_json::Value` so nothing is lost in transit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A retiree benefit record, as returned by `GET /retiree`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Retiree {
    pub snils: String,
    #[serde(default)]
    pub birthdate: Option<DateTime<Utc>>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub sale_coupons: serde_json::Value,
}

/// A violation row as listed by `GET /breakers`, keyed by SNILS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakerView {
    pub date: String,
    pub snils: String,
    pub name: String,
    pub pan: String,
    pub checked: bool,
    #[serde(default)]
    pub timeline: serde_json::Value,
}

/// The stored violation record echoed back by `POST /breakers/check`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Breaker {
    #[serde(default)]
    pub id: i64,
    pub snils: String,
    pub checked: bool,
    #[serde(default)]
    pub datetime: String,
}

/// One batch ingestion event from the external registry (ERC).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErcUpdate {
    pub id: i64,
    pub datetime_received: DateTime<Utc>,
    pub datetime_parsed: DateTime<Utc>,
    pub lines: i64,
    #[serde(default)]
    pub incorrect: serde_json::Value,
}

/// Aggregate counters over all ingested data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErcStats {
    pub total: i64,
    pub sales: i64,
    pub quantity: i64,
    pub amount: i64,
    pub retirees: i64,
    pub updates_rstk: i64,
    pub cards: i64,
}

/// A row the ingestion pipeline could not apply cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErcError {
    pub id: i64,
    pub snils: String,
    pub birthdate: String,
    pub full_name: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One uploaded RSTK registry document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RstkUpdate {
    pub id: i64,
    pub type_id: i64,
    pub uploaded_at: DateTime<Utc>,
    pub from_date: DateTime<Utc>,
    pub lines: i64,
    #[serde(default)]
    pub errors: serde_json::Value,
}

/// Envelope returned by `GET /updates`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdatesInfo {
    pub status: String,
    pub erc: Vec<ErcUpdate>,
    pub stat: ErcStats,
    pub errors_data: Vec<ErcError>,
    pub rstk: Vec<RstkUpdate>,
}

/// Bare `{"status":"ok"}` acknowledgment used by delete and sync routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub status: String,
}

/// Envelope `{"status":..., "data":...}` used by the breaker routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enveloped<T> {
    pub status: String,
    pub data: T,
}
