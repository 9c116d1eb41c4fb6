//! In-memory mock of the registry backend's HTTP surface.
//!
//! Mirrors the routes, envelopes, and error messages of the real backend so
//! the client crate's integration tests can run against live HTTP. State is
//! seeded with a small deterministic dataset; the two excel routes return a
//! placeholder zip-magic payload with the real xlsx content type.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Retiree {
    pub snils: String,
    pub birthdate: DateTime<Utc>,
    pub full_name: String,
    pub sale_coupons: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BreakerView {
    pub date: String,
    pub snils: String,
    pub name: String,
    pub pan: String,
    pub checked: bool,
    pub timeline: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Breaker {
    pub id: i64,
    pub snils: String,
    pub checked: bool,
    pub datetime: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErcUpdate {
    pub id: i64,
    pub datetime_received: DateTime<Utc>,
    pub datetime_parsed: DateTime<Utc>,
    pub lines: i64,
    pub incorrect: serde_json::Value,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErcStats {
    pub total: i64,
    pub sales: i64,
    pub quantity: i64,
    pub amount: i64,
    pub retirees: i64,
    pub updates_rstk: i64,
    pub cards: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErcError {
    pub id: i64,
    pub snils: String,
    pub birthdate: String,
    pub full_name: String,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RstkUpdate {
    pub id: i64,
    pub type_id: i64,
    pub uploaded_at: DateTime<Utc>,
    pub from_date: DateTime<Utc>,
    pub lines: i64,
    pub errors: serde_json::Value,
}

/// Mutable registry state behind the router.
#[derive(Debug)]
pub struct Registry {
    pub retirees: Vec<Retiree>,
    pub breakers: Vec<BreakerView>,
    pub erc: Vec<ErcUpdate>,
    pub stat: ErcStats,
    pub errors_data: Vec<ErcError>,
    pub rstk: Vec<RstkUpdate>,
    pub sync_requests: u64,
    next_breaker_id: i64,
}

pub type Db = Arc<RwLock<Registry>>;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("seed timestamp")
}

impl Registry {
    /// Deterministic seed dataset shared by all tests.
    pub fn seeded() -> Self {
        Self {
            retirees: vec![
                Retiree {
                    snils: "112-233-445 95".to_string(),
                    birthdate: ts("1952-03-14T00:00:00Z"),
                    full_name: "Иванова Мария Петровна".to_string(),
                    sale_coupons: json!([{"month": "2022-01", "count": 4}]),
                },
                Retiree {
                    snils: "987-654-321 00".to_string(),
                    birthdate: ts("1948-11-02T00:00:00Z"),
                    full_name: "Сидоров Алексей Иванович".to_string(),
                    sale_coupons: serde_json::Value::Null,
                },
            ],
            breakers: vec![BreakerView {
                date: "2022-05-01".to_string(),
                snils: "112-233-445 95".to_string(),
                name: "Иванова М.П.".to_string(),
                pan: "220001******1234".to_string(),
                checked: false,
                timeline: json!([]),
            }],
            erc: vec![ErcUpdate {
                id: 1,
                datetime_received: ts("2022-04-01T06:00:00Z"),
                datetime_parsed: ts("2022-04-01T06:05:00Z"),
                lines: 120,
                incorrect: serde_json::Value::Null,
            }],
            stat: ErcStats {
                total: 3,
                sales: 1500,
                quantity: 1700,
                amount: 42000,
                retirees: 900,
                updates_rstk: 2,
                cards: 910,
            },
            errors_data: vec![ErcError {
                id: 7,
                snils: "000-000-000 00".to_string(),
                birthdate: "1950-01-01".to_string(),
                full_name: "Петров Петр Петрович".to_string(),
                errors: vec!["bad snils checksum".to_string()],
            }],
            rstk: vec![
                RstkUpdate {
                    id: 1,
                    type_id: 1,
                    uploaded_at: ts("2022-04-02T10:00:00Z"),
                    from_date: ts("2022-04-01T00:00:00Z"),
                    lines: 50,
                    errors: json!([]),
                },
                RstkUpdate {
                    id: 2,
                    type_id: 2,
                    uploaded_at: ts("2022-04-09T10:00:00Z"),
                    from_date: ts("2022-04-08T00:00:00Z"),
                    lines: 64,
                    errors: json!([]),
                },
            ],
            sync_requests: 0,
            next_breaker_id: 1,
        }
    }
}

pub fn app() -> Router {
    app_with(Arc::new(RwLock::new(Registry::seeded())))
}

pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/retiree", get(list_retirees))
        .route("/updates", get(updates_info))
        .route("/updates/rstk/{id}", axum::routing::delete(delete_rstk))
        .route("/updates/uploadERC", post(upload_erc))
        .route("/updates/make-rstk-excel", post(make_rstk_excel))
        .route("/breakers", get(list_breakers))
        .route("/breakers/check", post(check_breaker))
        .route("/breakers/make-excel", post(make_breakers_excel))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Placeholder workbook: zip magic plus filler, enough to assert the body is
/// passed through as opaque bytes.
pub fn fake_workbook() -> Vec<u8> {
    let mut buf = vec![0x50, 0x4b, 0x03, 0x04];
    buf.extend_from_slice(b"mock-xlsx-payload");
    buf
}

fn error_json(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({"status": "error", "error": message})))
}

async fn list_retirees(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Retiree>> {
    let registry = db.read().await;
    let search = params.get("search").map(String::as_str).unwrap_or("");
    let rows = registry
        .retirees
        .iter()
        .filter(|r| {
            search.is_empty()
                || r.full_name.to_lowercase().contains(&search.to_lowercase())
                || r.snils.contains(search)
        })
        .cloned()
        .collect();
    Json(rows)
}

async fn updates_info(State(db): State<Db>) -> Json<serde_json::Value> {
    let registry = db.read().await;
    Json(json!({
        "status": "ok",
        "erc": &registry.erc,
        "stat": &registry.stat,
        "errors_data": &registry.errors_data,
        "rstk": &registry.rstk,
    }))
}

// Deleting an id that never existed still answers ok, like the real backend.
async fn delete_rstk(State(db): State<Db>, Path(id): Path<i64>) -> Json<serde_json::Value> {
    let mut registry = db.write().await;
    registry.rstk.retain(|u| u.id != id);
    Json(json!({"status": "ok"}))
}

async fn upload_erc(State(db): State<Db>) -> Json<serde_json::Value> {
    let mut registry = db.write().await;
    registry.sync_requests += 1;
    Json(json!({"status": "ok"}))
}

async fn make_rstk_excel(Json(dates): Json<Vec<String>>) -> impl IntoResponse {
    if dates.len() != 2 {
        return error_json(StatusCode::BAD_REQUEST, "Неверный формат дат").into_response();
    }
    for date in &dates {
        if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return error_json(StatusCode::BAD_REQUEST, "Неверный формат дат").into_response();
        }
    }
    ([(header::CONTENT_TYPE, XLSX_CONTENT_TYPE)], fake_workbook()).into_response()
}

async fn list_breakers(State(db): State<Db>) -> Json<serde_json::Value> {
    let registry = db.read().await;
    Json(json!({"status": "ok", "data": &registry.breakers}))
}

async fn check_breaker(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let snils = match params.get("snils").filter(|s| !s.is_empty()) {
        Some(s) => s.clone(),
        None => return error_json(StatusCode::BAD_REQUEST, "Не указан СНИЛС").into_response(),
    };
    let checked_str = match params.get("checked").filter(|s| !s.is_empty()) {
        Some(s) => s.clone(),
        None => {
            return error_json(StatusCode::BAD_REQUEST, "Не указано значение поля checked")
                .into_response()
        }
    };
    let checked = match checked_str.parse::<bool>() {
        Ok(v) => v,
        Err(_) => {
            return error_json(
                StatusCode::BAD_REQUEST,
                "Не верно указано значение поля checked",
            )
            .into_response()
        }
    };

    let mut registry = db.write().await;
    for row in &mut registry.breakers {
        if row.snils == snils {
            row.checked = checked;
        }
    }
    let id = registry.next_breaker_id;
    registry.next_breaker_id += 1;
    let breaker = Breaker {
        id,
        snils,
        checked,
        datetime: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };
    Json(json!({"status": "ok", "data": breaker})).into_response()
}

async fn make_breakers_excel(Json(rows): Json<Vec<BreakerView>>) -> impl IntoResponse {
    if rows.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "Не указаны данные для экспорта")
            .into_response();
    }
    ([(header::CONTENT_TYPE, XLSX_CONTENT_TYPE)], fake_workbook()).into_response()
}
