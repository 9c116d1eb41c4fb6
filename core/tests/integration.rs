//! Full lifecycle test against the live mock server.
//!
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP using ureq. Validates that request building and
//! response parsing work end-to-end with the actual server, including the
//! binary spreadsheet routes.

use chrono::{FixedOffset, TimeZone};
use registry_client::{
    ApiError, BreakersClient, HttpMethod, HttpResponse, RetireesClient, UpdatesClient,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the client
/// handle status interpretation. Bodies are read as raw bytes because two
/// routes return binary payloads.
fn execute(req: registry_client::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_vec().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn retiree_list_and_search() {
    let base = start_server();
    let client = RetireesClient::new(&base);

    // Full list — the seeded dataset, unmodified.
    let retirees = client.parse_list(execute(client.build_list())).unwrap();
    assert_eq!(retirees.len(), 2);
    assert_eq!(retirees[0].snils, "112-233-445 95");
    assert_eq!(retirees[0].full_name, "Иванова Мария Петровна");

    // Cyrillic search term crosses the wire percent-encoded and matches.
    let found = client.parse_find(execute(client.build_find("Сидоров"))).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].snils, "987-654-321 00");

    // No match — empty array, not an error.
    let found = client.parse_find(execute(client.build_find("nobody"))).unwrap();
    assert!(found.is_empty());
}

#[test]
fn updates_lifecycle() {
    let base = start_server();
    let client = UpdatesClient::new(&base);

    // Feed envelope.
    let info = client.parse_list(execute(client.build_list())).unwrap();
    assert_eq!(info.status, "ok");
    assert_eq!(info.rstk.len(), 2);
    assert_eq!(info.stat.sales, 1500);
    assert_eq!(info.errors_data.len(), 1);

    // Delete one RSTK record; the feed shrinks.
    let ack = client
        .parse_delete_entry(execute(client.build_delete_entry(1)))
        .unwrap();
    assert_eq!(ack.status, "ok");
    let info = client.parse_list(execute(client.build_list())).unwrap();
    assert_eq!(info.rstk.len(), 1);
    assert_eq!(info.rstk[0].id, 2);

    // Deleting an id that never existed is still acknowledged.
    let ack = client
        .parse_delete_entry(execute(client.build_delete_entry(9999)))
        .unwrap();
    assert_eq!(ack.status, "ok");

    // Sync trigger returns immediately with the acknowledgment.
    let ack = client
        .parse_trigger_sync(execute(client.build_trigger_sync()))
        .unwrap();
    assert_eq!(ack.status, "ok");

    // Binary export round-trip.
    let tz = FixedOffset::east_opt(3 * 3600).unwrap();
    let from = tz.with_ymd_and_hms(2022, 4, 1, 10, 0, 0).unwrap();
    let to = tz.with_ymd_and_hms(2022, 4, 30, 10, 0, 0).unwrap();
    let req = client.build_export_range(from, to).unwrap();
    let bytes = client.parse_export_range(execute(req)).unwrap();
    assert_eq!(&bytes[..4], &[0x50, 0x4b, 0x03, 0x04]);
}

#[test]
fn breakers_lifecycle() {
    let base = start_server();
    let client = BreakersClient::new(&base);

    let rows = client.parse_list(execute(client.build_list())).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].checked);
    let snils = rows[0].snils.clone();

    // Mark checked; the stored record is echoed back.
    let breaker = client
        .parse_check(execute(client.build_check(&snils, true)))
        .unwrap();
    assert_eq!(breaker.snils, snils);
    assert!(breaker.checked);

    // The list now reflects the flag.
    let rows = client.parse_list(execute(client.build_list())).unwrap();
    assert!(rows[0].checked);

    // Mark unchecked again.
    let breaker = client
        .parse_check(execute(client.build_check(&snils, false)))
        .unwrap();
    assert!(!breaker.checked);

    // Binary export of the current rows.
    let req = client.build_export(&rows).unwrap();
    let bytes = client.parse_export(execute(req)).unwrap();
    assert_eq!(&bytes[..4], &[0x50, 0x4b, 0x03, 0x04]);

    // Empty export payload — backend rejects, error propagates unmodified.
    let req = client.build_export(&[]).unwrap();
    let err = client.parse_export(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 400, .. }));
}
