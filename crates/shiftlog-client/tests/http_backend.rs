//! HttpBackend against a loopback HTTP stub
//!
//! The stub accepts a single connection, captures the request, and replies
//! with a canned status and body.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use shiftlog_client::{HttpBackend, LocalShiftBackend, SubmitError};
use shiftlog_core::{
    DowntimeRecord, OperatorType, PackingRecord, ProductionRecord, Submission, TestType,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the stub saw
#[derive(Debug)]
struct CapturedRequest {
    request_line: String,
    headers: Vec<String>,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }

    fn header(&self, name: &str) -> Option<String> {
        let prefix = format!("{}:", name.to_ascii_lowercase());
        self.headers.iter().find_map(|h| {
            h.to_ascii_lowercase()
                .strip_prefix(&prefix)
                .map(|v| v.trim().to_string())
        })
    }
}

/// Serve exactly one request, answering with `status` and `body`
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.split("\r\n").filter(|l| !l.is_empty());
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers: Vec<String> = lines.map(str::to_string).collect();

        let content_length = headers
            .iter()
            .find_map(|h| {
                h.to_ascii_lowercase()
                    .strip_prefix("content-length:")
                    .and_then(|v| v.trim().parse::<usize>().ok())
            })
            .unwrap_or(0);

        let mut request_body = buf[header_end..].to_vec();
        while request_body.len() < content_length {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request_body.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        CapturedRequest {
            request_line,
            headers,
            body: request_body,
        }
    });

    (base_url, handle)
}

fn production() -> Submission {
    ProductionRecord {
        operator_name: "Asha".into(),
        operator_id: "E-104".into(),
        operator_type: OperatorType::Onrole,
        test_type: TestType::Hv,
        test_station: "HSPA-23".into(),
        device_type: "7SR10".into(),
        production_count: 12,
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 3, 0, 0).unwrap(),
    }
    .into()
}

fn packing() -> Submission {
    PackingRecord {
        operator_name: "Meena".into(),
        device_type: "RM E6".into(),
        operator_type: OperatorType::Apprentices,
        job_type: "Boxing".into(),
        packing_count: 30,
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 9, 45, 0).unwrap(),
    }
    .into()
}

fn downtime() -> Submission {
    DowntimeRecord {
        operator_name: "Ravi".into(),
        description: "Conveyor jam\nline 2".into(),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 15, 0).unwrap(),
    }
    .into()
}

#[tokio::test]
async fn test_production_posts_json_and_returns_shift() {
    let (base_url, server) = serve_once(200, r#"{"shift":"Morning"}"#).await;
    let backend = HttpBackend::new(base_url);

    let receipt = backend.submit(&production()).await.unwrap();
    assert_eq!(receipt.shift, "Morning");

    let req = server.await.unwrap();
    assert_eq!(req.request_line, "POST /api/production HTTP/1.1");
    assert_eq!(req.header("content-type").as_deref(), Some("application/json"));
    assert_eq!(
        req.json(),
        json!({
            "operator_name": "Asha",
            "operator_id": "E-104",
            "operator_type": "Onrole",
            "test_type": "HV",
            "test_station": "HSPA-23",
            "device_type": "7SR10",
            "production_count": 12,
            "timestamp": "2024-03-01T03:00:00.000Z"
        })
    );
}

#[tokio::test]
async fn test_packing_goes_to_packing_endpoint() {
    let (base_url, server) = serve_once(200, r#"{"shift":"Afternoon"}"#).await;
    let backend = HttpBackend::new(format!("{}/", base_url));

    let receipt = backend.submit(&packing()).await.unwrap();
    assert_eq!(receipt.shift, "Afternoon");

    let req = server.await.unwrap();
    assert_eq!(req.request_line, "POST /api/packing HTTP/1.1");
    assert_eq!(req.json()["packing_count"], 30);
    assert_eq!(req.json()["job_type"], "Boxing");
}

#[tokio::test]
async fn test_downtime_body_keeps_newlines() {
    let (base_url, server) = serve_once(200, r#"{"shift":"Night"}"#).await;
    let backend = HttpBackend::new(base_url);

    backend.submit(&downtime()).await.unwrap();

    let req = server.await.unwrap();
    assert_eq!(req.request_line, "POST /api/downtime HTTP/1.1");
    let body = req.json();
    assert_eq!(body.as_object().unwrap().len(), 3);
    assert_eq!(body["description"], "Conveyor jam\nline 2");
}

#[tokio::test]
async fn test_rejection_surfaces_detail() {
    let (base_url, server) = serve_once(400, r#"{"detail":"Invalid device"}"#).await;
    let backend = HttpBackend::new(base_url);

    let err = backend.submit(&production()).await.unwrap_err();
    assert_eq!(
        err,
        SubmitError::rejected(400, Some("Invalid device".to_string()))
    );
    assert_eq!(err.user_message(), "Invalid device");
    server.await.unwrap();
}

#[tokio::test]
async fn test_rejection_without_detail_reads_failed() {
    let (base_url, server) = serve_once(500, "{}").await;
    let backend = HttpBackend::new(base_url);

    let err = backend.submit(&downtime()).await.unwrap_err();
    assert_eq!(err.user_message(), "Failed");
    server.await.unwrap();
}

#[tokio::test]
async fn test_non_json_response_is_decode_error() {
    let (base_url, server) = serve_once(200, "<html>oops</html>").await;
    let backend = HttpBackend::new(base_url);

    let err = backend.submit(&packing()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Decode(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nobody is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(format!("http://{}", addr));
    let err = backend.submit(&downtime()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)));
    assert!(!err.user_message().is_empty());
}
