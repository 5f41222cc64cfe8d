//! Sheets persistence tests against a mock HTTP server

use std::collections::HashMap;

use orderdesk::config::settings::SheetsConfig;
use orderdesk::models::order::OrderRecord;
use orderdesk::services::{OrderService, SheetsService};
use orderdesk::state::{Question, QuestionSpec};
use wiremock::matchers::{bearer_token, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sheets_config(base_url: &str) -> SheetsConfig {
    SheetsConfig {
        spreadsheet_id: "sheet-123".to_string(),
        sheet_name: "Orders".to_string(),
        api_token: "test-token".to_string(),
        base_url: base_url.to_string(),
        timeout_seconds: 5,
    }
}

fn sample_record() -> OrderRecord {
    let spec = QuestionSpec::new(vec![
        Question::new("order", "What?"),
        Question::new("name", "Who?"),
    ])
    .unwrap();

    let mut answers = HashMap::new();
    answers.insert("order".to_string(), "pizza".to_string());
    answers.insert("name".to_string(), "Sam".to_string());

    OrderRecord::build(&answers, &spec)
}

#[tokio::test]
async fn append_sends_one_row_in_column_order() {
    let server = MockServer::start().await;
    let record = sample_record();

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/sheet-123/values/Orders:append"))
        .and(query_param("valueInputOption", "RAW"))
        .and(bearer_token("test-token"))
        .and(body_partial_json(serde_json::json!({
            "values": [[record.order_id, "pizza", "Sam"]]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let sheets = SheetsService::new(sheets_config(&server.uri())).unwrap();
    sheets.append(&record).await.unwrap();
}

#[tokio::test]
async fn append_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&server)
        .await;

    let sheets = SheetsService::new(sheets_config(&server.uri())).unwrap();
    let err = sheets.append(&sample_record()).await.unwrap_err();
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn failed_submit_is_kept_and_retried_with_same_order_id() {
    let server = MockServer::start().await;

    // First append fails, the retry succeeds
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(2)
        .mount(&server)
        .await;

    let sheets = SheetsService::new(sheets_config(&server.uri())).unwrap();
    let orders = OrderService::new(sheets);
    let record = sample_record();
    let order_id = record.order_id.clone();

    assert!(orders.submit(42, record).await.is_err());
    assert!(orders.has_pending(42));

    let retried = orders.retry(42).await.unwrap();
    assert_eq!(retried, Some(order_id));
    assert!(!orders.has_pending(42));
}

#[tokio::test]
async fn retry_without_pending_order_is_a_noop() {
    let server = MockServer::start().await;

    let sheets = SheetsService::new(sheets_config(&server.uri())).unwrap();
    let orders = OrderService::new(sheets);

    assert_eq!(orders.retry(7).await.unwrap(), None);
}

#[tokio::test]
async fn successful_submit_clears_pending_state() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let sheets = SheetsService::new(sheets_config(&server.uri())).unwrap();
    let orders = OrderService::new(sheets);

    orders.submit(42, sample_record()).await.unwrap();
    assert!(!orders.has_pending(42));
}
