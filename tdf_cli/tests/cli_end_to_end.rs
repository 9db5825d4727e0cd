use std::process::{Command, Output};

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runs the `tdf` binary against the mock server without blocking the runtime.
async fn run_tdf(server: &MockServer, args: &[&str]) -> Output {
    let port = server.address().port().to_string();
    let mut full: Vec<String> = vec![
        "--hostname".to_string(),
        "127.0.0.1".to_string(),
        "--port".to_string(),
        port,
        "--compact".to_string(),
    ];
    full.extend(args.iter().map(|a| a.to_string()));

    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_tdf"))
            .args(&full)
            .env_remove("TDF_AGENT_ID")
            .env_remove("TDF_API_KEY")
            .output()
            .expect("failed to run tdf")
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn all_histories_prints_server_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/allhistories"))
        .and(query_param("select", "bid"))
        .and(query_param("n", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"GOOG":[1,2,3]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_tdf(&server, &["all-histories", "--select", "bid", "--n", "3"]).await;
    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, serde_json::json!({"GOOG": [1, 2, 3]}));
}

#[tokio::test(flavor = "multi_thread")]
async fn trade_with_rejected_key_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agents/trade/1"))
        .and(query_param("apikey", "bad"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("Not authorized to operate on agent."),
        )
        .mount(&server)
        .await;

    let output = run_tdf(
        &server,
        &["trade", "--agent-id", "1", "--api-key", "bad", "GOOG=5"],
    )
    .await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unauthorized. Invalid apiKey."));
    assert!(output.stdout.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn agent_status_without_credentials_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_tdf(&server, &["agent-status"]).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--agent-id"));
}
