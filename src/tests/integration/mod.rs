//! Integration tests driving the adapter against a mock GHash.io endpoint

use futures::future::join_all;
use mockito::{Matcher, Server};
use std::sync::Arc;

use crate::config::{AccountConfig, AppConfig};
use crate::domain::provider::MiningProvider;
use crate::infrastructure::adapters::{default_registry, fetch_reports, SUPPORTED_CURRENCIES};
use crate::shared::error::{AccountFetchError, AppError};
use crate::tests::common::{fixtures, HASHRATE_PATH};
use crate::tests::config;

#[tokio::test]
async fn test_fetch_balances_success() {
    config::init();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", HASHRATE_PATH)
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::Exact(fixtures::alice_body()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"last5m": 12.5, "last15m": 12.1, "last1h": 11.9}"#)
        .create_async()
        .await;

    let (adapter, throttle) = fixtures::fixed_nonce_adapter(&server.url());
    let result = adapter.fetch_balances(&fixtures::alice()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(throttle.calls(), 1);
    assert_eq!(result.len(), SUPPORTED_CURRENCIES.len());
    for currency in SUPPORTED_CURRENCIES {
        assert_eq!(result.get(currency).unwrap().hashrate, 12.5 * 1_000_000.0);
    }
    assert_eq!(result.aggregate_hashrate(), Some(12_500_000.0));
}

#[tokio::test]
async fn test_remote_error_message_is_preserved() {
    config::init();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", HASHRATE_PATH)
        .with_status(200)
        .with_body(r#"{"error": "bad signature"}"#)
        .create_async()
        .await;

    let (adapter, _) = fixtures::adapter(&server.url());
    let err = adapter.fetch_balances(&fixtures::alice()).await.unwrap_err();

    assert_eq!(err, AccountFetchError::RemoteApplication("bad signature".to_string()));
    assert_eq!(err.to_string(), "bad signature");
}

#[tokio::test]
async fn test_http_500_preserves_body() {
    config::init();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", HASHRATE_PATH)
        .with_status(500)
        .with_body("Internal pool failure")
        .create_async()
        .await;

    let (adapter, _) = fixtures::adapter(&server.url());
    let err = adapter.fetch_balances(&fixtures::alice()).await.unwrap_err();

    match &err {
        AccountFetchError::Transport { status, body, .. } => {
            assert_eq!(*status, Some(500));
            assert_eq!(body.as_deref(), Some("Internal pool failure"));
        }
        other => panic!("expected transport error, got {:?}", other),
    }
    assert_eq!(err.to_string(), "Internal pool failure");
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    config::init();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", HASHRATE_PATH)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let (adapter, _) = fixtures::adapter(&server.url());
    let err = adapter.fetch_balances(&fixtures::alice()).await.unwrap_err();

    assert!(matches!(err, AccountFetchError::Malformed(_)));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    config::init();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (adapter, _) = fixtures::adapter(&format!("http://{}", addr));
    let err = adapter.fetch_balances(&fixtures::alice()).await.unwrap_err();

    assert_eq!(err.kind(), "transport");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_missing_field_never_reaches_network() {
    config::init();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", HASHRATE_PATH)
        .expect(0)
        .create_async()
        .await;

    let account = crate::domain::Account::new().with("api_username", "alice");
    let (adapter, _) = fixtures::adapter(&server.url());
    let err = adapter.fetch_balances(&account).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err, AccountFetchError::MissingField("api_key"));
}

#[tokio::test]
async fn test_repeated_fetches_are_identical() {
    config::init();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", HASHRATE_PATH)
        .match_body(Matcher::Regex(
            "^key=KEY1234567890123456789&signature=[0-9A-F]{64}&nonce=[0-9]+$".to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"last5m": "3.25"}"#)
        .expect(2)
        .create_async()
        .await;

    let (adapter, throttle) = fixtures::adapter(&server.url());
    let first = adapter.fetch_balances(&fixtures::alice()).await.unwrap();
    let second = adapter.fetch_balances(&fixtures::alice()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(throttle.calls(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_accounts_are_independent() {
    config::init();
    let mut server = Server::new_async().await;
    let _alice = server
        .mock("POST", HASHRATE_PATH)
        .match_body(Matcher::Regex("^key=KEY1234567890123456789&".to_string()))
        .with_status(200)
        .with_body(r#"{"last5m": 1.5}"#)
        .create_async()
        .await;
    let _bob = server
        .mock("POST", HASHRATE_PATH)
        .match_body(Matcher::Regex("^key=BOBKEY12345678901234567&".to_string()))
        .with_status(200)
        .with_body(r#"{"error": "unknown account"}"#)
        .create_async()
        .await;

    let (adapter, throttle) = fixtures::adapter(&server.url());
    let adapter = Arc::new(adapter);
    let accounts = [fixtures::alice(), fixtures::bob()];

    let results = join_all(accounts.iter().map(|a| adapter.fetch_balances(a))).await;

    assert_eq!(throttle.calls(), 2);
    assert_eq!(results[0].as_ref().unwrap().aggregate_hashrate(), Some(1_500_000.0));
    assert_eq!(
        results[1].as_ref().unwrap_err(),
        &AccountFetchError::RemoteApplication("unknown account".to_string())
    );
}

#[tokio::test]
async fn test_default_registry_serves_ghashio() {
    config::init();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", HASHRATE_PATH)
        .with_status(200)
        .with_body(r#"{"last5m": 2}"#)
        .create_async()
        .await;

    let mut app_config = AppConfig::default();
    app_config.provider = fixtures::provider_config(&server.url());
    app_config.throttle.enabled = false;

    let registry = default_registry(&app_config).unwrap();
    assert_eq!(registry.codes().collect::<Vec<_>>(), vec!["ghashio"]);
    assert!(matches!(registry.get("btcguild"), Err(AppError::UnknownProvider(_))));

    let provider = registry.get("ghashio").unwrap();
    assert_eq!(provider.name(), "GHash.io");
    let result = provider.fetch_balances(&fixtures::alice()).await.unwrap();
    assert_eq!(result.aggregate_hashrate(), Some(2_000_000.0));
}

#[tokio::test]
async fn test_interrupted_error_body_keeps_status() {
    use std::io::Write;

    config::init();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", HASHRATE_PATH)
        .with_status(502)
        .with_chunked_body(|w| {
            w.write_all(b"partial gateway page")?;
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "connection reset"))
        })
        .create_async()
        .await;

    let (adapter, _) = fixtures::adapter(&server.url());
    let err = adapter.fetch_balances(&fixtures::alice()).await.unwrap_err();

    assert_eq!(err.kind(), "transport");
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_invalid_account_reported_without_blocking_others() {
    config::init();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", HASHRATE_PATH)
        .match_body(Matcher::Regex("^key=KEY1234567890123456789&".to_string()))
        .with_status(200)
        .with_body(r#"{"last5m": 4}"#)
        .expect(1)
        .create_async()
        .await;

    let accounts = vec![
        AccountConfig {
            label: "rig-1".to_string(),
            api_username: "alice".to_string(),
            api_key: "KEY1234567890123456789".to_string(),
            api_secret: "SECRET1234567890123456".to_string(),
        },
        AccountConfig {
            label: "rig-2".to_string(),
            api_username: "carol".to_string(),
            api_key: "short".to_string(),
            api_secret: "SECRET1234567890123456".to_string(),
        },
    ];

    let (adapter, throttle) = fixtures::adapter(&server.url());
    let reports = fetch_reports(&adapter, &accounts).await.unwrap();

    mock.assert_async().await;
    assert_eq!(throttle.calls(), 1);
    assert_eq!(reports.len(), 2);

    assert_eq!(reports[0].account, "rig-1");
    assert!(reports[0].error.is_none());
    assert_eq!(
        reports[0].result.as_ref().unwrap().aggregate_hashrate(),
        Some(4_000_000.0)
    );

    assert_eq!(reports[1].account, "rig-2");
    assert!(reports[1].result.is_none());
    assert!(reports[1].error.as_deref().unwrap().contains("api_key"));
}
