//! Tests that an unreachable database aborts the run before any catalog query.

use hn_bootstrap::{connect, run_bootstrap, Config, DatabaseError};

/// A local port with nothing listening on it.
async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

fn config_with_port(port: u16) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port,
        database_url: None,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_connect_refused_is_connect_error() {
    let config = config_with_port(closed_port().await);
    let result = connect(&config).await;
    assert!(
        matches!(result, Err(DatabaseError::ConnectError(_))),
        "expected ConnectError, got {:?}",
        result.err()
    );
}

#[tokio::test]
async fn test_run_bootstrap_stops_at_connect() {
    let config = config_with_port(closed_port().await);
    let err = run_bootstrap(config)
        .await
        .expect_err("bootstrap must fail without a server");

    let db_err = err
        .downcast_ref::<DatabaseError>()
        .expect("error chain should carry a DatabaseError");
    assert!(matches!(db_err, DatabaseError::ConnectError(_)));
    assert!(format!("{:#}", err).contains("Failed to connect to database"));
}

#[tokio::test]
async fn test_invalid_database_url_is_connect_error() {
    let config = Config {
        database_url: Some("not a url".to_string()),
        ..Default::default()
    };
    let result = connect(&config).await;
    assert!(matches!(result, Err(DatabaseError::ConnectError(_))));
}
