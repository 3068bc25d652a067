//! Tests against the real ZooZ sandbox.
//!
//! Require `ZOOZ_UNIQUE_ID` and `ZOOZ_APP_KEY`; run with
//! `cargo test --test sandbox_live -- --ignored`.

use zooz_client::{Credentials, EnvConfig, Environment, GatewayClient};

fn sandbox_client() -> GatewayClient {
    let env = EnvConfig::load();
    let (Some(unique_id), Some(app_key)) = (env.unique_id, env.app_key) else {
        panic!("INVALID KEYS: set ZOOZ_UNIQUE_ID and ZOOZ_APP_KEY");
    };

    GatewayClient::new(Credentials::secured(unique_id, app_key))
        .expect("Failed to create client")
        .with_environment(Environment::Sandbox)
}

#[test]
fn test_sandbox_urls() {
    let client = GatewayClient::new(Credentials::new())
        .expect("Failed to create client")
        .with_environment(Environment::Sandbox);

    assert!(client.secured_url().contains("sandbox."));
    assert!(client.extended_url().contains("sandbox."));
}

#[tokio::test]
#[ignore = "requires ZooZ sandbox credentials"]
async fn test_open_transaction() {
    let client = sandbox_client();

    let response = client
        .open_transaction(12, "GBP", None)
        .await
        .expect("open transaction should succeed");
    assert!(response.contains_key("token"));

    let err = client
        .open_transaction("invalid number", "GBP", None)
        .await
        .unwrap_err();
    assert!(err.is_gateway());

    let err = client.open_transaction(12, "INVALID", None).await.unwrap_err();
    assert!(err.is_gateway());
}
