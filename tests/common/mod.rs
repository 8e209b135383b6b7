//! Shared helpers for integration tests against a mock Dynatrace Server.

#![allow(dead_code)]

use std::time::Duration;

use dtserver_sdk::{Config, DynatraceClient};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "admin-password";

/// Routes SDK logs to the test harness; honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn config_for(server: &MockServer) -> Config {
    Config::new(server.uri(), USERNAME, PASSWORD)
        .expect("mock server uri is a valid base url")
        .with_timeout(Duration::from_secs(2))
}

pub fn client_for(server: &MockServer) -> DynatraceClient {
    init_tracing();
    DynatraceClient::new(&config_for(server)).expect("client builds")
}
