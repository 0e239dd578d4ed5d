//! Shared helpers for the client integration tests.

#![allow(dead_code)]

use configurator_client::{ConfiguratorContext, ConfiguratorOptions};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CONFIGURATOR: &str = "/configurator/3/configurator";

/// Anonymous context pointed at the mock server.
pub fn anonymous_context(server: &MockServer) -> ConfiguratorContext {
    ConfiguratorContext::new(
        ConfiguratorOptions::new()
            .with_tenant_id("tenant-1")
            .with_api_url(server.uri()),
    )
}

/// A configuration response with one step.
pub fn configuration_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Bike",
        "language": "nl",
        "totalPrice": 100,
        "steps": [{"id": "step-1", "title": "Frame"}, {"id": "step-2"}],
        "linkedConfigurationModels": [],
    })
}

/// Mounts an `open` endpoint answering with `body`.
pub async fn mount_open(server: &MockServer, id: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/open/{}", CONFIGURATOR, id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
