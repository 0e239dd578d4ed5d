//! Integration tests for configuration mutations.
//!
//! Each mutation is a PUT whose response is merged into the local
//! snapshot before listeners are notified.

mod common;

use std::sync::{Arc, Mutex};

use configurator_client::{ConfiguratorError, RequirementOptions, StepImageOptions};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{anonymous_context, configuration_json, mount_open, CONFIGURATOR};

#[tokio::test]
async fn test_update_requirement_request() {
    let server = MockServer::start().await;
    mount_open(&server, "cfg-1", configuration_json("cfg-1")).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1", CONFIGURATOR)))
        .and(query_param("ignoreConflicts", "false"))
        .and(query_param("includeSearchbarResults", "false"))
        .and(body_json(json!({"featureModelNodeId": "node-1", "isSelection": true, "value": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "cfg-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    configuration
        .update_requirement("node-1", true, 1.0, RequirementOptions::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|r| r.method.as_str() == "PUT")
        .unwrap();
    assert_eq!(
        put.headers.get("content-type").unwrap(),
        "application/json"
    );

    let body: Value = put.body_json().unwrap();
    assert_eq!(
        body,
        json!({"featureModelNodeId": "node-1", "isSelection": true, "value": 1})
    );
    assert_eq!(
        std::str::from_utf8(&put.body).unwrap(),
        r#"{"featureModelNodeId":"node-1","isSelection":true,"value":1}"#
    );
}

#[tokio::test]
async fn test_update_requirement_flags() {
    let server = MockServer::start().await;
    mount_open(&server, "cfg-1", configuration_json("cfg-1")).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1", CONFIGURATOR)))
        .and(query_param("ignoreConflicts", "true"))
        .and(query_param("includeSearchbarResults", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    configuration
        .update_requirement(
            "node-1",
            false,
            0.0,
            RequirementOptions {
                ignore_conflicts: true,
                include_searchbar_results: true,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_mutation_merges_present_keys() {
    let server = MockServer::start().await;
    mount_open(&server, "cfg-1", configuration_json("cfg-1")).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1/text", CONFIGURATOR)))
        .and(body_json(json!({"featureModelNodeId": "node-1", "textValue": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalPrice": 250,
            "textValues": {"node-1": "hello"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    configuration.update_text("node-1", "hello").await.unwrap();

    let data = configuration.data();
    assert_eq!(data.total_price, Some(250.0));
    assert_eq!(data.text_values.get("node-1").map(String::as_str), Some("hello"));
    // Absent keys keep their previous values.
    assert_eq!(data.name.as_deref(), Some("Bike"));
    assert_eq!(data.steps.len(), 2);
}

#[tokio::test]
async fn test_mutation_clears_conflicts() {
    let server = MockServer::start().await;

    let mut opened = configuration_json("cfg-1");
    opened["conflicts"] = json!([{"requestedValue": 1, "actualValue": 0}]);
    mount_open(&server, "cfg-1", opened).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1", CONFIGURATOR)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Bike"})))
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    assert_eq!(configuration.conflicts().map(|c| c.len()), Some(1));

    configuration
        .update_requirement("node-1", true, 1.0, RequirementOptions::default())
        .await
        .unwrap();

    assert!(configuration.conflicts().is_none());
}

#[tokio::test]
async fn test_mutation_keeps_reported_conflicts() {
    let server = MockServer::start().await;
    mount_open(&server, "cfg-1", configuration_json("cfg-1")).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1", CONFIGURATOR)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "conflicts": [{"requestedValue": 2, "actualValue": 1}]
        })))
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    configuration
        .update_requirement("node-1", true, 2.0, RequirementOptions::default())
        .await
        .unwrap();

    let conflicts = configuration.conflicts().unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].requested_value, 2.0);
}

#[tokio::test]
async fn test_mutation_is_visible_through_the_context() {
    let server = MockServer::start().await;
    mount_open(&server, "cfg-1", configuration_json("cfg-1")).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1/updatename", CONFIGURATOR)))
        .and(body_json(json!({"configurationId": "cfg-1", "name": "Road bike"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Road bike"})))
        .expect(1)
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    configuration.update_name("Road bike").await.unwrap();

    let stored = &context.configurations()[0];
    assert_eq!(stored.name().as_deref(), Some("Road bike"));
}

#[tokio::test]
async fn test_listeners_fire_on_mutation_only() {
    let server = MockServer::start().await;
    mount_open(&server, "cfg-1", configuration_json("cfg-1")).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1/updatelinkedconfigurationcardinality", CONFIGURATOR)))
        .and(body_json(json!({"cardinality": 3, "parentNodeId": "parent-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalPrice": 300})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/cfg-1/pdf", CONFIGURATOR)))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"%PDF-1.7".to_vec(), "application/pdf"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();

    let seen: Arc<Mutex<Vec<Option<f64>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    context.on_update(move |updated| {
        sink.lock().unwrap().push(updated.data().total_price);
    });

    configuration
        .update_cardinality("parent-1", 3)
        .await
        .unwrap();
    let document = configuration.pdf().await.unwrap();

    assert_eq!(&document[..], b"%PDF-1.7");
    // The listener saw the merged snapshot, and the PDF did not notify.
    assert_eq!(*seen.lock().unwrap(), vec![Some(300.0)]);
}

#[tokio::test]
async fn test_change_language_sends_json_string() {
    let server = MockServer::start().await;
    mount_open(&server, "cfg-1", configuration_json("cfg-1")).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1/changeLanguage", CONFIGURATOR)))
        .and(body_json(json!("en")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"language": "en"})))
        .expect(1)
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    configuration.change_language("en").await.unwrap();

    assert_eq!(configuration.language().as_deref(), Some("en"));
}

#[tokio::test]
async fn test_update_image_request() {
    let server = MockServer::start().await;
    mount_open(&server, "cfg-1", configuration_json("cfg-1")).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1/image", CONFIGURATOR)))
        .and(body_json(json!({
            "featureModelNodeId": "node-1",
            "textValue": "https://cdn.example.com/logo.png"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    configuration
        .update_image("node-1", "https://cdn.example.com/logo.png")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_step_image_query() {
    let server = MockServer::start().await;
    mount_open(&server, "cfg-1", configuration_json("cfg-1")).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/cfg-1/image", CONFIGURATOR)))
        .and(query_param("stepId", "step-1"))
        .and(query_param("size", "1080"))
        .and(query_param("background", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0x89, 0x50, 0x4e, 0x47], "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    let image = configuration
        .step_image("step-1", StepImageOptions::default())
        .await
        .unwrap();

    assert_eq!(image.len(), 4);
    assert_eq!(configuration.data(), context.configurations()[0].data());
}

#[tokio::test]
async fn test_failed_mutation_leaves_state_untouched() {
    let server = MockServer::start().await;

    let mut opened = configuration_json("cfg-1");
    opened["conflicts"] = json!([{"requestedValue": 1, "actualValue": 0}]);
    mount_open(&server, "cfg-1", opened).await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/cfg-1/text", CONFIGURATOR)))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "Conflict"})))
        .mount(&server)
        .await;

    let context = anonymous_context(&server);
    let configuration = context.open_configuration("cfg-1", false).await.unwrap();
    let before = configuration.data();

    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    context.on_update(move |_| *counter.lock().unwrap() += 1);

    let error = configuration.update_text("node-1", "x").await.unwrap_err();

    assert!(matches!(error, ConfiguratorError::Http(ref e) if e.status == 409));
    assert_eq!(configuration.data(), before);
    assert_eq!(*calls.lock().unwrap(), 0);
}
