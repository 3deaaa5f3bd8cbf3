mod test_utils;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use test_utils::{FailingHost, FakeHost};
use vitrine_core::DeploymentRecord;
use vitrine_models::vercel::to_deployment_payload;
use vitrine_server::site::{build_order, publish_site};

#[tokio::test]
async fn publish_submits_document_and_routing_manifest() {
    let host = FakeHost::returning(DeploymentRecord {
        id: Some("dpl_abc".to_string()),
        url: Some("https://flour-co-a1b2c3.vercel.app".to_string()),
        inspector_url: None,
    });

    let record = publish_site(
        "<html><body>bakery</body></html>",
        Some("Flour & Co"),
        Some("Make a bakery site"),
        &host,
    )
    .await
    .expect("publish succeeds");

    assert_eq!(record.id.as_deref(), Some("dpl_abc"));

    let order = host.last_order();
    assert!(order.name.starts_with("flour-co-"));
    assert_eq!(order.files.len(), 2);
    assert_eq!(order.files[0].path, "index.html");
    assert_eq!(order.files[1].path, "vercel.json");
    assert_eq!(order.source_prompt.as_deref(), Some("Make a bakery site"));
}

#[tokio::test]
async fn host_failure_propagates_with_status_and_body() {
    let err = publish_site("<html></html>", None, None, &FailingHost)
        .await
        .expect_err("provider failure is a hard error");

    let message = err.to_string();
    assert!(message.contains("402"));
    assert!(message.contains("payment required"));
}

/// The full order-to-wire chain: exactly two base64 files, and the
/// decoded manifest carries the catch-all rewrite.
#[test]
fn wire_payload_carries_two_base64_files_with_catch_all_rewrite() {
    let order = build_order("<html><body>x</body></html>", Some("Flour & Co"), None);
    let payload = to_deployment_payload(&order, None, None);
    let value = serde_json::to_value(&payload).expect("serializable");

    let files = value["files"].as_array().expect("files array");
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["file"], "index.html");
    assert_eq!(files[1]["file"], "vercel.json");
    for file in files {
        assert_eq!(file["encoding"], "base64");
    }

    let manifest_bytes = STANDARD
        .decode(files[1]["data"].as_str().expect("data string"))
        .expect("valid base64");
    let manifest: serde_json::Value =
        serde_json::from_slice(&manifest_bytes).expect("manifest is JSON");
    assert_eq!(manifest["rewrites"][0]["source"], "/(.*)");
    assert_eq!(manifest["rewrites"][0]["destination"], "/index.html");
}
