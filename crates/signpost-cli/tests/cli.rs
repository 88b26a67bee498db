use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture() -> PathBuf {
    let path = repo_root().join("fixtures").join("decision-tree.html");
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn run(args: &[&str]) -> Output {
    let exe = assert_cmd::cargo_bin!("signpost-cli");
    Command::new(exe)
        .current_dir(repo_root())
        .env_remove("SIGNPOST_LOG")
        .args(args)
        .output()
        .expect("run signpost-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn keys_lists_every_result_key() {
    let output = run(&["keys"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let keys = text.lines().collect::<Vec<_>>();
    assert_eq!(keys.len(), 23);
    assert_eq!(keys[0], "opensearch-basic");
    assert!(keys.contains(&"technical-rag"));
}

#[test]
fn resolve_falls_back_for_unknown_keys() {
    let output = run(&["resolve", "does-not-exist"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["title"], "Recommendation Not Found");
    assert_eq!(value["services"], serde_json::json!([]));

    let output = run(&["resolve", "opensearch-basic"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["services"][0]["name"], "Amazon OpenSearch Service");
}

#[test]
fn render_writes_the_fragment() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("result.html");
    let output = run(&[
        "render",
        "--out",
        out.to_string_lossy().as_ref(),
        "legal-rag",
    ]);
    assert!(output.status.success());

    let html = fs::read_to_string(&out).expect("read fragment");
    assert!(html.starts_with(r#"<div class="result-content">"#));
    assert_eq!(html.matches(r#"class="result-service""#).count(), 1);
    assert!(html.contains(r#"href="https://aws.amazon.com/textract/""#));
}

#[test]
fn parse_prints_the_tree_in_document_order() {
    let fixture = fixture();
    let output = run(&["parse", "--strict", fixture.to_string_lossy().as_ref()]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let nodes = value["nodes"].as_object().expect("nodes object");
    assert_eq!(nodes.keys().next().map(String::as_str), Some("start-node"));
    assert_eq!(nodes.len(), 9);
    assert_eq!(value["pillars"], serde_json::json!(["performance", "security", "cost"]));
}

#[test]
fn validate_accepts_the_fixture() {
    let fixture = fixture();
    let output = run(&["validate", "--strict", fixture.to_string_lossy().as_ref()]);
    assert!(output.status.success(), "{}", stdout(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn validate_reports_problems_and_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let page = tmp.path().join("broken.html");
    fs::write(
        &page,
        r#"<div class="decision-node active" id="start-node">
  <button class="option-btn" data-next="nowhere">Lost</button>
  <button class="option-btn" data-result="no-such-key">Mystery</button>
</div>"#,
    )
    .expect("write page");

    let output = run(&["validate", page.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("results container `#results` is missing"), "{text}");
    assert!(text.contains("node `start-node` points at unknown node `nowhere`"), "{text}");
    assert!(text.contains("unknown result key `no-such-key`"), "{text}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("3 problems found"));
}

#[test]
fn walk_replays_clicks_onto_the_page() {
    let fixture = fixture();
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("page.html");

    let exe = assert_cmd::cargo_bin!("signpost-cli");
    Command::new(exe)
        .current_dir(repo_root())
        .args([
            "walk",
            "--click",
            "next:rag-purpose",
            "--click",
            "result:customer-support-rag",
            "--click",
            "copy:hello",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let html = fs::read_to_string(&out).expect("read page");
    assert!(html.contains(r#"<div class="decision-node active" id="rag-purpose">"#));
    assert!(html.contains(r#"<div class="decision-node" id="start-node">"#));
    assert!(html.contains(r#"id="results" class="results active""#));
    assert!(html.contains("result-title"));
    assert!(html.contains("Copied to clipboard!"));
}

#[test]
fn walk_state_reports_timers_and_navigation() {
    let fixture = fixture();
    let output = run(&[
        "walk",
        "--state",
        "--click",
        "pillar:security",
        "--click",
        "tick:1000",
        "--click",
        "next:media-type",
        "--click",
        "next:missing",
        fixture.to_string_lossy().as_ref(),
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["current"], "media-type");
    assert_eq!(value["resultsVisible"], false);
    assert_eq!(value["nowMs"], 1000);
    assert_eq!(value["pendingTimers"], 1);
    assert_eq!(
        value["pillars"],
        serde_json::json!({"kind": "highlighted", "pillar": "security"})
    );
}

#[test]
fn walk_honors_the_config_file() {
    let fixture = fixture();
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("config.json");
    fs::write(&config, r#"{"startNode": "intro"}"#).expect("write config");

    let output = run(&[
        "walk",
        "--config",
        config.to_string_lossy().as_ref(),
        fixture.to_string_lossy().as_ref(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("intro"));
}

#[test]
fn walk_scroll_spy_follows_the_layout_file() {
    let fixture = fixture();
    let tmp = tempfile::tempdir().expect("tempdir");
    let layout = tmp.path().join("layout.json");
    fs::write(
        &layout,
        r#"[{"id": "decision-tree", "top": 600}, {"id": "pillars", "top": 1400}]"#,
    )
    .expect("write layout");

    let walk = |y: &str| {
        let click = format!("scroll:{y}");
        let output = run(&[
            "walk",
            "--state",
            "--layout",
            layout.to_string_lossy().as_ref(),
            "--click",
            &click,
            fixture.to_string_lossy().as_ref(),
        ]);
        assert!(output.status.success(), "{output:?}");
        let state: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("state json");
        state["nav"].clone()
    };

    assert_eq!(
        walk("1300"),
        serde_json::json!({"kind": "section", "section": "pillars"})
    );
    assert_eq!(
        walk("450"),
        serde_json::json!({"kind": "section", "section": "decision-tree"})
    );
    assert_eq!(walk("0"), serde_json::json!({"kind": "cleared"}));
}

#[test]
fn walk_rejects_a_malformed_layout_file() {
    let fixture = fixture();
    let tmp = tempfile::tempdir().expect("tempdir");
    let layout = tmp.path().join("layout.json");
    fs::write(&layout, r#"{"id": "pillars"}"#).expect("write layout");

    let output = run(&[
        "walk",
        "--layout",
        layout.to_string_lossy().as_ref(),
        fixture.to_string_lossy().as_ref(),
    ]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unknown_click_actions_are_usage_errors() {
    let exe = assert_cmd::cargo_bin!("signpost-cli");
    Command::new(exe)
        .args(["walk", "--click", "jump:start-node"])
        .assert()
        .code(2);
}
