use robodocs_config::{CliSettings, Config};
use robodocs_renderer::{ExtractPolicy, NodeKind};
use robodocs_site::{
    BuildConfig, DOCUMENT_PAGE_FILE, INFO_PAGE_FILE, StaticSiteBuilder,
};

const SOURCE: &str = "\
Working notes, not published.

```markdown
# Robot Control Guide

Send commands with `POST /api/move`.

## Endpoints

1. Move
2. Turn

```json
{\"direction\": \"forward\"}
```

> Keep the robot on the same network.

---

See [Flask](https://flask.palletsprojects.com).
```
";

fn write_project(dir: &std::path::Path, source: &str) -> std::path::PathBuf {
    std::fs::create_dir_all(dir.join("docs")).unwrap();
    std::fs::write(dir.join("docs/robot-api.md"), source).unwrap();
    let config_path = dir.join("robodocs.toml");
    std::fs::write(&config_path, "[site]\ntitle = \"Robot Site\"\n").unwrap();
    config_path
}

#[test]
fn builds_both_pages() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_project(dir.path(), SOURCE);
    let config = Config::load(Some(&config_path), None).unwrap();

    let builder = StaticSiteBuilder::new(BuildConfig::from_config(&config));
    let report = builder.build(&config.site_resolved.output_dir).unwrap();

    let out = dir.path().join("site");
    assert_eq!(
        report.pages,
        vec![out.join(INFO_PAGE_FILE), out.join(DOCUMENT_PAGE_FILE)]
    );
    assert!(!report.document_fallback);

    let info = std::fs::read_to_string(out.join(INFO_PAGE_FILE)).unwrap();
    assert!(info.contains("<title>Android Robot Control via REST API</title>"));
    assert!(info.contains("GET http://ROBOT_IP:8080/api/status"));

    let doc = std::fs::read_to_string(out.join(DOCUMENT_PAGE_FILE)).unwrap();
    assert!(doc.contains("<title>Robot Control Guide</title>"));
    assert!(!doc.contains("Working notes"));
    assert!(doc.contains(&format!(
        r#"<h1 id="robot-control-guide" class="{}">"#,
        NodeKind::Heading1.style().class
    )));
    assert!(doc.contains(&format!(
        r#"<h2 id="endpoints" class="{}">"#,
        NodeKind::Heading2.style().class
    )));
    assert!(doc.contains(&format!(
        r#"<ol class="{}">"#,
        NodeKind::OrderedList.style().class
    )));
    assert!(doc.contains(r#"<code class="language-json">"#));
    assert!(doc.contains(&format!(
        r#"<blockquote class="{}">"#,
        NodeKind::BlockQuote.style().class
    )));
    assert!(doc.contains(&format!(
        r#"<hr class="{}">"#,
        NodeKind::HorizontalRule.style().class
    )));
    assert!(doc.contains(r#"<a href="https://flask.palletsprojects.com""#));
}

#[test]
fn document_without_block_renders_whole_source() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_project(dir.path(), "Plain document without fences.\n");
    let config = Config::load(Some(&config_path), None).unwrap();

    let report = StaticSiteBuilder::new(BuildConfig::from_config(&config))
        .build(&config.site_resolved.output_dir)
        .unwrap();
    assert!(report.document_fallback);

    let doc = std::fs::read_to_string(dir.path().join("site").join(DOCUMENT_PAGE_FILE)).unwrap();
    assert!(doc.contains("<title>Robot Site</title>"));
    assert!(doc.contains("Plain document without fences."));
}

#[test]
fn cli_settings_select_policy_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_project(dir.path(), SOURCE);
    let out = dir.path().join("public");
    let settings = CliSettings {
        output_dir: Some(out.clone()),
        policy: Some(ExtractPolicy::FirstFenceAfterStart),
        ..CliSettings::default()
    };
    let config = Config::load(Some(&config_path), Some(&settings)).unwrap();

    StaticSiteBuilder::new(BuildConfig::from_config(&config))
        .build(&config.site_resolved.output_dir)
        .unwrap();

    let doc = std::fs::read_to_string(out.join(DOCUMENT_PAGE_FILE)).unwrap();
    // The block now ends at the json fence, so the blockquote is gone.
    assert!(doc.contains("Endpoints"));
    assert!(!doc.contains("Keep the robot on the same network."));
}
