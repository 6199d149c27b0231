use super::*;
use crate::types::EventKind;
use std::io::Write;
use tempfile::NamedTempFile;

const SIGNUP: &str = r#"{
  "url": "https://example.com/signup",
  "title": "Sign up",
  "nodes": [
    { "tag": "form", "children": [
      { "tag": "label", "attributes": { "for": "e1" }, "children": [ { "text": "Email" } ] },
      { "tag": "input", "attributes": { "id": "e1", "name": "email" },
        "layout": { "width": 200, "height": 24, "clientRects": 1 } },
      { "tag": "input", "attributes": { "type": "checkbox", "name": "terms" },
        "layout": { "width": 13, "height": 13 } },
      { "tag": "textarea", "attributes": { "name": "bio" }, "children": [ { "text": "old" } ] },
      { "tag": "select", "attributes": { "name": "country" }, "children": [
        { "tag": "option", "attributes": { "value": "" }, "children": [ { "text": "Pick" } ] },
        { "tag": "option", "attributes": { "value": "fr" }, "children": [ { "text": "France" } ] }
      ] }
    ] }
  ]
}"#;

#[test]
fn test_from_snapshot_builds_tree() {
    let snapshot = PageSnapshot::from_json_str(SIGNUP).unwrap();
    let doc = Document::from_snapshot(&snapshot).unwrap();

    assert_eq!(doc.url(), "https://example.com/signup");
    assert_eq!(doc.title(), "Sign up");
    let input = doc.by_id("e1").unwrap();
    assert!(doc.is_rendered(input));
    assert_eq!(doc.label_for("e1").map(|l| doc.text_content(l)), Some("Email".to_string()));
    assert_eq!(doc.elements_by_tag_names(&["input", "textarea", "select"]).len(), 4);
}

#[test]
fn test_to_snapshot_reflects_form_state() {
    let snapshot = PageSnapshot::from_json_str(SIGNUP).unwrap();
    let mut doc = Document::from_snapshot(&snapshot).unwrap();

    let email = doc.by_id("e1").unwrap();
    let terms = doc.by_name("terms")[0];
    let bio = doc.by_name("bio")[0];
    let country = doc.by_name("country")[0];

    doc.set_value(email, "jane@example.com").unwrap();
    doc.set_checked(terms, true).unwrap();
    doc.set_value(bio, "new bio").unwrap();
    doc.set_value(country, "fr").unwrap();
    doc.dispatch_event(email, EventKind::Change, true).unwrap();

    let out = doc.to_snapshot();
    let json = serde_json::to_value(&out).unwrap();
    let form = &json["nodes"][0]["children"];
    assert_eq!(form[1]["attributes"]["value"], "jane@example.com");
    assert_eq!(form[2]["attributes"]["checked"], "");
    assert_eq!(form[3]["children"][0]["text"], "new bio");
    assert!(form[4]["children"][0]["attributes"].get("selected").is_none());
    assert_eq!(form[4]["children"][1]["attributes"]["selected"], "");
    assert_eq!(json["events"][0]["type"], "change");
    assert!(form[0].get("layout").is_none());
}

#[test]
fn test_snapshot_rejects_empty_tag() {
    let snapshot = PageSnapshot::from_json_str(r#"{"nodes": [{"tag": " "}]}"#).unwrap();
    let err = Document::from_snapshot(&snapshot).unwrap_err();
    assert!(matches!(err, DomError::InvalidSnapshot(_)));
}

#[test]
fn test_snapshot_invalid_json() {
    assert!(matches!(
        PageSnapshot::from_json_str("{ not json"),
        Err(DomError::Json(_))
    ));
}

#[test]
fn test_load_and_save_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", SIGNUP).unwrap();

    let snapshot = PageSnapshot::load(file.path()).unwrap();
    assert_eq!(snapshot.nodes.len(), 1);

    let out = NamedTempFile::new().unwrap();
    snapshot.save(out.path()).unwrap();
    let reloaded = PageSnapshot::load(out.path()).unwrap();
    assert_eq!(reloaded.nodes, snapshot.nodes);
}

#[test]
fn test_load_missing_file() {
    let result = PageSnapshot::load(Path::new("/nonexistent/page.json"));
    assert!(matches!(result, Err(DomError::Io(_))));
}
