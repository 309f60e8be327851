use serde_json::json;

use super::*;
use crate::context::PageId;
use crate::context::fixture::{fixture, fixture_with};

#[test]
fn absent_slot_is_not_an_error() {
    assert!(parse_seed(None).unwrap().is_none());
    assert!(parse_seed(Some("null")).unwrap().is_none());
    assert!(parse_seed(Some("  ")).unwrap().is_none());
}

#[test]
fn present_slot_parses_into_context() {
    let raw = serde_json::to_string(&fixture(PageId::Info)).unwrap();
    let ctx = parse_seed(Some(raw.as_str())).unwrap().unwrap();
    assert_eq!(ctx, fixture(PageId::Info));
}

#[test]
fn malformed_slot_is_reported() {
    assert!(parse_seed(Some(r#"{"pageId":"error.tmpl"}"#)).is_err());
    assert!(parse_seed(Some("{not json")).is_err());
}

#[test]
fn seed_script_cannot_close_the_script_element() {
    let overrides = json!({ "message": { "summary": "</script><script>alert(1)</script>" } });
    let ctx = fixture_with(PageId::Error, &overrides).unwrap();
    let script = seed_script(&ctx).unwrap();

    assert!(script.starts_with("<script>window.sentinelCtx = "));
    assert!(script.ends_with(";</script>"));
    assert_eq!(script.matches("</script").count(), 1);
}

#[test]
fn seed_script_payload_reads_back_as_the_same_context() {
    let ctx = fixture_with(PageId::Login, &json!({ "urls": { "basePath": "/a&b" } })).unwrap();
    let script = seed_script(&ctx).unwrap();
    let payload = script
        .trim_start_matches("<script>window.sentinelCtx = ")
        .trim_end_matches(";</script>");
    assert_eq!(parse_seed(Some(payload)).unwrap(), Some(ctx));
}
