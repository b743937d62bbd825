use super::*;

#[test]
fn request_sets_fields() {
    let frame = Frame::request("grid:click", Data::new());
    assert_eq!(frame.syscall, "grid:click");
    assert_eq!(frame.status, Status::Request);
    assert!(frame.parent_id.is_none());
    assert!(frame.view_id.is_none());
    assert!(frame.ts > 0);
}

#[test]
fn reply_inherits_context() {
    let view_id = Uuid::new_v4();
    let req = Frame::request("grid:select", Data::new()).with_view_id(view_id);
    let item = req.item(Data::new());

    assert_eq!(item.parent_id, Some(req.id));
    assert_eq!(item.view_id, Some(view_id));
    assert_eq!(item.syscall, "grid:select");
    assert_eq!(item.status, Status::Item);
}

#[test]
fn notification_is_item_with_own_syscall() {
    let req = Frame::request("grid:click", Data::new());
    let note = req.notification("Clicked row 1 component button column 0", 5000);

    assert_eq!(note.status, Status::Item);
    assert_eq!(note.parent_id, Some(req.id));
    assert_eq!(note.syscall, NOTIFICATION_SHOW);
    assert_eq!(note.data_str(FRAME_MESSAGE), Some("Clicked row 1 component button column 0"));
    assert_eq!(note.data_u64(FRAME_DURATION_MS), Some(5000));
}

#[test]
fn done_reply_is_empty_and_correlated() {
    let req = Frame::request("grid:click", Data::new());
    let done = req.done();
    assert_eq!(done.status, Status::Done);
    assert_eq!(done.parent_id, Some(req.id));
    assert!(done.data.is_empty());
}

#[test]
fn data_accessors_read_typed_fields() {
    let frame = Frame::request("grid:select", Data::new())
        .with_data("row", 12)
        .with_data("value", "Two")
        .with_data("column", -1);
    assert_eq!(frame.data_u64("row"), Some(12));
    assert_eq!(frame.data_str("value"), Some("Two"));
    assert_eq!(frame.data_u64("column"), None);
    assert_eq!(frame.data_u64("missing"), None);
}

#[test]
fn error_from_typed() {
    #[derive(Debug, thiserror::Error)]
    #[error("not found")]
    struct NotFound;

    impl ErrorCode for NotFound {
        fn error_code(&self) -> &'static str {
            "E_NOT_FOUND"
        }
    }

    let req = Frame::request("grid:click", Data::new());
    let err = req.error_from(&NotFound);

    assert_eq!(err.status, Status::Error);
    assert_eq!(err.data.get("code").and_then(|v| v.as_str()), Some("E_NOT_FOUND"));
    assert_eq!(err.data.get("message").and_then(|v| v.as_str()), Some("not found"));
    assert_eq!(
        err.data
            .get("retryable")
            .and_then(serde_json::Value::as_bool),
        Some(false)
    );
}

#[test]
fn deserialize_minimal_frame() {
    // Only id and syscall; every other field defaults.
    let json = r#"{"id": "053ffe5e-16ed-41f1-a36d-eabdd40c0ceb", "syscall": "grid:click"}"#;
    let frame: Frame = serde_json::from_str(json).expect("minimal frame should deserialize");
    assert_eq!(frame.syscall, "grid:click");
    assert_eq!(frame.status, Status::Request);
    assert!(frame.view_id.is_none());
    assert!(frame.data.is_empty());
}

#[test]
fn deserialize_client_click_frame() {
    // Exact JSON shape the page script sends for a template button click.
    let json = r#"{
            "id": "053ffe5e-16ed-41f1-a36d-eabdd40c0ceb",
            "parent_id": null,
            "ts": 1739750400000,
            "view_id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
            "syscall": "grid:click",
            "status": "request",
            "data": { "row": 4, "column": 2, "handler": "showNotification" }
        }"#;
    let frame: Frame = serde_json::from_str(json).expect("click frame should deserialize");
    assert_eq!(frame.syscall, "grid:click");
    assert_eq!(frame.status, Status::Request);
    assert_eq!(frame.data_u64("row"), Some(4));
    assert_eq!(frame.data_str("handler"), Some("showNotification"));
    assert!(frame.view_id.is_some());
}

#[test]
fn deserialize_empty_string_view_id_fails() {
    let json = r#"{"id": "053ffe5e-16ed-41f1-a36d-eabdd40c0ceb", "syscall": "grid:click", "view_id": ""}"#;
    assert!(serde_json::from_str::<Frame>(json).is_err());
}
