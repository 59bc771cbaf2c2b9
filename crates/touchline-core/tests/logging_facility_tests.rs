#![allow(clippy::unwrap_used, clippy::expect_used)]

use touchline_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMMAND, FIELD_COMPONENT, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND,
};
use touchline_core::errors::RegistryError;
use touchline_core::logging_facility::test_capture::init_test_capture;
use touchline_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, command = "/help");

    capture.assert_event_exists(op_name, EVENT_START);
    let start = capture
        .events()
        .into_iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .unwrap();
    assert_eq!(start.field(FIELD_COMMAND), Some("/help"));
    assert!(start.field(FIELD_COMPONENT).is_some());
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = RegistryError::CommandNotFound {
        command: "/nope".to_string(),
        scope: "main".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| {
            e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR)
        })
        .collect();

    assert_eq!(error_events.len(), 1);
    let event = &error_events[0];
    assert_eq!(event.level, tracing::Level::ERROR);
    assert_eq!(event.field(FIELD_ERR_KIND), Some("NotFound"));
    assert_eq!(event.field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
}

#[test]
fn test_start_and_end_pair() {
    let capture = init_test_capture();
    let op_name = "test_start_end_pair_unique_4";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 0);

    let count = capture.count_events(|e| e.op.as_deref() == Some(op_name));
    assert_eq!(count, 2);
}
