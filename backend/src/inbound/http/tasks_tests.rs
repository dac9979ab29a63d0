//! Unit coverage for the task request parsing and response mapping.

use chrono::{DateTime, Utc};
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::domain::ErrorCode;

fn form(title: Option<&str>) -> TaskForm {
    TaskForm {
        title: title.map(str::to_owned),
        description: None,
        status: None,
        priority: None,
        due_date: None,
    }
}

fn detail<'a>(err: &'a Error, key: &str) -> Option<&'a str> {
    err.details()
        .and_then(|details| details.get(key))
        .and_then(Value::as_str)
}

#[rstest]
fn parse_rejects_missing_title() {
    let err = parse_task_form(form(None)).expect_err("missing title");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(detail(&err, "field"), Some("title"));
    assert_eq!(detail(&err, "code"), Some("missing_field"));
}

#[rstest]
#[case("")]
#[case("   ")]
fn parse_rejects_blank_title(#[case] title: &str) {
    let err = parse_task_form(form(Some(title))).expect_err("blank title");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(detail(&err, "code"), Some("empty_field"));
}

#[rstest]
fn parse_applies_store_defaults() {
    let draft = parse_task_form(form(Some("write report"))).expect("valid form");
    assert_eq!(draft.status(), TaskStatus::Pending);
    assert_eq!(draft.priority(), TaskPriority::Medium);
    assert_eq!(draft.due_date(), None);
}

#[rstest]
fn parse_accepts_explicit_fields() {
    let mut payload = form(Some("write report"));
    payload.description = Some("quarterly numbers".to_owned());
    payload.status = Some("completed".to_owned());
    payload.priority = Some("high".to_owned());
    payload.due_date = Some("2026-08-10".to_owned());

    let draft = parse_task_form(payload).expect("valid form");
    assert_eq!(draft.description(), Some("quarterly numbers"));
    assert_eq!(draft.status(), TaskStatus::Completed);
    assert_eq!(draft.priority(), TaskPriority::High);
    assert_eq!(
        draft.due_date(),
        Some("2026-08-10".parse().expect("valid date"))
    );
}

#[rstest]
fn parse_rejects_unknown_status() {
    let mut payload = form(Some("x"));
    payload.status = Some("done".to_owned());

    let err = parse_task_form(payload).expect_err("invalid status");
    assert_eq!(err.message(), "status must be pending or completed");
    assert_eq!(detail(&err, "value"), Some("done"));
}

#[rstest]
fn parse_rejects_unknown_priority() {
    let mut payload = form(Some("x"));
    payload.priority = Some("urgent".to_owned());

    let err = parse_task_form(payload).expect_err("invalid priority");
    assert_eq!(err.message(), "priority must be low, medium, or high");
}

#[rstest]
fn parse_treats_empty_due_date_as_absent() {
    let mut payload = form(Some("x"));
    payload.due_date = Some(String::new());

    let draft = parse_task_form(payload).expect("valid form");
    assert_eq!(draft.due_date(), None);
}

#[rstest]
fn parse_rejects_malformed_due_date() {
    let mut payload = form(Some("x"));
    payload.due_date = Some("tomorrow".to_owned());

    let err = parse_task_form(payload).expect_err("invalid date");
    assert_eq!(detail(&err, "code"), Some("invalid_date"));
}

#[rstest]
fn response_uses_store_field_names_and_formats() {
    let created: DateTime<Utc> = "2026-08-06T08:00:00Z".parse().expect("timestamp");
    let updated: DateTime<Utc> = "2026-08-06T09:30:00Z".parse().expect("timestamp");
    let task = Task {
        id: TaskId::new(12),
        title: "ship release".to_owned(),
        description: Some("tag and announce".to_owned()),
        status: TaskStatus::Completed,
        priority: TaskPriority::High,
        due_date: Some("2026-08-07".parse().expect("valid date")),
        created_at: created,
        updated_at: updated,
    };

    let response = TaskResponse::from(task);
    assert_eq!(response.id, 12);
    assert_eq!(response.status, "completed");
    assert_eq!(response.priority, "high");
    assert_eq!(response.due_date.as_deref(), Some("2026-08-07"));
    assert_eq!(response.created_at, "2026-08-06T08:00:00+00:00");

    let value = serde_json::to_value(&response).expect("serialize");
    assert!(value.get("due_date").is_some());
    assert!(value.get("created_at").is_some());
    assert!(value.get("dueDate").is_none());
}
