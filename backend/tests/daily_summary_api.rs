//! Endpoint coverage for the today-summary dashboard view.

mod support;

use actix_web::{App, http::StatusCode, test};
use serde_json::{Value, json};

use backend::Trace;

macro_rules! spawn_app {
    () => {
        test::init_service(
            App::new()
                .app_data(support::http_state())
                .wrap(Trace)
                .service(support::api_scope()),
        )
        .await
    };
}

#[actix_web::test]
async fn empty_store_summarises_to_zero() {
    let app = spawn_app!();

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/tasks/summary/today")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("totalToday").and_then(Value::as_u64), Some(0));
    assert_eq!(body.get("completionRate").and_then(Value::as_u64), Some(0));
    assert_eq!(
        body.get("completedToday")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(0)
    );
}

#[actix_web::test]
async fn summary_counts_tasks_touched_today() {
    let app = spawn_app!();

    for title in ["finish review", "file expenses"] {
        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(json!({ "title": title }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::put()
        .uri("/api/tasks/1")
        .set_json(json!({ "title": "finish review", "status": "completed" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/tasks/summary/today")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("totalToday").and_then(Value::as_u64), Some(2));
    assert_eq!(body.get("completionRate").and_then(Value::as_u64), Some(50));

    let completed = body
        .get("completedToday")
        .and_then(Value::as_array)
        .expect("completedToday array");
    assert_eq!(completed.len(), 1);
    let task = completed.first().expect("one completed task");
    assert_eq!(
        task.get("title").and_then(Value::as_str),
        Some("finish review")
    );
    // Embedded task objects keep the store's snake_case field names.
    assert!(task.get("updated_at").is_some());
}

#[actix_web::test]
async fn summary_for_an_untouched_date_is_empty() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .set_json(json!({ "title": "today only" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/tasks/summary/today?date=2000-01-01")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("totalToday").and_then(Value::as_u64), Some(0));
    assert_eq!(body.get("completionRate").and_then(Value::as_u64), Some(0));
}

#[actix_web::test]
async fn malformed_date_is_rejected() {
    let app = spawn_app!();

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/tasks/summary/today?date=tomorrow")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some("date")
    );
}
