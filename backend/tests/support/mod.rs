//! Shared helpers for endpoint integration tests.
//!
//! Tests run against the in-memory task store so no database is required;
//! the HTTP surface and service wiring are identical to production.

use std::sync::Arc;

use actix_web::{Scope, web};

use backend::domain::TaskService;
use backend::domain::ports::InMemoryTaskRepository;
use backend::inbound::http::dashboard::today_summary;
use backend::inbound::http::state::HttpState;
use backend::inbound::http::tasks::{
    create_task, delete_task, get_task, list_tasks, update_task,
};

/// HTTP state backed by a fresh in-memory store.
pub fn http_state() -> web::Data<HttpState> {
    let service = Arc::new(TaskService::new(Arc::new(InMemoryTaskRepository::new())));
    web::Data::new(HttpState::new(service.clone(), service))
}

/// The `/api` scope with every task endpoint registered, as in production.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(list_tasks)
        .service(today_summary)
        .service(get_task)
        .service(create_task)
        .service(update_task)
        .service(delete_task)
}
