//! Task HTTP handlers.
//!
//! ```text
//! GET    /api/tasks
//! GET    /api/tasks/{id}
//! POST   /api/tasks
//! PUT    /api/tasks/{id}
//! DELETE /api/tasks/{id}
//! ```
//!
//! Task payloads use the store's field names on the wire; timestamps are
//! RFC 3339 strings and `due_date` is `YYYY-MM-DD`.

use std::str::FromStr;

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Task, TaskDraft, TaskId, TaskPriority, TaskStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, empty_field_error, invalid_value_error, missing_field_error, parse_calendar_date,
};

/// Request payload for creating or fully replacing a task.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TaskForm {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = "pending")]
    pub status: Option<String>,
    #[schema(example = "medium")]
    pub priority: Option<String>,
    #[schema(format = "date", example = "2026-08-06")]
    pub due_date: Option<String>,
}

/// Response payload for a stored task.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "pending")]
    pub status: String,
    #[schema(example = "medium")]
    pub priority: String,
    #[schema(format = "date", example = "2026-08-06")]
    pub due_date: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(value: Task) -> Self {
        Self {
            id: value.id.as_i64(),
            title: value.title,
            description: value.description,
            status: value.status.to_string(),
            priority: value.priority.to_string(),
            due_date: value.due_date.map(|date| date.to_string()),
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Confirmation payload returned by the delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteTaskResponse {
    #[schema(example = "Task deleted successfully")]
    pub message: String,
}

fn parse_status(raw: &str) -> Result<TaskStatus, Error> {
    TaskStatus::from_str(raw)
        .map_err(|_| invalid_value_error(FieldName::new("status"), raw, "pending or completed"))
}

fn parse_priority(raw: &str) -> Result<TaskPriority, Error> {
    TaskPriority::from_str(raw)
        .map_err(|_| invalid_value_error(FieldName::new("priority"), raw, "low, medium, or high"))
}

/// Turn a request body into a validated draft, applying the store defaults
/// for absent `status` and `priority`.
fn parse_task_form(form: TaskForm) -> Result<TaskDraft, Error> {
    let title = form
        .title
        .ok_or_else(|| missing_field_error(FieldName::new("title")))?;
    let mut draft =
        TaskDraft::new(title).map_err(|_| empty_field_error(FieldName::new("title")))?;

    draft = draft.with_description(form.description);

    if let Some(raw) = form.status {
        draft = draft.with_status(parse_status(&raw)?);
    }
    if let Some(raw) = form.priority {
        draft = draft.with_priority(parse_priority(&raw)?);
    }

    // Browser form clients submit an empty string for an unset date picker.
    if let Some(raw) = form.due_date.filter(|value| !value.trim().is_empty()) {
        let due = parse_calendar_date(&raw, FieldName::new("due_date"))?;
        draft = draft.with_due_date(Some(due));
    }

    Ok(draft)
}

/// List every task, newest first.
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "All stored tasks", body = [TaskResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/tasks")]
pub async fn list_tasks(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TaskResponse>>> {
    let tasks = state.tasks_query.list().await?;
    Ok(web::Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Fetch a single task.
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "The stored task", body = TaskResponse),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "getTask"
)]
#[get("/tasks/{id}")]
pub async fn get_task(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<TaskResponse>> {
    let task = state.tasks_query.get(TaskId::new(path.into_inner())).await?;
    Ok(web::Json(TaskResponse::from(task)))
}

/// Create a task. The store assigns the id and both timestamps.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = TaskForm,
    responses(
        (status = 201, description = "The created task", body = TaskResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/tasks")]
pub async fn create_task(
    state: web::Data<HttpState>,
    payload: web::Json<TaskForm>,
) -> ApiResult<HttpResponse> {
    let draft = parse_task_form(payload.into_inner())?;
    let task = state.tasks.create(draft).await?;
    Ok(HttpResponse::Created().json(TaskResponse::from(task)))
}

/// Replace a task's fields. Status toggles are this endpoint with a flipped
/// `status`; `updated_at` is refreshed by the store.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task identifier")),
    request_body = TaskForm,
    responses(
        (status = 200, description = "The updated task", body = TaskResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "updateTask"
)]
#[put("/tasks/{id}")]
pub async fn update_task(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<TaskForm>,
) -> ApiResult<web::Json<TaskResponse>> {
    let draft = parse_task_form(payload.into_inner())?;
    let task = state
        .tasks
        .update(TaskId::new(path.into_inner()), draft)
        .await?;
    Ok(web::Json(TaskResponse::from(task)))
}

/// Delete a task.
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeleteTaskResponse),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "deleteTask"
)]
#[delete("/tasks/{id}")]
pub async fn delete_task(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DeleteTaskResponse>> {
    state.tasks.delete(TaskId::new(path.into_inner())).await?;
    Ok(web::Json(DeleteTaskResponse {
        message: "Task deleted successfully".to_owned(),
    }))
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
