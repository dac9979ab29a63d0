//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST API: task CRUD paths, the dashboard summary, health probes, and the
//! schema components referenced by the handlers. The generated document backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::dashboard::DailySummaryResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tasks::{DeleteTaskResponse, TaskForm, TaskResponse};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task tracker backend API",
        description = "REST interface for a single-user task store and its daily activity dashboard."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::get_task,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::update_task,
        crate::inbound::http::tasks::delete_task,
        crate::inbound::http::dashboard::today_summary,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TaskForm,
        TaskResponse,
        DeleteTaskResponse,
        DailySummaryResponse,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "tasks", description = "Task CRUD operations"),
        (name = "dashboard", description = "Derived daily activity views"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
