//! Today's activity dashboard handler.
//!
//! ```text
//! GET /api/tasks/summary/today?date=YYYY-MM-DD
//! ```
//!
//! Exposes the daily activity summary over HTTP. The caller supplies "today"
//! via the `date` query parameter; when omitted the current UTC date is used.
//! The envelope uses camelCase stat names while the embedded task objects
//! keep the store's field names.

use actix_web::{get, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DailyActivitySummary;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tasks::TaskResponse;
use crate::inbound::http::validation::{FieldName, parse_calendar_date};

/// Query parameters for the today-summary endpoint.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub date: Option<String>,
}

/// Response payload for one calendar day's activity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailySummaryResponse {
    pub completed_today: Vec<TaskResponse>,
    pub total_today: usize,
    #[schema(minimum = 0, maximum = 100)]
    pub completion_rate: u8,
}

impl From<DailyActivitySummary> for DailySummaryResponse {
    fn from(value: DailyActivitySummary) -> Self {
        Self {
            completed_today: value
                .completed_today
                .into_iter()
                .map(TaskResponse::from)
                .collect(),
            total_today: value.total_today,
            completion_rate: value.completion_rate,
        }
    }
}

/// Summarise the day's task activity.
#[utoipa::path(
    get,
    path = "/api/tasks/summary/today",
    params(
        ("date" = Option<String>, Query, description = "Calendar day to summarise (YYYY-MM-DD, UTC); defaults to the current UTC date")
    ),
    responses(
        (status = 200, description = "Activity summary for the day", body = DailySummaryResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["dashboard"],
    operation_id = "todaySummary"
)]
#[get("/tasks/summary/today")]
pub async fn today_summary(
    state: web::Data<HttpState>,
    query: web::Query<SummaryQuery>,
) -> ApiResult<web::Json<DailySummaryResponse>> {
    let today = match query.into_inner().date {
        Some(raw) => parse_calendar_date(&raw, FieldName::new("date"))?,
        None => Utc::now().date_naive(),
    };

    let summary = state.tasks_query.daily_summary(today).await?;
    Ok(web::Json(DailySummaryResponse::from(summary)))
}
