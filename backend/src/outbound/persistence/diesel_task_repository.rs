//! PostgreSQL-backed `TaskRepository` implementation using Diesel ORM.
//!
//! The database owns identity and audit columns: inserts let the sequence
//! assign `id` and the column defaults stamp both timestamps, while updates
//! rewrite every mutable column and refresh `updated_at` server-side. Every
//! statement returns the stored row so callers always see the canonical
//! record.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus};

use super::models::{NewTaskRow, TaskRow};
use super::pool::{DbPool, PoolError};
use super::schema::tasks;

/// Diesel-backed implementation of the `TaskRepository` port.
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain task repository errors.
fn map_pool_error(error: PoolError) -> TaskRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            TaskRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain task repository errors.
fn map_diesel_error(error: diesel::result::Error) -> TaskRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => TaskRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TaskRepositoryError::connection("database connection error")
        }
        _ => TaskRepositoryError::query("database error"),
    }
}

/// Convert a database row to a domain task.
///
/// Unrecognised status or priority words degrade to the store defaults with
/// a warning; a corrupt row must not take the whole listing down.
fn row_to_task(row: TaskRow) -> Task {
    let status = row.status.parse::<TaskStatus>().unwrap_or_else(|_| {
        warn!(value = %row.status, id = row.id, "unrecognised status value, defaulting to pending");
        TaskStatus::Pending
    });
    let priority = row.priority.parse::<TaskPriority>().unwrap_or_else(|_| {
        warn!(value = %row.priority, id = row.id, "unrecognised priority value, defaulting to medium");
        TaskPriority::Medium
    });

    Task {
        id: TaskId::new(row.id),
        title: row.title,
        description: row.description,
        status,
        priority,
        due_date: row.due_date,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> Result<Task, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTaskRow {
            title: draft.title(),
            description: draft.description(),
            status: draft.status().as_str(),
            priority: draft.priority().as_str(),
            due_date: draft.due_date(),
        };

        let row: TaskRow = diesel::insert_into(tasks::table)
            .values(&new_row)
            .returning(TaskRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_task(row))
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TaskRow> = tasks::table
            .order(tasks::created_at.desc())
            .select(TaskRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_task).collect())
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TaskRow> = tasks::table
            .find(id.as_i64())
            .select(TaskRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_task))
    }

    async fn update(
        &self,
        id: TaskId,
        draft: &TaskDraft,
    ) -> Result<Option<Task>, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TaskRow> = diesel::update(tasks::table.find(id.as_i64()))
            .set((
                tasks::title.eq(draft.title()),
                tasks::description.eq(draft.description()),
                tasks::status.eq(draft.status().as_str()),
                tasks::priority.eq(draft.priority().as_str()),
                tasks::due_date.eq(draft.due_date()),
                tasks::updated_at.eq(diesel::dsl::now),
            ))
            .returning(TaskRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_task))
    }

    async fn delete(&self, id: TaskId) -> Result<bool, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(tasks::table.find(id.as_i64()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn row(status: &str, priority: &str) -> TaskRow {
        TaskRow {
            id: 1,
            title: "sample".to_owned(),
            description: None,
            status: status.to_owned(),
            priority: priority.to_owned(),
            due_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let pool_err = PoolError::checkout("connection refused");
        let repo_err = map_pool_error(pool_err);

        assert!(matches!(repo_err, TaskRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, TaskRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_to_task_converts_known_words() {
        let task = row_to_task(row("completed", "high"));

        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.id, TaskId::new(1));
    }

    #[rstest]
    fn row_to_task_degrades_unknown_words_to_defaults() {
        let task = row_to_task(row("archived", "critical"));

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);
    }
}
