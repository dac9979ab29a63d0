//! Task domain service.
//!
//! Implements the driving ports over a [`TaskRepository`], translating
//! repository failures into transport-agnostic [`Error`] values and folding
//! the daily summary on top of the store's task list.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use super::activity::{DailyActivitySummary, summarize_day};
use super::error::Error;
use super::ports::{TaskRepository, TaskRepositoryError, TasksCommand, TasksQuery};
use super::task::{Task, TaskDraft, TaskId};

/// Task service implementing the driving ports.
#[derive(Clone)]
pub struct TaskService<R> {
    repo: Arc<R>,
}

impl<R> TaskService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    fn map_repository_error(error: TaskRepositoryError) -> Error {
        match error {
            TaskRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("task store unavailable: {message}"))
            }
            TaskRepositoryError::Query { message } => {
                Error::internal(format!("task store error: {message}"))
            }
        }
    }

    fn task_not_found(id: TaskId) -> Error {
        Error::not_found("task not found").with_details(json!({ "id": id.as_i64() }))
    }
}

#[async_trait]
impl<R> TasksCommand for TaskService<R>
where
    R: TaskRepository,
{
    async fn create(&self, draft: TaskDraft) -> Result<Task, Error> {
        self.repo
            .insert(&draft)
            .await
            .map_err(Self::map_repository_error)
    }

    async fn update(&self, id: TaskId, draft: TaskDraft) -> Result<Task, Error> {
        self.repo
            .update(id, &draft)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::task_not_found(id))
    }

    async fn delete(&self, id: TaskId) -> Result<(), Error> {
        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        if removed {
            Ok(())
        } else {
            Err(Self::task_not_found(id))
        }
    }
}

#[async_trait]
impl<R> TasksQuery for TaskService<R>
where
    R: TaskRepository,
{
    async fn list(&self) -> Result<Vec<Task>, Error> {
        self.repo
            .list_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get(&self, id: TaskId) -> Result<Task, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::task_not_found(id))
    }

    async fn daily_summary(&self, today: NaiveDate) -> Result<DailyActivitySummary, Error> {
        let tasks = self
            .repo
            .list_all()
            .await
            .map_err(Self::map_repository_error)?;
        Ok(summarize_day(today, &tasks))
    }
}
