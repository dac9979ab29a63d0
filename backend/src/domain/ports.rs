//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with its adapters. The
//! driven side is [`TaskRepository`], implemented by the persistence layer;
//! the driving side is [`TasksCommand`] and [`TasksQuery`], implemented by
//! [`TaskService`](super::task_service::TaskService) and consumed by the HTTP
//! adapter. Driven-port errors are strongly typed so adapters map their
//! failures into predictable variants instead of returning `anyhow::Result`.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use thiserror::Error as ThisError;

use super::activity::DailyActivitySummary;
use super::error::Error;
use super::task::{Task, TaskDraft, TaskId};

/// Persistence errors raised by [`TaskRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum TaskRepositoryError {
    /// Repository connection could not be established.
    #[error("task repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("task repository query failed: {message}")]
    Query { message: String },
}

impl TaskRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for the task store.
///
/// The store owns identity and audit timestamps: `insert` assigns the id and
/// both timestamps, `update` refreshes `updated_at`, and reads return the
/// canonical records. `update` and `delete` report a missing row through
/// their return value rather than an error so callers decide how absence
/// surfaces.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task and return the stored record.
    async fn insert(&self, draft: &TaskDraft) -> Result<Task, TaskRepositoryError>;

    /// Fetch every task, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Fetch a task by identifier.
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError>;

    /// Replace a task's fields, refreshing `updated_at`. Returns `None` when
    /// no task with the id exists.
    async fn update(
        &self,
        id: TaskId,
        draft: &TaskDraft,
    ) -> Result<Option<Task>, TaskRepositoryError>;

    /// Delete a task. Returns `false` when no task with the id exists.
    async fn delete(&self, id: TaskId) -> Result<bool, TaskRepositoryError>;
}

/// Driving port for task mutations.
#[async_trait]
pub trait TasksCommand: Send + Sync {
    /// Create a task from a validated draft.
    async fn create(&self, draft: TaskDraft) -> Result<Task, Error>;

    /// Replace a task's fields (status toggles are ordinary updates).
    async fn update(&self, id: TaskId, draft: TaskDraft) -> Result<Task, Error>;

    /// Delete a task.
    async fn delete(&self, id: TaskId) -> Result<(), Error>;
}

/// Driving port for task reads and derived views.
#[async_trait]
pub trait TasksQuery: Send + Sync {
    /// List every task, newest first.
    async fn list(&self) -> Result<Vec<Task>, Error>;

    /// Fetch one task.
    async fn get(&self, id: TaskId) -> Result<Task, Error>;

    /// Summarise activity for the supplied calendar day.
    async fn daily_summary(&self, today: NaiveDate) -> Result<DailyActivitySummary, Error>;
}

/// In-memory [`TaskRepository`] backing tests and database-less deployments.
///
/// Mirrors the store semantics of the Diesel adapter: sequential ids, store
/// stamped timestamps, and newest-first listing.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    next_id: AtomicI64,
    tasks: Mutex<Vec<Task>>,
}

impl InMemoryTaskRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Task>> {
        // A poisoned lock only means a panicking test left the store mid-way;
        // the Vec itself is still structurally sound.
        self.tasks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> Result<Task, TaskRepositoryError> {
        let now = Utc::now();
        let id = TaskId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let task = Task {
            id,
            title: draft.title().to_owned(),
            description: draft.description().map(str::to_owned),
            status: draft.status(),
            priority: draft.priority(),
            due_date: draft.due_date(),
            created_at: now,
            updated_at: now,
        };
        self.lock().push(task.clone());
        Ok(task)
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        let mut tasks = self.lock().clone();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        Ok(self.lock().iter().find(|task| task.id == id).cloned())
    }

    async fn update(
        &self,
        id: TaskId,
        draft: &TaskDraft,
    ) -> Result<Option<Task>, TaskRepositoryError> {
        let mut tasks = self.lock();
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.title = draft.title().to_owned();
        task.description = draft.description().map(str::to_owned);
        task.status = draft.status();
        task.priority = draft.priority();
        task.due_date = draft.due_date();
        task.updated_at = Utc::now();
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: TaskId) -> Result<bool, TaskRepositoryError> {
        let mut tasks = self.lock();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        Ok(tasks.len() < before)
    }
}
