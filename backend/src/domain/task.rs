//! Task data model.
//!
//! A task is the sole aggregate of this service: a titled unit of work with a
//! lifecycle status, a priority, and audit timestamps owned by the store.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors returned when constructing a [`TaskDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl std::error::Error for TaskValidationError {}

/// Stable task identifier assigned by the store at insert time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

/// Error returned when parsing a task status from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTaskStatusError;

impl TaskStatus {
    /// Canonical lowercase word used on the wire and in the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseTaskStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid task status")
    }
}

impl std::error::Error for ParseTaskStatusError {}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError),
        }
    }
}

/// Urgency bucket attached to a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Error returned when parsing a task priority from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTaskPriorityError;

impl TaskPriority {
    /// Canonical lowercase word used on the wire and in the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseTaskPriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid task priority")
    }
}

impl std::error::Error for ParseTaskPriorityError {}

impl FromStr for TaskPriority {
    type Err = ParseTaskPriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError),
        }
    }
}

/// A stored task record.
///
/// ## Invariants
/// - `id` is immutable once assigned by the store.
/// - `created_at` is set once at insert and never changes.
/// - `updated_at >= created_at`; every modification (including status
///   toggles) refreshes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Whether the task has been marked completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// Validated payload for creating a task or fully replacing its fields.
///
/// The store supplies `id`, `created_at`, and `updated_at`; everything else
/// travels through the draft. Construct with [`TaskDraft::new`] and refine
/// with the builder methods.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Create a draft with the given title and default status and priority.
    ///
    /// The title is trimmed; a title that is empty after trimming is
    /// rejected.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{TaskDraft, TaskPriority, TaskStatus};
    ///
    /// let draft = TaskDraft::new("water the plants")?;
    /// assert_eq!(draft.status(), TaskStatus::Pending);
    /// assert_eq!(draft.priority(), TaskPriority::Medium);
    /// # Ok::<(), backend::domain::TaskValidationError>(())
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, TaskValidationError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
        })
    }

    /// Attach an optional free-text description; blank text becomes `None`.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());
        self
    }

    /// Set the lifecycle status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the optional due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// The validated, trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// The optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The lifecycle status.
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// The priority.
    #[must_use]
    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// The optional due date.
    #[must_use]
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn draft_rejects_blank_titles(#[case] title: &str) {
        let err = TaskDraft::new(title).expect_err("blank title rejected");
        assert_eq!(err, TaskValidationError::EmptyTitle);
    }

    #[rstest]
    fn draft_trims_title_and_description() {
        let draft = TaskDraft::new("  buy milk  ")
            .expect("valid title")
            .with_description(Some("  2 litres  ".to_owned()));
        assert_eq!(draft.title(), "buy milk");
        assert_eq!(draft.description(), Some("2 litres"));
    }

    #[rstest]
    fn draft_drops_blank_description() {
        let draft = TaskDraft::new("buy milk")
            .expect("valid title")
            .with_description(Some("   ".to_owned()));
        assert_eq!(draft.description(), None);
    }

    #[rstest]
    fn draft_defaults_match_store_defaults() {
        let draft = TaskDraft::new("anything").expect("valid title");
        assert_eq!(draft.status(), TaskStatus::Pending);
        assert_eq!(draft.priority(), TaskPriority::Medium);
        assert_eq!(draft.due_date(), None);
    }

    #[rstest]
    #[case("pending", TaskStatus::Pending)]
    #[case("completed", TaskStatus::Completed)]
    fn status_parses_canonical_words(#[case] raw: &str, #[case] expected: TaskStatus) {
        assert_eq!(raw.parse::<TaskStatus>(), Ok(expected));
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    #[case("done")]
    #[case("Pending")]
    #[case("")]
    fn status_rejects_unknown_words(#[case] raw: &str) {
        assert_eq!(raw.parse::<TaskStatus>(), Err(ParseTaskStatusError));
    }

    #[rstest]
    #[case("low", TaskPriority::Low)]
    #[case("medium", TaskPriority::Medium)]
    #[case("high", TaskPriority::High)]
    fn priority_parses_canonical_words(#[case] raw: &str, #[case] expected: TaskPriority) {
        assert_eq!(raw.parse::<TaskPriority>(), Ok(expected));
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    #[case("urgent")]
    #[case("HIGH")]
    fn priority_rejects_unknown_words(#[case] raw: &str) {
        assert_eq!(raw.parse::<TaskPriority>(), Err(ParseTaskPriorityError));
    }

    #[rstest]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&TaskStatus::Completed).expect("serialize");
        assert_eq!(json, "\"completed\"");
    }
}
