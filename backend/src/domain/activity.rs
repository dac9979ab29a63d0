//! Daily activity summarisation.
//!
//! Collapses the full task list into a per-day productivity snapshot: which
//! tasks were completed on a given calendar day, how many tasks were touched
//! that day at all, and the resulting completion percentage.
//!
//! Calendar-day equality is evaluated in UTC. Callers and clients must agree
//! on that reference timezone or day boundaries will not line up; injecting
//! `today` as an explicit parameter keeps the computation deterministic and
//! testable.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::task::Task;

/// Snapshot of one calendar day's task activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivitySummary {
    /// Completed tasks whose `updated_at` falls on the day, in input order.
    pub completed_today: Vec<Task>,
    /// Tasks created or updated on the day; a task matching both counts once.
    pub total_today: usize,
    /// `round(100 * completed / total)` as a whole percent, `0` when no task
    /// was touched.
    pub completion_rate: u8,
}

/// Summarise `tasks` against the supplied calendar day.
///
/// Pure function of its inputs: no clock reads, no I/O, no shared state, and
/// calling it twice with the same arguments yields identical output.
///
/// # Examples
/// ```
/// use backend::domain::summarize_day;
///
/// let today = "2026-08-06".parse().expect("valid date");
/// let summary = summarize_day(today, &[]);
/// assert_eq!(summary.total_today, 0);
/// assert_eq!(summary.completion_rate, 0);
/// ```
#[must_use]
pub fn summarize_day(today: NaiveDate, tasks: &[Task]) -> DailyActivitySummary {
    let completed_today: Vec<Task> = tasks
        .iter()
        .filter(|task| task.is_completed() && falls_on(task.updated_at, today))
        .cloned()
        .collect();

    let total_today = tasks
        .iter()
        .filter(|task| falls_on(task.created_at, today) || falls_on(task.updated_at, today))
        .count();

    let completion_rate = rate_percent(completed_today.len(), total_today);

    DailyActivitySummary {
        completed_today,
        total_today,
        completion_rate,
    }
}

/// Whether a timestamp lands on the given UTC calendar day.
fn falls_on(timestamp: DateTime<Utc>, day: NaiveDate) -> bool {
    timestamp.date_naive() == day
}

/// Percentage rounded to the nearest whole number, halves away from zero.
///
/// An empty day yields `0` rather than dividing by zero.
fn rate_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (200 * completed + total) / (2 * total);
    // completed <= total bounds the quotient at 100.
    scaled as u8
}
