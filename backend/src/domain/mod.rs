//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed task model, the daily activity
//! summariser, and the ports the adapters plug into. Types stay transport
//! agnostic; inbound and outbound adapters translate at the edges.

pub mod activity;
pub mod error;
pub mod ports;
pub mod task;
pub mod task_service;
pub mod trace_id;

pub use self::activity::{DailyActivitySummary, summarize_day};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::task::{
    ParseTaskPriorityError, ParseTaskStatusError, Task, TaskDraft, TaskId, TaskPriority,
    TaskStatus, TaskValidationError,
};
pub use self::task_service::TaskService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
