//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain's driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TasksCommand, TasksQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub tasks: Arc<dyn TasksCommand>,
    pub tasks_query: Arc<dyn TasksQuery>,
}

impl HttpState {
    /// Construct state from the driving ports.
    #[must_use]
    pub fn new(tasks: Arc<dyn TasksCommand>, tasks_query: Arc<dyn TasksQuery>) -> Self {
        Self { tasks, tasks_query }
    }
}
