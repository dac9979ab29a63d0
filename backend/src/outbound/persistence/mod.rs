//! PostgreSQL persistence adapter.
//!
//! Houses the Diesel schema, the async connection pool, and the
//! [`DieselTaskRepository`] implementing the domain's `TaskRepository` port.

mod diesel_task_repository;
mod models;
mod pool;
pub mod schema;

pub use diesel_task_repository::DieselTaskRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
