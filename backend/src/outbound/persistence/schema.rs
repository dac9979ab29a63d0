//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation; `diesel print-schema` can regenerate them from a live
//! database when the migrations change.

diesel::table! {
    /// Task records.
    ///
    /// The store owns identity and audit columns: `id` is assigned by the
    /// sequence, `created_at`/`updated_at` default to the insert time, and
    /// every update rewrites `updated_at`.
    tasks (id) {
        /// Primary key assigned by the store.
        id -> Int8,
        /// Required task title.
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Lifecycle status word: `pending` or `completed`.
        status -> Varchar,
        /// Priority word: `low`, `medium`, or `high`.
        priority -> Varchar,
        /// Optional due date (calendar day, no time component).
        due_date -> Nullable<Date>,
        /// Record creation timestamp, immutable after insert.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
