//! Diesel table definition for the todolist schema.
//!
//! There is no migration tooling in this service; this definition is the
//! in-crate source of truth and must match the deployed table:
//!
//! ```sql
//! CREATE TABLE todolist (
//!     id          BIGSERIAL PRIMARY KEY,
//!     title       TEXT NOT NULL,
//!     description TEXT NOT NULL DEFAULT '',
//!     completed   BOOLEAN NOT NULL DEFAULT FALSE
//! );
//! ```

diesel::table! {
    /// Todo entries, one row per item.
    todolist (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        /// Item label; never empty for rows written through the API.
        title -> Text,
        /// Free-form detail; empty string when absent.
        description -> Text,
        /// Completion flag.
        completed -> Bool,
    }
}
