//! Outbound adapters implementing domain ports against external
//! infrastructure. Adapters are thin translators between domain types and
//! infrastructure representations; they contain no business logic.

pub mod persistence;
