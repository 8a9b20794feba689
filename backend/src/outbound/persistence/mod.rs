//! PostgreSQL persistence adapter built on Diesel.

pub mod diesel_item_store;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_item_store::DieselItemStore;
pub use pool::{DbPool, PoolConfig, PoolError};
