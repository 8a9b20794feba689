//! PostgreSQL-backed [`ItemStore`] implementation using Diesel.
//!
//! Every statement goes through the query builder, so all values travel as
//! bind parameters; nothing is ever interpolated into SQL text.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::{Item, ItemStore, ItemStoreError};

use super::models::{ItemChangeset, ItemRow, NewItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::todolist::dsl;

/// Diesel-backed store for the todolist table.
#[derive(Clone)]
pub struct DieselItemStore {
    pool: DbPool,
}

impl DieselItemStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ItemStoreError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    ItemStoreError::connection(message)
}

fn map_diesel_error(error: diesel::result::Error) -> ItemStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => ItemStoreError::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ItemStoreError::connection("database connection error")
        }
        _ => ItemStoreError::query("database error"),
    }
}

#[async_trait]
impl ItemStore for DieselItemStore {
    async fn insert(&self, mut item: Item) -> Result<Item, ItemStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = diesel::insert_into(dsl::todolist)
            .values(NewItemRow::from_item(&item))
            .returning(dsl::id)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        item.id = id;
        Ok(item)
    }

    async fn get(&self, id: i64) -> Result<Item, ItemStoreError> {
        if id < Item::MIN_ID {
            return Err(ItemStoreError::NotFound);
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = dsl::todolist
            .find(id)
            .select(ItemRow::as_select())
            .first::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn get_all(&self) -> Result<Vec<Item>, ItemStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = dsl::todolist
            .order(dsl::id.asc())
            .select(ItemRow::as_select())
            .load::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn update(&self, item: Item) -> Result<Item, ItemStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // RETURNING makes a vanished row surface as the same no-rows
        // condition as a read.
        let row = diesel::update(dsl::todolist.find(item.id))
            .set(ItemChangeset::from_item(&item))
            .returning(ItemRow::as_returning())
            .get_result::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), ItemStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(dsl::todolist.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if deleted == 0 {
            return Err(ItemStoreError::NotFound);
        }
        Ok(())
    }
}
