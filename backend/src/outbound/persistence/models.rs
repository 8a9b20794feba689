//! Internal Diesel row structs for the todolist table.
//!
//! Implementation details of the persistence layer; they exist to satisfy
//! Diesel's type requirements and are never exposed to the domain.

use diesel::prelude::*;

use super::schema::todolist;
use crate::domain::Item;

/// Row struct for reading from the todolist table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todolist)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
        }
    }
}

/// Insertable struct for creating new rows; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todolist)]
pub(crate) struct NewItemRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

impl<'a> NewItemRow<'a> {
    pub(crate) fn from_item(item: &'a Item) -> Self {
        Self {
            title: &item.title,
            description: &item.description,
            completed: item.completed,
        }
    }
}

/// Changeset rewriting every mutable column unconditionally.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todolist)]
pub(crate) struct ItemChangeset<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

impl<'a> ItemChangeset<'a> {
    pub(crate) fn from_item(item: &'a Item) -> Self {
        Self {
            title: &item.title,
            description: &item.description,
            completed: item.completed,
        }
    }
}
