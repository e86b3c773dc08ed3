//! SQLite repository implementation.
//!
//! Implements `ItemRepository` from `stockroom_core::storage` on top of
//! `tokio-rusqlite`, so blocking SQLite calls run off the async runtime.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use stockroom_core::item::{Item, ItemId, ItemStatus};
use stockroom_core::storage::{ItemRepository, RepositoryError, Result};

use super::conversions::{format_datetime, format_status, row_to_item};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based item repository.
pub struct SqliteItemRepository {
    conn: Connection,
}

impl SqliteItemRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file is created if it does not exist and the schema is
    /// applied automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id))
    }

    async fn list_items(&self, status: Option<ItemStatus>) -> Result<Vec<Item>> {
        self.conn
            .call(move |conn| {
                let mut items = Vec::new();
                match status {
                    // The filter runs in the store so a full scan is avoided.
                    Some(status) => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_ITEMS_BY_STATUS)
                            .map_err(wrap_err)?;
                        let rows = stmt
                            .query_map([format_status(status)], row_to_item)
                            .map_err(wrap_err)?;
                        for row_result in rows {
                            items.push(row_result.map_err(wrap_err)?);
                        }
                    }
                    None => {
                        let mut stmt = conn.prepare(schema::SELECT_ITEMS).map_err(wrap_err)?;
                        let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;
                        for row_result in rows {
                            items.push(row_result.map_err(wrap_err)?);
                        }
                    }
                }
                Ok(items)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn insert_item(&self, item: &Item) -> Result<Item> {
        let status = format_status(item.status);
        let name = item.name.clone();
        let summary = item.summary.clone();
        let created_at = format_datetime(&item.created_at);
        let last_modified_at = format_datetime(&item.last_modified_at);
        let discontinued_at = item.discontinued_at.as_ref().map(format_datetime);
        let template = item.clone();

        let assigned_id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ITEM,
                    rusqlite::params![
                        status,
                        name,
                        summary,
                        created_at,
                        last_modified_at,
                        discontinued_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, item.id))?;

        Ok(template.with_id(assigned_id))
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let id = item.id;
        let status = format_status(item.status);
        let name = item.name.clone();
        let summary = item.summary.clone();
        let last_modified_at = format_datetime(&item.last_modified_at);
        let discontinued_at = item.discontinued_at.as_ref().map(format_datetime);

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ITEM,
                        rusqlite::params![id, status, name, summary, last_modified_at, discontinued_at],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id))
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ITEM, [id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id))
    }
}
