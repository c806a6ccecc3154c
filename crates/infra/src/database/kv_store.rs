//! JSON documents under string keys
//!
//! The guest store keeps one document per key, mirroring a browser's local
//! storage. All calls hop to the blocking pool.

use std::sync::Arc;

use rizzmaster_domain::Result as DomainResult;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::task;

use super::manager::{map_sql_error, DbManager};
use crate::errors::InfraError;

#[derive(Clone)]
pub struct LocalKvStore {
    db: Arc<DbManager>,
}

impl LocalKvStore {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    pub async fn get<T>(&self, key: &str) -> DomainResult<Option<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<T>> {
            let conn = db.get_connection()?;
            read_json(&conn, &key)
        })
        .await
        .map_err(map_join_error)?
    }

    pub async fn put<T>(&self, key: &str, value: &T) -> DomainResult<()>
    where
        T: Serialize,
    {
        let db = Arc::clone(&self.db);
        let key = key.to_string();
        let json = serde_json::to_string(value).map_err(InfraError::from)?;

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            write_raw(&conn, &key, &json)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Read-modify-write a document inside one immediate transaction.
    ///
    /// `f` sees `T::default()` when the key is absent.
    pub async fn update<T, R, F>(&self, key: &str, f: F) -> DomainResult<R>
    where
        T: DeserializeOwned + Serialize + Default + Send + 'static,
        R: Send + 'static,
        F: FnOnce(&mut T) -> R + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<R> {
            let mut conn = db.get_connection()?;
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(map_sql_error)?;
            let mut doc: T = read_json(&tx, &key)?.unwrap_or_default();
            let out = f(&mut doc);
            let json = serde_json::to_string(&doc).map_err(InfraError::from)?;
            write_raw(&tx, &key, &json)?;
            tx.commit().map_err(map_sql_error)?;
            Ok(out)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Remove every key in `keys`; missing keys are ignored.
    pub async fn remove(&self, keys: &[&str]) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let keys: Vec<String> = keys.iter().map(|k| (*k).to_string()).collect();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            for key in &keys {
                conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])
                    .map_err(map_sql_error)?;
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn read_json<T: DeserializeOwned>(conn: &Connection, key: &str) -> DomainResult<Option<T>> {
    let raw: Option<String> = conn
        .query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| row.get(0))
        .optional()
        .map_err(map_sql_error)?;

    match raw {
        Some(json) => Ok(Some(serde_json::from_str(&json).map_err(InfraError::from)?)),
        None => Ok(None),
    }
}

fn write_raw(conn: &Connection, key: &str, json: &str) -> DomainResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, CAST(strftime('%s','now') AS INTEGER))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, json],
    )
    .map_err(map_sql_error)?;
    Ok(())
}

fn map_join_error(err: task::JoinError) -> rizzmaster_domain::RizzError {
    InfraError::from(err).into()
}
