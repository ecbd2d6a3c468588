//! SQLite-backed `KeyValueStore`.

use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

use crate::core::storage::KeyValueStore;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// `(key, bytes, updated_at)` for every stored value.
    pub fn keys(&self) -> AppResult<Vec<(String, usize, String)>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT key, length(value), updated_at FROM storage ORDER BY key")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)? as usize,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        let mut stmt = self.pool.conn.prepare_cached(
            "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, value, Local::now().to_rfc3339()])?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM storage WHERE key = ?1", [key])?;
        Ok(())
    }
}
