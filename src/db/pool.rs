//! The one SQLite connection a command works with.

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a write waits for another `timevault` process holding the lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }
}
