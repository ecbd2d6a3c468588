use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an audit line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Best-effort audit line: opens its own connection and ignores failures,
/// so a broken database never blocks a command.
pub fn audit(db_path: &str, operation: &str, target: &str, message: &str) {
    let Ok(conn) = Connection::open(db_path) else {
        return;
    };

    if let Err(e) = ttlog(&conn, operation, target, message) {
        tracing::debug!(error = %e, operation, "audit log not written");
    }
}
