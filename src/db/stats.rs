use crate::db::kv::SqliteStore;
use crate::errors::AppResult;
use crate::models::snapshot::Snapshot;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &SqliteStore, db_path: &str, storage_key: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED KEYS
    //
    println!("{}• Stored keys:{}", CYAN, RESET);
    let keys = store.keys()?;
    if keys.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for (key, bytes, updated) in &keys {
        println!("    {key:<24} {bytes:>8} B   {GREY}{updated}{RESET}");
    }

    //
    // 3) SNAPSHOT CONTENT
    //
    let blob: Option<String> = store
        .conn()
        .query_row(
            "SELECT value FROM storage WHERE key = ?1",
            [storage_key],
            |row| row.get(0),
        )
        .ok();

    match blob.as_deref().map(Snapshot::decode) {
        Some(Ok(decoded)) => {
            let entries = &decoded.snapshot.time_entries;
            println!(
                "{}• Snapshot version:{} {} (stored as {})",
                CYAN, RESET, decoded.snapshot.version, decoded.source_version
            );
            println!(
                "{}• Time entries:{} {}{}{}",
                CYAN,
                RESET,
                GREEN,
                entries.len(),
                RESET
            );

            let first = entries.iter().map(|e| e.date).min();
            let last = entries.iter().map(|e| e.date).max();
            let fmt = |d: Option<chrono::NaiveDate>| {
                d.map(|d| d.to_string())
                    .unwrap_or_else(|| format!("{GREY}--{RESET}"))
            };

            println!("{}• Date range:{}", CYAN, RESET);
            println!("    from: {}", fmt(first));
            println!("    to:   {}", fmt(last));
        }
        Some(Err(e)) => println!("{}• Snapshot:{} unreadable ({})", CYAN, RESET, e),
        None => println!("{}• Snapshot:{} {GREY}none{RESET}", CYAN, RESET),
    }

    //
    // 4) AUDIT LOG
    //
    let log_rows: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
