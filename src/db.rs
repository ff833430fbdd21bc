//! SQLite persistence for scraped recipe records.
//!
//! Records land in a single `recipes(url, data)` table where `data` is the
//! full record serialized to JSON. The table carries no uniqueness
//! constraint: re-running the pipeline over the same URL inserts a second
//! row.

use crate::models::RecipeRecord;
use rusqlite::Connection;
use std::error::Error;
use tracing::{info, instrument};

/// Open a connection to the SQLite database at `path`.
pub fn connect(path: &str) -> rusqlite::Result<Connection> {
    Connection::open(path)
}

/// Create the `recipes` table if it does not exist yet.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS recipes (
            url  TEXT NOT NULL,
            data TEXT NOT NULL
        );",
    )
}

/// Insert one row per record, each committed individually.
///
/// No batching and no transaction spanning records; an insert failure
/// propagates and aborts the remaining inserts.
///
/// # Returns
///
/// The number of rows inserted.
#[instrument(level = "info", skip_all)]
pub fn store_records(
    conn: &Connection,
    records: &[RecipeRecord],
) -> Result<usize, Box<dyn Error>> {
    let mut inserted = 0;
    for record in records {
        let data = serde_json::to_string(record)?;
        conn.execute(
            "INSERT INTO recipes (url, data) VALUES (?1, ?2)",
            rusqlite::params![record.url, data],
        )?;
        inserted += 1;
    }
    info!(count = inserted, "Stored recipe records");
    Ok(inserted)
}
