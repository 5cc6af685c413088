//! Workspace database: progress flags and plan settings.
//!
//! Progress is a plain key-value table. One row per activity, key
//! `progress_<activity id>`, value a JSON array of booleans whose length
//! matches the activity's task count. Reads are self-healing: a missing,
//! unparsable or wrong-length value comes back as all-false, so stale rows
//! left behind by content changes are silently discarded on the next load.
//! Storage failures are swallowed at this boundary (empty read, no-op
//! write) because persistence is a convenience, not a correctness
//! requirement.

use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

pub const DB_FILE: &str = "cogency.sqlite3";

pub fn open_db(workspace: &Path) -> anyhow::Result<Connection> {
    std::fs::create_dir_all(workspace)?;
    let conn = Connection::open(workspace.join(DB_FILE))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS progress(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn progress_key(activity_id: &str) -> String {
    format!("progress_{}", activity_id)
}

/// Read the completion flags for an activity. Never fails: any problem
/// with the stored value degrades to a fresh all-false vector.
pub fn progress_load(conn: &Connection, activity_id: &str, expected_len: usize) -> Vec<bool> {
    let stored: Option<String> = match conn
        .query_row(
            "SELECT value FROM progress WHERE key = ?",
            [progress_key(activity_id)],
            |r| r.get(0),
        )
        .optional()
    {
        Ok(v) => v,
        Err(e) => {
            log::warn!("progress read failed for {}: {}", activity_id, e);
            None
        }
    };

    if let Some(text) = stored {
        if let Ok(flags) = serde_json::from_str::<Vec<bool>>(&text) {
            if flags.len() == expected_len {
                return flags;
            }
        }
    }
    vec![false; expected_len]
}

/// Overwrite the stored flags in full. Last write wins; a failed write is
/// a no-op apart from a warning.
pub fn progress_save(conn: &Connection, activity_id: &str, flags: &[bool]) {
    let text = match serde_json::to_string(flags) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("progress encode failed for {}: {}", activity_id, e);
            return;
        }
    };
    let result = conn.execute(
        "INSERT INTO progress(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (progress_key(activity_id), text),
    );
    if let Err(e) = result {
        log::warn!("progress write failed for {}: {}", activity_id, e);
    }
}

/// Flip one flag and persist the whole vector. Returns the new state, or
/// `None` when the index is out of range for the activity.
pub fn progress_toggle(
    conn: &Connection,
    activity_id: &str,
    expected_len: usize,
    task_index: usize,
) -> Option<Vec<bool>> {
    if task_index >= expected_len {
        return None;
    }
    let mut flags = progress_load(conn, activity_id, expected_len);
    flags[task_index] = !flags[task_index];
    progress_save(conn, activity_id, &flags);
    Some(flags)
}

pub fn progress_reset(conn: &Connection, activity_id: &str, expected_len: usize) {
    progress_save(conn, activity_id, &vec![false; expected_len]);
}

pub fn settings_set_json(
    conn: &Connection,
    key: &str,
    value: &serde_json::Value,
) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, serde_json::to_string(value)?),
    )?;
    Ok(())
}

pub fn settings_get_json(conn: &Connection, key: &str) -> anyhow::Result<Option<serde_json::Value>> {
    let text: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key = ?", [key], |r| {
            r.get(0)
        })
        .optional()?;
    match text {
        Some(t) => Ok(Some(serde_json::from_str(&t)?)),
        None => Ok(None),
    }
}
