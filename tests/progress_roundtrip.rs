use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_cogencyd");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn cogencyd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn result_of(value: serde_json::Value) -> serde_json::Value {
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "request failed: {}",
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn completed_of(result: &serde_json::Value) -> Vec<bool> {
    result
        .get("completed")
        .and_then(|c| c.as_array())
        .expect("completed array")
        .iter()
        .map(|v| v.as_bool().expect("boolean flag"))
        .collect()
}

#[test]
fn toggled_progress_survives_a_restart() {
    let workspace = temp_dir("cogency-progress-restart");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = result_of(request(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    ));
    let toggled = result_of(request(
        &mut stdin,
        &mut reader,
        "2",
        "progress.toggle",
        json!({ "activityId": "Y1Q1", "taskIndex": 3 }),
    ));
    assert_eq!(
        completed_of(&toggled),
        vec![false, false, false, true, false, false]
    );

    drop(stdin);
    let _ = child.wait();

    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = result_of(request(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    ));
    let fetched = result_of(request(
        &mut stdin,
        &mut reader,
        "2",
        "activity.get",
        json!({ "activityId": "Y1Q1" }),
    ));
    assert_eq!(
        completed_of(&fetched),
        vec![false, false, false, true, false, false]
    );
    assert_eq!(fetched.get("percent").and_then(|v| v.as_i64()), Some(17));

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn save_overwrites_in_full_and_round_trips() {
    let workspace = temp_dir("cogency-progress-save");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = result_of(request(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    ));
    let pattern = vec![true, false, true, false, true, false];
    let saved = result_of(request(
        &mut stdin,
        &mut reader,
        "2",
        "progress.save",
        json!({ "activityId": "Y1Q1", "completed": pattern }),
    ));
    assert_eq!(
        completed_of(&saved),
        vec![true, false, true, false, true, false]
    );

    let fetched = result_of(request(
        &mut stdin,
        &mut reader,
        "3",
        "activity.get",
        json!({ "activityId": "Y1Q1" }),
    ));
    assert_eq!(
        completed_of(&fetched),
        vec![true, false, true, false, true, false]
    );
    assert_eq!(fetched.get("percent").and_then(|v| v.as_i64()), Some(50));

    // Wrong-length saves are rejected before touching the store.
    let rejected = request(
        &mut stdin,
        &mut reader,
        "4",
        "progress.save",
        json!({ "activityId": "Y1Q1", "completed": [true, true] }),
    );
    assert_eq!(
        rejected
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("bad_params")
    );

    let reset = result_of(request(
        &mut stdin,
        &mut reader,
        "5",
        "progress.reset",
        json!({ "activityId": "Y1Q1" }),
    ));
    assert_eq!(completed_of(&reset), vec![false; 6]);

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn stale_stored_length_is_discarded_on_load() {
    let workspace = temp_dir("cogency-progress-stale");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = result_of(request(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    ));
    let _ = result_of(request(
        &mut stdin,
        &mut reader,
        "2",
        "progress.toggle",
        json!({ "activityId": "Y1Q1", "taskIndex": 0 }),
    ));
    drop(stdin);
    let _ = child.wait();

    // Simulate a content update that changed the task count: rewrite the
    // stored row with a shorter array.
    let conn = rusqlite::Connection::open(workspace.join("cogency.sqlite3")).expect("open db");
    conn.execute(
        "UPDATE progress SET value = '[true,true]' WHERE key = 'progress_Y1Q1'",
        [],
    )
    .expect("shrink stored value");
    drop(conn);

    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = result_of(request(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    ));
    let fetched = result_of(request(
        &mut stdin,
        &mut reader,
        "2",
        "activity.get",
        json!({ "activityId": "Y1Q1" }),
    ));
    assert_eq!(completed_of(&fetched), vec![false; 6]);
    assert_eq!(fetched.get("percent").and_then(|v| v.as_i64()), Some(0));

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn toggle_out_of_range_and_unknown_activity_fail_cleanly() {
    let workspace = temp_dir("cogency-progress-errors");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = result_of(request(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    ));

    let out_of_range = request(
        &mut stdin,
        &mut reader,
        "2",
        "progress.toggle",
        json!({ "activityId": "Y1Q1", "taskIndex": 6 }),
    );
    assert_eq!(
        out_of_range
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("bad_params")
    );

    let unknown = request(
        &mut stdin,
        &mut reader,
        "3",
        "progress.toggle",
        json!({ "activityId": "Y9Q9", "taskIndex": 0 }),
    );
    assert_eq!(
        unknown
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("not_found")
    );

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}
