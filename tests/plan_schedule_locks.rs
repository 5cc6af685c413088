use chrono::NaiveDate;
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

fn request_ok(
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
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn events_of(result: &serde_json::Value) -> Vec<serde_json::Value> {
    result
        .get("events")
        .and_then(|e| e.as_array())
        .expect("events array")
        .clone()
}

fn iso(event: &serde_json::Value, field: &str) -> NaiveDate {
    let text = if field == "due" {
        event
            .get("extendedProps")
            .and_then(|p| p.get("due"))
            .and_then(|v| v.as_str())
            .expect("due field")
    } else {
        event.get(field).and_then(|v| v.as_str()).expect(field)
    };
    NaiveDate::parse_from_str(text, "%Y-%m-%d").expect("ISO date")
}

fn event_by_id<'a>(
    events: &'a [serde_json::Value],
    id: &str,
) -> &'a serde_json::Value {
    events
        .iter()
        .find(|e| e.get("id").and_then(|v| v.as_str()) == Some(id))
        .unwrap_or_else(|| panic!("event {} missing", id))
}

#[test]
fn classic_schedule_dates_hold() {
    let workspace = temp_dir("cogency-schedule-locks");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let result = request_ok(&mut stdin, &mut reader, "2", "plan.events", json!({}));
    assert_eq!(
        result.get("planStart").and_then(|v| v.as_str()),
        Some("2026-01-01")
    );
    let events = events_of(&result);
    assert_eq!(events.len(), 23);

    // First quarter of the plan.
    let y1q1 = event_by_id(&events, "Y1Q1");
    assert_eq!(iso(y1q1, "start").to_string(), "2026-01-01");
    assert_eq!(iso(y1q1, "end").to_string(), "2026-04-01");
    assert_eq!(iso(y1q1, "due").to_string(), "2026-03-31");

    // Everywhere: due is the day before the exclusive end.
    for event in &events {
        let end = iso(event, "end");
        let due = iso(event, "due");
        assert_eq!(due.succ_opt(), Some(end), "event {:?}", event.get("id"));
    }

    // Quarterly buckets tile years 1-3 without gap or overlap.
    let quarter_ids: Vec<String> = (1..=3)
        .flat_map(|y| (1..=4).map(move |q| format!("Y{}Q{}", y, q)))
        .collect();
    for pair in quarter_ids.windows(2) {
        let prev = event_by_id(&events, &pair[0]);
        let next = event_by_id(&events, &pair[1]);
        assert_eq!(iso(prev, "end"), iso(next, "start"));
    }

    // Year 4 runs four parallel tracks over the same range.
    let year4: Vec<&serde_json::Value> = events
        .iter()
        .filter(|e| {
            e.get("extendedProps")
                .and_then(|p| p.get("year"))
                .and_then(|v| v.as_u64())
                == Some(4)
        })
        .collect();
    assert_eq!(year4.len(), 4);
    for track in &year4 {
        assert_eq!(iso(track, "start").to_string(), "2029-01-01");
        assert_eq!(iso(track, "end").to_string(), "2030-01-01");
    }

    // Year 6 halves are adjacent.
    let h1 = event_by_id(&events, "Y6H1Authority&Symbol");
    let h2 = event_by_id(&events, "Y6H2Form&Justice");
    assert_eq!(iso(h1, "end"), iso(h2, "start"));

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn reconfigured_plan_shifts_and_refolds() {
    let workspace = temp_dir("cogency-schedule-configure");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let configured = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "plan.configure",
        json!({ "startDate": "2026-07-01", "variant": "consolidated" }),
    );
    assert_eq!(
        configured.get("planStart").and_then(|v| v.as_str()),
        Some("2026-07-01")
    );
    assert_eq!(
        configured.get("activityCount").and_then(|v| v.as_u64()),
        Some(20)
    );

    let result = request_ok(&mut stdin, &mut reader, "3", "plan.events", json!({}));
    let events = events_of(&result);
    assert_eq!(events.len(), 20);

    let y1q1 = event_by_id(&events, "Y1Q1");
    assert_eq!(iso(y1q1, "start").to_string(), "2026-07-01");
    assert_eq!(iso(y1q1, "end").to_string(), "2026-10-01");

    let year5 = event_by_id(&events, "Y5Consolidation");
    assert_eq!(
        year5
            .get("extendedProps")
            .and_then(|p| p.get("tasks"))
            .and_then(|t| t.as_array())
            .map(|t| t.len()),
        Some(16)
    );

    // Config survives a restart of the sidecar.
    drop(stdin);
    let _ = child.wait();

    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let selected = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    assert_eq!(
        selected.get("planStart").and_then(|v| v.as_str()),
        Some("2026-07-01")
    );
    assert_eq!(
        selected.get("planVariant").and_then(|v| v.as_str()),
        Some("consolidated")
    );

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn bad_configure_params_are_rejected() {
    let workspace = temp_dir("cogency-schedule-bad-params");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    for (id, params) in [
        ("2", json!({ "startDate": "January 1st" })),
        ("3", json!({ "variant": "weekly" })),
    ] {
        let payload = json!({ "id": id, "method": "plan.configure", "params": params });
        writeln!(stdin, "{}", payload).expect("write request");
        stdin.flush().expect("flush request");
        let mut line = String::new();
        reader.read_line(&mut line).expect("read response line");
        let value: serde_json::Value =
            serde_json::from_str(line.trim()).expect("parse response json");
        assert_eq!(
            value
                .get("error")
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str()),
            Some("bad_params"),
            "params {} should be rejected",
            id
        );
    }

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}
