mod backup;
mod content;
mod ipc;
mod plan;
mod store;
mod summary;

use std::io::{self, BufRead, Write};

use serde_json::json;

fn main() -> anyhow::Result<()> {
    // stdout carries the response stream; diagnostics go to stderr.
    // RUST_LOG overrides the default level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let initial_plan = plan::CurriculumPlan::build(plan::default_start(), &content::default_table())?;
    let mut state = ipc::AppState {
        workspace: None,
        db: None,
        plan: initial_plan,
    };
    log::info!("cogencyd {} ready", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply with an id we never parsed.
                let reply = json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() },
                });
                let _ = writeln!(stdout, "{}", reply);
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }

    Ok(())
}
