use crate::ipc::error::{err, ok};
use crate::ipc::handlers::plan::plan_from_settings;
use crate::ipc::types::{AppState, Request};
use crate::store;
use serde_json::json;
use std::path::PathBuf;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "workspacePath": state.workspace.as_ref().map(|p| p.to_string_lossy().to_string()),
            "planVariant": state.plan.variant(),
        }),
    )
}

fn handle_workspace_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);
    let Some(path) = p else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };

    match store::open_db(&path) {
        Ok(conn) => {
            // A previously configured start date or variant lives in the
            // workspace settings; corrupt settings fall back to defaults.
            state.plan = plan_from_settings(&conn, &state.plan);
            state.workspace = Some(path.clone());
            state.db = Some(conn);
            log::info!("workspace opened: {}", path.to_string_lossy());
            ok(
                &req.id,
                json!({
                    "workspacePath": path.to_string_lossy(),
                    "planStart": state.plan.start().to_string(),
                    "planVariant": state.plan.variant(),
                }),
            )
        }
        Err(e) => err(&req.id, "db_open_failed", format!("{e:?}"), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "workspace.select" => Some(handle_workspace_select(state, req)),
        _ => None,
    }
}
