use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::plan::Activity;
use crate::store;
use crate::summary;
use serde_json::json;

fn resolve_activity<'a>(
    state: &'a AppState,
    req: &Request,
) -> Result<&'a Activity, serde_json::Value> {
    let Some(activity_id) = req.params.get("activityId").and_then(|v| v.as_str()) else {
        return Err(err(&req.id, "bad_params", "missing params.activityId", None));
    };
    state.plan.activity(activity_id).ok_or_else(|| {
        err(
            &req.id,
            "not_found",
            "activity not found",
            Some(json!({ "activityId": activity_id })),
        )
    })
}

/// Mutation response: the activity's new flags plus the full per-year
/// re-aggregation, so the UI can refresh every progress bar in one pass.
fn mutation_result(
    state: &AppState,
    conn: &rusqlite::Connection,
    req: &Request,
    completed: Vec<bool>,
) -> serde_json::Value {
    let percent = summary::activity_percent(&completed);
    let years = summary::year_summaries(&state.plan, conn);
    ok(
        &req.id,
        json!({
            "completed": completed,
            "percent": percent,
            "years": years,
        }),
    )
}

fn handle_toggle(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "no workspace selected", None);
    };
    let activity = match resolve_activity(state, req) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let Some(task_index) = req.params.get("taskIndex").and_then(|v| v.as_u64()) else {
        return err(&req.id, "bad_params", "missing params.taskIndex", None);
    };

    let task_count = activity.tasks.len();
    match store::progress_toggle(conn, &activity.id, task_count, task_index as usize) {
        Some(completed) => mutation_result(state, conn, req, completed),
        None => err(
            &req.id,
            "bad_params",
            "taskIndex out of range",
            Some(json!({ "taskIndex": task_index, "taskCount": task_count })),
        ),
    }
}

fn handle_save(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "no workspace selected", None);
    };
    let activity = match resolve_activity(state, req) {
        Ok(a) => a,
        Err(resp) => return resp,
    };
    let Some(values) = req.params.get("completed").and_then(|v| v.as_array()) else {
        return err(&req.id, "bad_params", "missing params.completed", None);
    };
    let mut completed = Vec::with_capacity(values.len());
    for v in values {
        match v.as_bool() {
            Some(b) => completed.push(b),
            None => {
                return err(
                    &req.id,
                    "bad_params",
                    "completed must be an array of booleans",
                    None,
                );
            }
        }
    }
    if completed.len() != activity.tasks.len() {
        return err(
            &req.id,
            "bad_params",
            "completed length must match the task count",
            Some(json!({
                "expected": activity.tasks.len(),
                "got": completed.len(),
            })),
        );
    }

    store::progress_save(conn, &activity.id, &completed);
    mutation_result(state, conn, req, completed)
}

fn handle_reset(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "no workspace selected", None);
    };
    let activity = match resolve_activity(state, req) {
        Ok(a) => a,
        Err(resp) => return resp,
    };

    let task_count = activity.tasks.len();
    store::progress_reset(conn, &activity.id, task_count);
    mutation_result(state, conn, req, vec![false; task_count])
}

fn handle_summary_years(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "no workspace selected", None);
    };
    let years = summary::year_summaries(&state.plan, conn);
    ok(&req.id, json!({ "years": years }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "progress.toggle" => Some(handle_toggle(state, req)),
        "progress.save" => Some(handle_save(state, req)),
        "progress.reset" => Some(handle_reset(state, req)),
        "summary.years" => Some(handle_summary_years(state, req)),
        _ => None,
    }
}
