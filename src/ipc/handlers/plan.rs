use crate::content;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::plan::{default_start, Activity, CurriculumPlan};
use crate::store;
use crate::summary;
use chrono::NaiveDate;
use serde_json::json;

pub const PLAN_CONFIG_KEY: &str = "plan.config";

/// The record shape the calendar renderer consumes: ISO dates, exclusive
/// `end`, everything else under `extendedProps`.
fn activity_record(a: &Activity) -> serde_json::Value {
    json!({
        "id": a.id,
        "title": a.title,
        "start": a.start.to_string(),
        "end": a.end.to_string(),
        "extendedProps": {
            "year": a.year,
            "tasks": a.tasks,
            "resources": a.resources,
            "why": a.why,
            "due": a.due.to_string(),
        },
    })
}

/// Rebuild the plan from the workspace's persisted config. Any missing or
/// corrupt piece of the config falls back to the defaults; a config that
/// cannot produce a plan leaves the previous plan in place.
pub fn plan_from_settings(conn: &rusqlite::Connection, previous: &CurriculumPlan) -> CurriculumPlan {
    let config = match store::settings_get_json(conn, PLAN_CONFIG_KEY) {
        Ok(v) => v.unwrap_or_default(),
        Err(e) => {
            log::warn!("plan config unreadable, using defaults: {}", e);
            serde_json::Value::Null
        }
    };

    let start = config
        .get("startDate")
        .and_then(|v| v.as_str())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .unwrap_or_else(default_start);
    let variant = config
        .get("variant")
        .and_then(|v| v.as_str())
        .unwrap_or(content::DEFAULT_VARIANT);

    let table = match content::content_table(variant) {
        Some(t) => t,
        None => {
            log::warn!("unknown plan variant {:?}, using default", variant);
            content::default_table()
        }
    };
    match CurriculumPlan::build(start, &table) {
        Ok(plan) => plan,
        Err(e) => {
            log::warn!("stored plan config is unusable, keeping previous plan: {}", e);
            previous.clone()
        }
    }
}

fn handle_plan_events(state: &mut AppState, req: &Request) -> serde_json::Value {
    let events: Vec<serde_json::Value> = state
        .plan
        .activities()
        .iter()
        .map(activity_record)
        .collect();
    ok(
        &req.id,
        json!({
            "planStart": state.plan.start().to_string(),
            "planVariant": state.plan.variant(),
            "events": events,
        }),
    )
}

fn handle_plan_configure(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "no workspace selected", None);
    };

    let start = match req.params.get("startDate").and_then(|v| v.as_str()) {
        Some(text) => match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                return err(
                    &req.id,
                    "bad_params",
                    "startDate must be an ISO date (YYYY-MM-DD)",
                    Some(json!({ "startDate": text })),
                );
            }
        },
        None => state.plan.start(),
    };
    let variant = req
        .params
        .get("variant")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| state.plan.variant())
        .to_string();

    let Some(table) = content::content_table(&variant) else {
        return err(
            &req.id,
            "bad_params",
            "unknown plan variant",
            Some(json!({ "variant": variant })),
        );
    };
    let plan = match CurriculumPlan::build(start, &table) {
        Ok(p) => p,
        Err(e) => {
            return err(&req.id, "bad_params", e.to_string(), None);
        }
    };

    let config = json!({
        "startDate": plan.start().to_string(),
        "variant": plan.variant(),
    });
    if let Err(e) = store::settings_set_json(conn, PLAN_CONFIG_KEY, &config) {
        // The new plan still applies for this session.
        log::warn!("plan config not persisted: {}", e);
    }
    state.plan = plan;

    ok(
        &req.id,
        json!({
            "planStart": state.plan.start().to_string(),
            "planVariant": state.plan.variant(),
            "activityCount": state.plan.activities().len(),
        }),
    )
}

fn handle_activity_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "no workspace selected", None);
    };
    let Some(activity_id) = req.params.get("activityId").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.activityId", None);
    };
    let Some(activity) = state.plan.activity(activity_id) else {
        return err(
            &req.id,
            "not_found",
            "activity not found",
            Some(json!({ "activityId": activity_id })),
        );
    };

    let completed = store::progress_load(conn, &activity.id, activity.tasks.len());
    let percent = summary::activity_percent(&completed);
    ok(
        &req.id,
        json!({
            "activity": activity_record(activity),
            "completed": completed,
            "percent": percent,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "plan.events" => Some(handle_plan_events(state, req)),
        "plan.configure" => Some(handle_plan_configure(state, req)),
        "activity.get" => Some(handle_activity_get(state, req)),
        _ => None,
    }
}
