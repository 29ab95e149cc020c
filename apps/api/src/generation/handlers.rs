//! Axum route handlers for the timeline and career APIs.
//!
//! Create flow: validate body → generate via LLM → store. A record only
//! reaches the store once generation has succeeded.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::career::generate_career_roadmap;
use crate::generation::timeline::generate_life_timeline;
use crate::models::career::{CareerBody, CareerInput, CareerRecord, CAREER_REQUIRED_FIELDS};
use crate::models::record::NewRecord;
use crate::models::timeline::{
    TimelineBody, TimelineInput, TimelineRecord, TIMELINE_REQUIRED_FIELDS,
};
use crate::state::AppState;
use crate::validation::validate_body;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Parses a path id. Anything that is not an integer is a 400.
///
/// Zero and negative ids parse fine; they simply never match a record, so
/// the lookup turns them into a 404.
fn parse_id(raw: &str, kind: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::MalformedId(format!("Invalid {kind} ID")))
}

/// Unwraps a JSON body, turning axum's rejection into our 400.
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

// ────────────────────────────────────────────────────────────────────────────
// Timeline
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/timeline
pub async fn handle_create_timeline(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<TimelineRecord>), AppError> {
    let input: TimelineInput = validate_body(json_body(payload)?, TIMELINE_REQUIRED_FIELDS)?;

    let prediction = generate_life_timeline(
        state.generator.as_ref(),
        &input.personal_info,
        &input.goals,
        &input.habits,
    )
    .await?;

    // No authentication yet: every record is created without an owner.
    let record = state.store.timelines().create(NewRecord {
        owner_id: None,
        title: input.title,
        body: TimelineBody {
            personal_info: input.personal_info,
            goals: input.goals,
            habits: input.habits,
            prediction,
        },
    });

    info!("Created timeline {} ({:?})", record.id, record.title);
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/timeline/:id
pub async fn handle_get_timeline(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TimelineRecord>, AppError> {
    let id = parse_id(&raw_id, "timeline")?;
    u64::try_from(id)
        .ok()
        .and_then(|id| state.store.timelines().get(id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Timeline not found".to_string()))
}

/// GET /api/timelines
pub async fn handle_list_timelines(State(state): State<AppState>) -> Json<Vec<TimelineRecord>> {
    Json(state.store.timelines().list_by_owner(None))
}

/// DELETE /api/timeline/:id
pub async fn handle_delete_timeline(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&raw_id, "timeline")?;
    let removed = u64::try_from(id).is_ok_and(|id| state.store.timelines().delete(id));
    if !removed {
        return Err(AppError::NotFound("Timeline not found".to_string()));
    }

    info!("Deleted timeline {id}");
    Ok(Json(DeleteResponse {
        message: "Timeline deleted successfully".to_string(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Career
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/career
pub async fn handle_create_career(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CareerRecord>), AppError> {
    let input: CareerInput = validate_body(json_body(payload)?, CAREER_REQUIRED_FIELDS)?;

    let roadmap = generate_career_roadmap(
        state.generator.as_ref(),
        &input.dream_job,
        &input.current_profile,
        &input.preferences,
    )
    .await?;

    let record = state.store.careers().create(NewRecord {
        owner_id: None,
        title: input.title,
        body: CareerBody {
            dream_job: input.dream_job,
            current_profile: input.current_profile,
            preferences: input.preferences,
            roadmap,
        },
    });

    info!("Created career roadmap {} ({:?})", record.id, record.title);
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/career/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CareerRecord>, AppError> {
    let id = parse_id(&raw_id, "career")?;
    u64::try_from(id)
        .ok()
        .and_then(|id| state.store.careers().get(id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Career roadmap not found".to_string()))
}

/// GET /api/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Vec<CareerRecord>> {
    Json(state.store.careers().list_by_owner(None))
}

/// DELETE /api/career/:id
pub async fn handle_delete_career(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&raw_id, "career")?;
    let removed = u64::try_from(id).is_ok_and(|id| state.store.careers().delete(id));
    if !removed {
        return Err(AppError::NotFound("Career roadmap not found".to_string()));
    }

    info!("Deleted career roadmap {id}");
    Ok(Json(DeleteResponse {
        message: "Career roadmap deleted successfully".to_string(),
    }))
}
