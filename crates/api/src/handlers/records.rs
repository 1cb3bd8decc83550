use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use restriction_board_domain::{DomainError, NewRestrictionRecord, RecordFilter, StatusFilter};
use tracing::{debug, info};

use crate::{
    dto::{RecordResponse, RecordsQuery},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(get_records).post(create_record))
        .route("/records/{id}", get(get_record).delete(delete_record))
        .route("/records/{id}/card", get(get_record_card))
}

async fn get_records(
    State(state): State<AppState>,
    Query(params): Query<RecordsQuery>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let filter = RecordFilter::new(StatusFilter::parse(params.filter()), params.query());
    let records = state.board.filter_records.execute(&filter)?;
    debug!(
        count = records.len(),
        filter = %filter.category,
        "Records retrieved successfully"
    );

    let renderer = &state.board.card_renderer;
    Ok(Json(
        records
            .into_iter()
            .map(|record| RecordResponse::from_record(record, renderer))
            .collect(),
    ))
}

async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state
        .board
        .get_records
        .get_by_id(&id)?
        .ok_or(ApiError(DomainError::RecordNotFound(id)))?;
    Ok(Json(RecordResponse::from_record(
        record,
        &state.board.card_renderer,
    )))
}

async fn get_record_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let record = state
        .board
        .get_records
        .get_by_id(&id)?
        .ok_or(ApiError(DomainError::RecordNotFound(id)))?;
    Ok(Html(state.board.card_renderer.render(&record)))
}

async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<NewRestrictionRecord>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let record = state.board.add_record.execute(req)?;
    info!(id = %record.id, "Record created via API");

    Ok((
        StatusCode::CREATED,
        Json(RecordResponse::from_record(
            record,
            &state.board.card_renderer,
        )),
    ))
}

async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.board.remove_record.execute(&id)?;
    info!(id = %id, "Record deleted via API");
    Ok(StatusCode::NO_CONTENT)
}
