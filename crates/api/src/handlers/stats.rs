use axum::{extract::State, Json};
use restriction_board_domain::RestrictionStats;
use tracing::{debug, instrument};

use crate::{errors::ApiError, state::AppState};

#[instrument(skip(state), name = "api_get_stats")]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<RestrictionStats>, ApiError> {
    let stats = state.board.get_stats.execute()?;
    debug!(
        blocked = stats.blocked,
        restricted = stats.restricted,
        warning = stats.warning,
        soft_blocked = stats.soft_blocked,
        total = stats.total,
        "Statistics retrieved successfully"
    );
    Ok(Json(stats))
}
