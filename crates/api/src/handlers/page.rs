use axum::{
    extract::{Query, State},
    response::Html,
};
use restriction_board_application::RestrictionBoard;
use restriction_board_infrastructure::view::HtmlDocument;
use tracing::{debug, instrument};

use crate::{dto::RecordsQuery, errors::ApiError, state::AppState};

/// Renders the board page, replaying the filter button and search box state
/// carried in the query string.
#[instrument(skip(state), name = "page_render")]
pub async fn render_page(
    State(state): State<AppState>,
    Query(params): Query<RecordsQuery>,
) -> Result<Html<String>, ApiError> {
    let document = HtmlDocument::new(state.title.as_ref()).with_search(params.query());
    let mut board = RestrictionBoard::new(state.board.clone(), document);
    board.init()?;

    if let Some(filter) = params.filter.as_deref() {
        board.on_filter_clicked(filter)?;
    } else if !params.query().trim().is_empty() {
        board.on_search_submit()?;
    }

    debug!(
        shown = board.filtered().len(),
        filter = %board.active_filter(),
        "Board page rendered"
    );
    Ok(Html(board.into_surface().render()))
}
