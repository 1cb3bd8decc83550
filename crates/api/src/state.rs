use restriction_board_application::BoardContext;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub board: BoardContext,
    pub title: Arc<str>,
}

impl AppState {
    pub fn new(board: BoardContext, title: impl Into<Arc<str>>) -> Self {
        Self {
            board,
            title: title.into(),
        }
    }
}
