use restriction_board_api::AppState;
use restriction_board_application::BoardContext;
use restriction_board_domain::Config;
use restriction_board_infrastructure::system::SystemClock;
use std::sync::Arc;

use super::Repositories;

pub struct UseCases {
    pub board: BoardContext,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        Self {
            board: BoardContext::new(
                repos.restrictions.clone(),
                Arc::new(SystemClock),
                config.board.urgent_days,
            ),
        }
    }

    pub fn into_app_state(self, config: &Config) -> AppState {
        AppState::new(self.board, config.board.title.as_str())
    }
}
