mod card_renderer;
mod list_renderer;
mod stats_panel;

pub use card_renderer::{html_escape, CardRenderer, ExpiryClass, ExpiryDisplay, DEFAULT_URGENT_DAYS};
pub use list_renderer::render_list;
pub use stats_panel::update_stats_panel;
