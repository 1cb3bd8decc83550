pub mod health;
pub mod page;
pub mod records;
pub mod stats;

pub use health::health_check;
pub use page::render_page;
pub use stats::get_stats;
