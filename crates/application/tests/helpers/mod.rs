pub mod fake_surface;
pub mod mock_repositories;

pub use fake_surface::*;
pub use mock_repositories::*;
