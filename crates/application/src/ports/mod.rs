mod clock;
mod restriction_repository;
mod view_surface;

pub use clock::Clock;
pub use restriction_repository::RestrictionRepository;
pub use view_surface::{Region, StatSlot, ViewSurface};
