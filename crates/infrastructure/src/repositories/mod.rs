pub mod in_memory_restriction_repository;

pub use in_memory_restriction_repository::InMemoryRestrictionRepository;
