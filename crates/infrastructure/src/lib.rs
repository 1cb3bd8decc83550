//! Restriction Board Infrastructure Layer
pub mod repositories;
pub mod seed;
pub mod system;
pub mod view;
