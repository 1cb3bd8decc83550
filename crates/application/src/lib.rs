//! Restriction Board Application Layer
pub mod board;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use board::{BoardContext, RestrictionBoard};
