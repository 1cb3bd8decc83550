mod json_seed_loader;

pub use json_seed_loader::{load_seed_file, parse_seed_json};
