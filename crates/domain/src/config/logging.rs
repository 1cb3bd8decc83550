use serde::{Deserialize, Serialize};

const CRATE_TARGETS: [&str; 5] = [
    "restriction_board",
    "restriction_board_domain",
    "restriction_board_application",
    "restriction_board_infrastructure",
    "restriction_board_api",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Level for the board's own crates and HTTP tracing.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset. Third-party
    /// crates other than `tower_http` stay at `warn`.
    pub fn filter_directive(&self) -> String {
        let mut directive = String::from("warn");
        for target in CRATE_TARGETS.iter().chain(["tower_http"].iter()) {
            directive.push_str(&format!(",{}={}", target, self.level));
        }
        directive
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
