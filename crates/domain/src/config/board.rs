use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    /// Page heading and `<title>`
    #[serde(default = "default_title")]
    pub title: String,

    /// Cards expiring within this many days get the urgent highlight
    #[serde(default = "default_urgent_days")]
    pub urgent_days: i64,

    /// JSON file with the initial records; built-in records when absent
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            urgent_days: default_urgent_days(),
            seed_file: None,
        }
    }
}

fn default_title() -> String {
    "Crystalforge Web Services".to_string()
}

fn default_urgent_days() -> i64 {
    7
}
