use restriction_board_domain::{DomainError, RestrictionRecord};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Reads the initial records from a JSON array in the record wire format.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<RestrictionRecord>, DomainError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        DomainError::SeedError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let records = parse_seed_json(&contents)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "Seed records loaded"
    );
    Ok(records)
}

pub fn parse_seed_json(contents: &str) -> Result<Vec<RestrictionRecord>, DomainError> {
    let records: Vec<RestrictionRecord> = serde_json::from_str(contents)
        .map_err(|e| DomainError::SeedError(format!("Invalid seed JSON: {}", e)))?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.clone()) {
            warn!(id = %record.id, "Duplicate record id in seed data");
        }
    }

    Ok(records)
}
