use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short run identifier, e.g. `2024-01-01__run_1a2b3c4d`.
pub fn new_run_id() -> String {
    let date = Utc::now().format("%Y-%m-%d").to_string();
    let id = uuid::Uuid::new_v4().to_string();
    let short = match id.split('-').next() {
        Some(part) if !part.is_empty() => part.to_string(),
        _ => id,
    };
    format!("{date}__run_{short}")
}

/// Record written next to generated files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: String,
    pub entity: String,
    pub count: i64,
    pub seeded: bool,
    pub seed: Option<u64>,
    pub reference_date: String,
    pub category_count: Option<u32>,
    pub file: String,
    pub bytes_written: u64,
    pub cli_version: String,
    pub created_at: String,
    pub finished_at: Option<String>,
}

impl RunManifest {
    pub fn started(run_id: &str, entity: &str, count: i64, started_at: DateTime<Utc>) -> Self {
        Self {
            run_id: run_id.to_string(),
            entity: entity.to_string(),
            count,
            seeded: false,
            seed: None,
            reference_date: String::new(),
            category_count: None,
            file: String::new(),
            bytes_written: 0,
            cli_version: CLI_VERSION.to_string(),
            created_at: started_at.to_rfc3339(),
            finished_at: None,
        }
    }

    pub fn finish(&mut self, file: String, bytes_written: u64) {
        self.file = file;
        self.bytes_written = bytes_written;
        self.finished_at = Some(Utc::now().to_rfc3339());
    }
}
