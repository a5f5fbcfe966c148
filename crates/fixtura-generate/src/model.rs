use serde::{Deserialize, Serialize};

use crate::linker::DEFAULT_CATEGORY_COUNT;

/// Caller-facing generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Install the fixed seed so output is reproducible.
    pub seeded: bool,
    /// Number of categories products are spread across.
    pub category_count: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seeded: true,
            category_count: DEFAULT_CATEGORY_COUNT,
        }
    }
}
