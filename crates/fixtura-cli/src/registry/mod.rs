mod logging;
mod run;

pub use logging::init_logging;
pub use run::{RunManifest, new_run_id};

use thiserror::Error;

/// Errors raised while recording a run.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
