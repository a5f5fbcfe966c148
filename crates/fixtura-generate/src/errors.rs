use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{shape}: no rule for field(s) {}", .fields.join(", "))]
    MissingRules {
        shape: &'static str,
        fields: Vec<&'static str>,
    },
    #[error("{shape}: rule registered for undeclared field '{field}'")]
    UnknownField {
        shape: &'static str,
        field: &'static str,
    },
    #[error("{shape}.{field} failed for entity {entity}: {message}")]
    RuleEvaluation {
        shape: &'static str,
        field: &'static str,
        entity: u32,
        message: String,
    },
    #[error("{shape}.{field}: no parent entities to reference")]
    UnresolvedReference {
        shape: &'static str,
        field: &'static str,
    },
    #[error("batch of {0} entities exceeds the identifier range")]
    CountTooLarge(i64),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("catalog error: {0}")]
    Catalog(#[from] fixtura_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
