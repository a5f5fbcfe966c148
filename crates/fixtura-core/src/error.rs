use thiserror::Error;

/// Core error type shared across Fixtura crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A national identifier is not nine ASCII digits.
    #[error("invalid national id: {0}")]
    InvalidNationalId(String),
    /// A product names a category that is not part of the same batch.
    #[error("product {product} references unknown category {category}")]
    UnresolvedReference { product: u32, category: u32 },
    /// Two entities of the same shape share an identifier.
    #[error("duplicate {shape} id {id}")]
    DuplicateId { shape: &'static str, id: u32 },
}

/// Convenience alias for results returned by Fixtura crates.
pub type Result<T> = std::result::Result<T, Error>;
