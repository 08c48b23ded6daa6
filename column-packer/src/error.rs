use thiserror::Error;

/// Why a set of layout inputs was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("column count must be at least 1")]
    ZeroColumns,
    #[error("content width must be non-negative (got {0})")]
    NegativeWidth(f64),
    #[error("cell padding must be non-negative (got {0})")]
    NegativePadding(f64),
    #[error("content width and cell padding must be finite")]
    NonFinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// Raised before any state is touched; the packer keeps its previous cache.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),
    /// A [`crate::LayoutSnapshot`] was internally inconsistent and was not restored.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(&'static str),
}
