use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("no plan selection is pending")]
    NoPendingSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to write preference: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid plan catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown billing period: {0:?}")]
pub struct ParsePeriodError(pub String);
