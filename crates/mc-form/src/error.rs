//! Unified error for the submission boundary.

use thiserror::Error;

/// Everything that can go wrong between raw fields and a forecast.
/// Callers at the submission boundary reduce it to a display message;
/// nothing propagates past that point.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Field(#[from] mc_core::CoreError),

    #[error(transparent)]
    Client(#[from] mc_client::ClientError),
}
