//! mc-core: stable foundation for moldcast.
//!
//! Contains:
//! - fields (the seventeen process parameters and their wire names)
//! - payload (the JSON document sent to the prediction service)
//! - numeric (lenient text-to-number conversion)
//! - error (shared error types)

pub mod error;
pub mod fields;
pub mod numeric;
pub mod payload;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use fields::*;
pub use numeric::lenient_number;
pub use payload::PredictionInput;
