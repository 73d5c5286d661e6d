//! mc-client: HTTP client for the prediction service.
//!
//! The network sits behind the [`Transport`] trait so the submission
//! pipeline and tests can run against canned responses; production code
//! uses [`ReqwestTransport`]. One `predict` call is exactly one POST —
//! no retry, no timeout, no cancellation.

pub mod client;
pub mod error;
pub mod transport;

pub use client::{DEFAULT_ENDPOINT, PredictionClient};
pub use error::{ClientError, ClientResult};
pub use transport::{HttpReply, ReqwestTransport, Transport, TransportError};
