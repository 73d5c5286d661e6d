//! mc-form: shared form/submission layer for the moldcast frontends.
//!
//! This crate owns everything between raw user input and a resolved
//! prediction: the form state container, the request lifecycle state
//! machine, the submission pipeline, the notification capability, and
//! the session-local prediction log. Both the GUI and the CLI sit on
//! top of it; neither re-implements submission semantics.

pub mod error;
pub mod form_state;
pub mod notify;
pub mod request;
pub mod session_log;
pub mod submit;

pub use error::FormError;
pub use form_state::FormFields;
pub use notify::{LogNotifier, Notifier};
pub use request::{RequestState, format_prediction};
pub use session_log::{PredictionRecord, SessionLog};
pub use submit::{resolve, run_prediction, submit};
