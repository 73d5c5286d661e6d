//! The submission pipeline: guard, convert, one round trip, resolve.

use mc_client::{PredictionClient, Transport};

use crate::error::FormError;
use crate::form_state::FormFields;
use crate::notify::Notifier;
use crate::request::RequestState;

pub const SUCCESS_TITLE: &str = "Prediction Complete";
pub const SUCCESS_DETAIL: &str = "Machine output prediction calculated successfully.";
pub const FAILURE_TITLE: &str = "Prediction Failed";
pub const FAILURE_DETAIL: &str = "Could not connect to the API server.";

/// One prediction attempt: payload conversion plus the network call.
/// This is the sole suspension point; frontends that must stay
/// responsive run it off the UI thread.
pub fn run_prediction<T: Transport>(
    fields: &FormFields,
    client: &PredictionClient<T>,
) -> Result<f64, FormError> {
    let input = fields.to_input()?;
    Ok(client.predict(&input)?)
}

/// Resolve an in-flight submission and emit its notification.
pub fn resolve(state: &mut RequestState, notifier: &mut dyn Notifier, outcome: Result<f64, String>) {
    match outcome {
        Ok(value) => {
            tracing::info!(value, "prediction resolved");
            state.finish(Ok(value));
            notifier.success(SUCCESS_TITLE, SUCCESS_DETAIL);
        }
        Err(message) => {
            tracing::warn!(%message, "prediction failed");
            state.finish(Err(message));
            notifier.failure(FAILURE_TITLE, FAILURE_DETAIL);
        }
    }
}

/// The whole pipeline, synchronously: guard against incomplete fields and
/// duplicate submissions, run the request, resolve the state, notify.
/// Errors never propagate past this boundary.
pub fn submit<T: Transport>(
    fields: &FormFields,
    client: &PredictionClient<T>,
    state: &mut RequestState,
    notifier: &mut dyn Notifier,
) {
    if !fields.is_complete() {
        return;
    }
    if !state.begin() {
        return;
    }

    let outcome = run_prediction(fields, client).map_err(|e| e.to_string());
    resolve(state, notifier, outcome);
}
