//! Lifecycle of one submission attempt.

/// Exactly one variant is active at a time. A frontend owns one of these
/// per form instance for the instance's lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Ready(f64),
    Failed(String),
}

impl RequestState {
    /// Enter `Loading`, clearing any prior result or error.
    ///
    /// Returns `false` without side effects if a submission is already in
    /// flight; duplicate concurrent requests are never issued.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Loading) {
            return false;
        }
        *self = Self::Loading;
        true
    }

    /// Resolve the in-flight submission. The loading flag is gone on every
    /// path out of here.
    pub fn finish(&mut self, outcome: Result<f64, String>) {
        *self = match outcome {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Ready(value) => Some(*value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Render a forecast for display: two decimals, unit label supplied by
/// the caller ("Parts Per Hour" in both frontends).
pub fn format_prediction(value: f64) -> String {
    format!("{value:.2}")
}
