//! Fire-and-forget user notifications.
//!
//! The pipeline emits one notification per terminal outcome and never
//! consumes a return value; frontends decide how the notice surfaces.

pub trait Notifier {
    fn success(&mut self, title: &str, detail: &str);

    fn failure(&mut self, title: &str, detail: &str);
}

/// Notifier that forwards to the tracing subscriber; used by the CLI and
/// anywhere no visual notice surface exists.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&mut self, title: &str, detail: &str) {
        tracing::info!(title, detail, "prediction notification");
    }

    fn failure(&mut self, title: &str, detail: &str) {
        tracing::warn!(title, detail, "prediction notification");
    }
}
