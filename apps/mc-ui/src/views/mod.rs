mod form_view;
mod log_view;

pub use form_view::{FormActions, FormView};
pub use log_view::LogView;
