mod confirm;
mod detail;
mod form;

pub use confirm::confirm_dialog;
pub use detail::detail_dialog;
pub use form::form_dialog;
