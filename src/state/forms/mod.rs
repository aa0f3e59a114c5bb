//! Form domain layer
//!
//! Input buffers and navigation for the card form. Text fields mirror the
//! card draft; image fields hold the path being typed until it is loaded.

mod field;
mod form_state;

pub use field::{FieldBinding, FormField};
pub use form_state::{ActionButton, CardForm, Form};

#[cfg(test)]
pub use form_state::BUTTONS_ROW;
