//! Application state module

mod app_state;
mod draft;
mod forms;
mod notifications;
mod store;

pub use app_state::*;
pub use draft::*;
pub use forms::*;
pub use notifications::*;
pub use store::*;
