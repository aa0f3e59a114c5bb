//! Application state definitions

use super::forms::{CardForm, Form};
use super::notifications::Notifications;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Form and live preview side by side
    #[default]
    Editor,
    /// "Create / Share / Receive" guide above the editor
    Instructions,
}

impl View {
    pub fn toggle_instructions(&self) -> Self {
        match self {
            Self::Editor => Self::Instructions,
            Self::Instructions => Self::Editor,
        }
    }
}

/// UI state that is not part of the card itself
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: CardForm,
    pub notifications: Notifications,
}

impl AppState {
    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    pub fn toggle_instructions(&mut self) {
        self.current_view = self.current_view.toggle_instructions();
    }

    pub fn shows_instructions(&self) -> bool {
        matches!(self.current_view, View::Instructions)
    }
}
