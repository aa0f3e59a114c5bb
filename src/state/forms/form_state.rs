//! Card form state and navigation

use super::field::FormField;
use crate::state::{CardDraft, ImageSlot, TextField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Preview actions, in button order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    DownloadImage,
    DownloadPdf,
    CopyLink,
}

impl ActionButton {
    pub const ALL: [ActionButton; 3] = [
        ActionButton::DownloadImage,
        ActionButton::DownloadPdf,
        ActionButton::CopyLink,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DownloadImage => "Download as Image",
            Self::DownloadPdf => "Download as PDF",
            Self::CopyLink => "Copy Link",
        }
    }
}

/// Index of the action buttons row
pub const BUTTONS_ROW: usize = 5;

// Card Form
#[derive(Debug, Clone)]
pub struct CardForm {
    pub profile_image: FormField,
    pub qr_image: FormField,
    pub phone_number: FormField,
    pub name: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: usize,
}

impl CardForm {
    pub fn new() -> Self {
        Self {
            profile_image: FormField::image_path("Profile Picture", ImageSlot::Profile),
            qr_image: FormField::image_path("bKash QR Code", ImageSlot::Qr),
            phone_number: FormField::text(
                "bKash Number",
                "+880 1X XXX XXX XX",
                TextField::PhoneNumber,
                false,
            ),
            name: FormField::text("Your Name", "Your Name", TextField::Name, false),
            message: FormField::text(
                "Message (Optional)",
                "Add a personal message...",
                TextField::Message,
                true,
            ),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Copy the draft's text fields into the input buffers
    pub fn sync_text_from(&mut self, draft: &CardDraft) {
        self.name.set_text(draft.text(TextField::Name));
        self.phone_number.set_text(draft.text(TextField::PhoneNumber));
        self.message.set_text(draft.text(TextField::Message));
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn selected_action(&self) -> ActionButton {
        ActionButton::ALL[self.selected_button % ActionButton::ALL.len()]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % ActionButton::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = ActionButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CardForm {
    fn field_count(&self) -> usize {
        6 // profile, qr, phone, name, message, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.profile_image),
            1 => Some(&mut self.qr_image),
            2 => Some(&mut self.phone_number),
            3 => Some(&mut self.name),
            4 => Some(&mut self.message),
            // Buttons row has no FormField
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.profile_image),
            1 => Some(&self.qr_image),
            2 => Some(&self.phone_number),
            3 => Some(&self.name),
            4 => Some(&self.message),
            _ => None,
        }
    }
}
