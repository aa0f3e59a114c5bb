//! Form field value objects

use crate::state::{ImageSlot, TextField};

/// What a form field edits in the card draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBinding {
    /// A text field, synced to the draft on every keystroke
    Text(TextField),
    /// A file path, loaded into an image slot on Enter
    Image(ImageSlot),
}

/// Represents a single form field with its configuration and input buffer
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub binding: FieldBinding,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str, placeholder: &str, field: TextField, is_multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            binding: FieldBinding::Text(field),
            is_multiline,
        }
    }

    /// Create a new image path field
    pub fn image_path(label: &str, slot: ImageSlot) -> Self {
        Self {
            label: label.to_string(),
            placeholder: "Path to a PNG, JPG or JPEG (max 5MB)".to_string(),
            value: String::new(),
            binding: FieldBinding::Image(slot),
            is_multiline: false,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character; returns false if the field was empty
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn text_field(&self) -> Option<TextField> {
        match self.binding {
            FieldBinding::Text(field) => Some(field),
            FieldBinding::Image(_) => None,
        }
    }

    pub fn image_slot(&self) -> Option<ImageSlot> {
        match self.binding {
            FieldBinding::Image(slot) => Some(slot),
            FieldBinding::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_binding() {
        let field = FormField::text("Your Name", "Your Name", TextField::Name, false);
        assert_eq!(field.text_field(), Some(TextField::Name));
        assert_eq!(field.image_slot(), None);
        assert!(!field.is_multiline);
    }

    #[test]
    fn test_image_field_binding() {
        let field = FormField::image_path("bKash QR Code", ImageSlot::Qr);
        assert_eq!(field.image_slot(), Some(ImageSlot::Qr));
        assert_eq!(field.text_field(), None);
        assert!(field.placeholder.contains("5MB"));
    }

    #[test]
    fn test_editing() {
        let mut field = FormField::text("Message", "", TextField::Message, true);
        field.push_char('h');
        field.push_char('i');
        assert_eq!(field.as_text(), "hi");
        assert!(field.pop_char());
        assert_eq!(field.as_text(), "h");
        field.clear();
        assert!(!field.pop_char());
        field.set_text("Eid");
        assert_eq!(field.as_text(), "Eid");
    }
}
