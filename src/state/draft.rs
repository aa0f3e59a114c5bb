//! Card draft data model

use base64::Engine;

/// Maximum accepted image size (5 MiB)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Largest accepted width or height of an uploaded image, in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 8192;

/// Raster encodings accepted for card images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEncoding {
    Jpeg,
    Png,
}

impl ImageEncoding {
    /// Map a sniffed `image` format onto an accepted encoding
    pub fn from_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            image::ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
        }
    }
}

/// An uploaded image held as raw bytes plus its declared encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub encoding: ImageEncoding,
    /// File name the image was loaded from (for display only)
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl ImagePayload {
    /// Inline text form (`data:<mime>;base64,<...>`) for embedding in markup
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.encoding.mime_type(),
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    /// Short human-readable summary, e.g. `qr.png · PNG 400×400 · 12.5 KB`
    pub fn summary(&self) -> String {
        format!(
            "{} · {} {}×{} · {}",
            self.file_name,
            self.encoding.label(),
            self.width,
            self.height,
            format_size(self.bytes.len() as u64)
        )
    }
}

/// Format a byte count for display
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Text fields of the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    PhoneNumber,
    Message,
}

/// Image slots of the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Profile,
    Qr,
}

impl ImageSlot {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile Picture",
            Self::Qr => "bKash QR Code",
        }
    }
}

/// Everything the user has entered for the card being built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub name: String,
    pub phone_number: String,
    pub message: String,
    pub profile_image: Option<ImagePayload>,
    pub qr_image: Option<ImagePayload>,
}

impl CardDraft {
    /// Exports and sharing need both a name and a phone number
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.phone_number.is_empty()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::PhoneNumber => &self.phone_number,
            TextField::Message => &self.message,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::PhoneNumber => &mut self.phone_number,
            TextField::Message => &mut self.message,
        }
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&ImagePayload> {
        match slot {
            ImageSlot::Profile => self.profile_image.as_ref(),
            ImageSlot::Qr => self.qr_image.as_ref(),
        }
    }

    pub fn image_mut(&mut self, slot: ImageSlot) -> &mut Option<ImagePayload> {
        match slot {
            ImageSlot::Profile => &mut self.profile_image,
            ImageSlot::Qr => &mut self.qr_image,
        }
    }
}
