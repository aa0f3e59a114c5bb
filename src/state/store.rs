//! Draft store: owns the card draft and broadcasts every change

use super::draft::{
    CardDraft, ImageEncoding, ImagePayload, ImageSlot, TextField, MAX_IMAGE_BYTES,
    MAX_IMAGE_DIMENSION,
};
use crate::error::UploadError;
use crate::share::LinkFields;
use directories::BaseDirs;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Consumer of draft changes. Receives the whole draft, never a diff.
pub type DraftListener = Box<dyn FnMut(&CardDraft) + Send>;

/// Holds the current card draft and notifies a single listener after each
/// successful mutation.
#[derive(Default)]
pub struct DraftStore {
    draft: CardDraft,
    listener: Option<DraftListener>,
    hydrated: bool,
}

impl std::fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStore")
            .field("draft", &self.draft)
            .field("has_listener", &self.listener.is_some())
            .field("hydrated", &self.hydrated)
            .finish()
    }
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CardDraft {
        &self.draft
    }

    /// Install the change listener, replacing any previous one
    pub fn set_listener(&mut self, listener: DraftListener) {
        self.listener = Some(listener);
    }

    /// Replace a text field
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        *self.draft.text_mut(field) = value.into();
        self.notify();
    }

    /// Validate and load an image file into a slot.
    ///
    /// On any error the draft is left untouched and no notification is sent.
    pub fn upload_image(&mut self, slot: ImageSlot, path: &Path) -> Result<(), UploadError> {
        let payload = load_image(path)?;
        tracing::info!(
            slot = ?slot,
            file = %payload.file_name,
            bytes = payload.bytes.len(),
            "image uploaded"
        );
        *self.draft.image_mut(slot) = Some(payload);
        self.notify();
        Ok(())
    }

    /// Drop the image in a slot. Returns false if the slot was already empty.
    pub fn clear_image(&mut self, slot: ImageSlot) -> bool {
        if self.draft.image_mut(slot).take().is_some() {
            self.notify();
            true
        } else {
            false
        }
    }

    /// Seed the text fields from a decoded share link.
    ///
    /// Only the first call per session has any effect; returns whether the
    /// fields were applied.
    pub fn hydrate_from_link(&mut self, fields: LinkFields) -> bool {
        if self.hydrated {
            return false;
        }
        self.hydrated = true;
        self.draft.name = fields.name;
        self.draft.phone_number = fields.phone;
        self.draft.message = fields.message;
        self.notify();
        true
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.draft);
        }
    }
}

/// Read an image file and check it against the upload rules
pub fn load_image(path: &Path) -> Result<ImagePayload, UploadError> {
    let io_err = |source| UploadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_err)?.len();
    if size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }

    let bytes = fs::read(path).map_err(io_err)?;
    // The file may have grown between the metadata check and the read
    if bytes.len() as u64 > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge {
            path: path.to_path_buf(),
            size: bytes.len() as u64,
            limit: MAX_IMAGE_BYTES,
        });
    }

    let format = image::guess_format(&bytes).map_err(|_| UploadError::UnsupportedType {
        path: path.to_path_buf(),
    })?;
    let encoding =
        ImageEncoding::from_format(format).ok_or_else(|| UploadError::UnsupportedType {
            path: path.to_path_buf(),
        })?;

    let (width, height) = image::ImageReader::with_format(Cursor::new(&bytes), format)
        .into_dimensions()
        .map_err(|source| UploadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    // Checked from the header, before any pixel data is decoded
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(UploadError::DimensionsTooLarge {
            path: path.to_path_buf(),
            width,
            height,
            limit: MAX_IMAGE_DIMENSION,
        });
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ImagePayload {
        bytes,
        encoding,
        file_name,
        width,
        height,
    })
}

/// Turn a typed or pasted path into a filesystem path.
///
/// Strips surrounding whitespace and quotes (terminals quote dropped files)
/// and expands a leading `~`.
pub fn normalize_input_path(input: &str) -> PathBuf {
    let trimmed = input.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| {
            trimmed
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
        })
        .unwrap_or(trimmed);

    if let Some(rest) = unquoted.strip_prefix("~/") {
        if let Some(dirs) = BaseDirs::new() {
            return dirs.home_dir().join(rest);
        }
    }
    PathBuf::from(unquoted)
}
