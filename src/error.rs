//! Error types for uploads, share links, exports and the clipboard

use std::path::PathBuf;
use thiserror::Error;

/// Rejection reasons for an image upload. The draft is never touched when
/// one of these is returned.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{} is {size} bytes, the limit is {limit} bytes", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("{} is not a JPEG or PNG image", path.display())]
    UnsupportedType { path: PathBuf },

    #[error("{} is {width}x{height} pixels, the limit is {limit} per side", path.display())]
    DimensionsTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        limit: u32,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UploadError {
    /// Notification title shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            UploadError::TooLarge { .. } => "File too large",
            UploadError::UnsupportedType { .. } => "Invalid file type",
            UploadError::DimensionsTooLarge { .. } => "Image too large",
            UploadError::Decode { .. } => "Unreadable image",
            UploadError::Io { .. } => "Could not open file",
        }
    }

    /// Notification body shown to the user
    pub fn description(&self) -> String {
        match self {
            UploadError::TooLarge { .. } => "Please upload an image smaller than 5MB".to_string(),
            UploadError::UnsupportedType { .. } => {
                "Please upload a JPG, JPEG or PNG image".to_string()
            }
            UploadError::DimensionsTooLarge { limit, .. } => {
                format!("Please upload an image no larger than {limit}x{limit} pixels")
            }
            UploadError::Decode { .. } => "The file looks damaged, try another image".to_string(),
            UploadError::Io { source, .. } => source.to_string(),
        }
    }
}

/// Share link failures
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("name and phone number are required to build a share link")]
    MissingRequiredFields,

    #[error("invalid base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0:?} cannot be used as a share link base")]
    CannotBeABase(String),
}

/// Capture and artifact failures
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("name and phone number are required to export the card")]
    MissingRequiredFields,

    #[error("failed to lay out card: {0}")]
    Layout(#[from] resvg::usvg::Error),

    #[error("cannot allocate a {width}x{height} capture surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to encode capture: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to assemble pdf: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("failed to serialize pdf: {0}")]
    PdfWrite(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export task stopped unexpectedly: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Clipboard failures
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError::Write(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error_titles() {
        let too_large = UploadError::TooLarge {
            path: PathBuf::from("big.png"),
            size: 6 * 1024 * 1024,
            limit: 5 * 1024 * 1024,
        };
        assert_eq!(too_large.title(), "File too large");
        assert_eq!(
            too_large.description(),
            "Please upload an image smaller than 5MB"
        );

        let unsupported = UploadError::UnsupportedType {
            path: PathBuf::from("anim.gif"),
        };
        assert_eq!(unsupported.title(), "Invalid file type");
        assert!(unsupported.to_string().contains("anim.gif"));
    }

    #[test]
    fn test_dimension_error_names_the_limit() {
        let err = UploadError::DimensionsTooLarge {
            path: PathBuf::from("huge.png"),
            width: 20000,
            height: 20000,
            limit: 8192,
        };
        assert_eq!(err.title(), "Image too large");
        assert_eq!(
            err.description(),
            "Please upload an image no larger than 8192x8192 pixels"
        );
        assert!(err.to_string().contains("20000x20000"));
    }

    #[test]
    fn test_link_error_display() {
        let err = LinkError::MissingRequiredFields;
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_clipboard_error_display() {
        let err = ClipboardError::Unavailable("no display".to_string());
        assert_eq!(err.to_string(), "clipboard unavailable: no display");
    }
}
