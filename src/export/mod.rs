//! Card capture and artifact export (PNG and A4 PDF)

mod capture;
pub mod layout;
mod pdf;

pub use capture::{capture, encode_png};
pub use pdf::render_pdf;

use crate::error::ExportError;
use crate::state::CardDraft;
use std::fs;
use std::path::{Path, PathBuf};

const ARTIFACT_PREFIX: &str = "eid-salami-card";

/// Kind of file an export produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Png,
    Pdf,
}

impl ArtifactKind {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }

    /// Success notification body
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Png => "Your Eid Salami Card has been downloaded as an image",
            Self::Pdf => "Your Eid Salami Card has been downloaded as a PDF",
        }
    }
}

/// Name fragment for artifact files: whitespace runs become a single `-`.
/// Path separators are replaced too so the file stays in the output directory,
/// and control characters are dropped.
pub fn slugify_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_gap = false;
    for c in name.chars() {
        if c.is_whitespace() || c == '/' || c == '\\' {
            if !in_gap {
                slug.push('-');
                in_gap = true;
            }
        } else if c.is_control() {
            continue;
        } else {
            slug.push(c);
            in_gap = false;
        }
    }
    slug
}

/// `eid-salami-card-<slug>.<ext>`
pub fn artifact_file_name(name: &str, kind: ArtifactKind) -> String {
    format!(
        "{ARTIFACT_PREFIX}-{}.{}",
        slugify_name(name),
        kind.extension()
    )
}

/// Captures cards and writes them into an output directory
#[derive(Debug, Clone)]
pub struct CardExporter {
    output_dir: PathBuf,
    scale: f32,
    footer: String,
}

impl CardExporter {
    pub fn new(output_dir: impl Into<PathBuf>, scale: f32, footer: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            scale,
            footer: footer.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Write `draft` as an artifact of `kind` and return the file path
    pub fn export(&self, draft: &CardDraft, kind: ArtifactKind) -> Result<PathBuf, ExportError> {
        if !draft.has_required_fields() {
            return Err(ExportError::MissingRequiredFields);
        }

        let image = capture(draft, &self.footer, self.scale)?;
        let bytes = match kind {
            ArtifactKind::Png => encode_png(&image)?,
            ArtifactKind::Pdf => render_pdf(&image)?,
        };

        let path = self.output_dir.join(artifact_file_name(&draft.name, kind));
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::Write {
            path: self.output_dir.clone(),
            source,
        })?;
        fs::write(&path, &bytes).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            bytes = bytes.len(),
            kind = kind.extension(),
            "card exported"
        );
        Ok(path)
    }

    /// Run [`CardExporter::export`] on the blocking pool and wait for it
    pub async fn export_async(
        &self,
        draft: CardDraft,
        kind: ArtifactKind,
    ) -> Result<PathBuf, ExportError> {
        let exporter = self.clone();
        tokio::task::spawn_blocking(move || exporter.export(&draft, kind)).await?
    }
}
