//! Rasterize the card layout into a bitmap

use super::layout::card_svg;
use crate::error::ExportError;
use crate::state::CardDraft;
use image::{ImageBuffer, ImageFormat, RgbaImage};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::fontdb::{Database, Family, Query};
use resvg::usvg::{Options, Tree};
use std::io::Cursor;
use std::sync::{Arc, OnceLock};

/// System font database, loaded once per process
fn font_database() -> Arc<Database> {
    static FONTS: OnceLock<Arc<Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            // fontdb maps `sans-serif` to Arial, which many Linux systems lack
            let query = Query {
                families: &[Family::SansSerif],
                ..Default::default()
            };
            if db.query(&query).is_none() {
                let fallback = db
                    .faces()
                    .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
                if let Some(family) = fallback {
                    tracing::debug!(%family, "using fallback sans-serif family");
                    db.set_sans_serif_family(family);
                }
            }
            tracing::debug!(faces = db.len(), "font database loaded");
            Arc::new(db)
        })
        .clone()
}

/// Render the card for `draft` at `scale` onto a white background
pub fn capture(draft: &CardDraft, footer: &str, scale: f32) -> Result<RgbaImage, ExportError> {
    let svg = card_svg(draft, footer);

    let options = Options {
        fontdb: font_database(),
        ..Default::default()
    };
    let tree = Tree::from_str(&svg, &options)?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
    pixmap.fill(Color::WHITE);
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    // Fully opaque after the white fill, so premultiplied data equals straight RGBA
    ImageBuffer::from_raw(width, height, pixmap.take()).ok_or(ExportError::Surface { width, height })
}

/// Encode a capture as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::layout::{card_height, CARD_WIDTH};

    fn ready_draft() -> CardDraft {
        CardDraft {
            name: "Alice".to_string(),
            phone_number: "017xxxxxxx".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_capture_dimensions_follow_scale() {
        let image = capture(&ready_draft(), "footer", 2.0).unwrap();
        assert_eq!(image.width(), (CARD_WIDTH * 2.0) as u32);
        assert_eq!(image.height(), (card_height(0, true) * 2.0).ceil() as u32);
    }

    #[test]
    fn test_capture_background_is_white() {
        let image = capture(&ready_draft(), "", 1.0).unwrap();
        // Corners sit outside the rounded card border
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
        let (w, h) = image.dimensions();
        assert_eq!(image.get_pixel(w - 1, h - 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_capture_embeds_uploaded_image() {
        let red = image::RgbaImage::from_pixel(8, 8, image::Rgba([255, 0, 0, 255]));
        let mut png = Vec::new();
        red.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let mut draft = ready_draft();
        draft.profile_image = Some(crate::state::ImagePayload {
            bytes: png,
            encoding: crate::state::ImageEncoding::Png,
            file_name: "red.png".to_string(),
            width: 8,
            height: 8,
        });

        let image = capture(&draft, "", 1.0).unwrap();
        // Center of the profile box: left column center (24 + 96), top 144 + 64
        let pixel = image.get_pixel(120, 208).0;
        assert_eq!(pixel, [255, 0, 0, 255]);
    }

    #[test]
    fn test_encode_png_signature() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
