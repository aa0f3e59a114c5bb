//! Single-page A4 PDF holding a captured card

use crate::error::ExportError;
use image::RgbaImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// A4 portrait in millimetres
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

const POINTS_PER_MM: f32 = 72.0 / 25.4;
const IMAGE_NAME: &str = "Card";

/// Where the image lands on the page, in millimetres from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Full page width, height kept in proportion, centered vertically
pub fn placement(image_width: u32, image_height: u32) -> Placement {
    let width = A4_WIDTH_MM;
    let height = image_height as f32 * width / image_width as f32;
    Placement {
        x: 0.0,
        y: (A4_HEIGHT_MM - height) / 2.0,
        width,
        height,
    }
}

/// Build the PDF document bytes for a capture
pub fn render_pdf(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let (image_width, image_height) = image.dimensions();
    let place = placement(image_width, image_height);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let rgb: Vec<u8> = image
        .pixels()
        .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect();
    let mut image_stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image_width as i64,
            "Height" => image_height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb,
    );
    image_stream.compress()?;
    let image_id = doc.add_object(image_stream);

    // PDF user space starts bottom-left; the placement is symmetric vertically
    let page_width = A4_WIDTH_MM * POINTS_PER_MM;
    let page_height = A4_HEIGHT_MM * POINTS_PER_MM;
    let draw_width = place.width * POINTS_PER_MM;
    let draw_height = place.height * POINTS_PER_MM;
    let draw_x = place.x * POINTS_PER_MM;
    let draw_y = page_height - (place.y * POINTS_PER_MM) - draw_height;

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Real(draw_width),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(draw_height),
                    Object::Real(draw_x),
                    Object::Real(draw_y),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! {
            IMAGE_NAME => image_id,
        },
    });

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width),
            Object::Real(page_height),
        ],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::PdfWrite(e.to_string()))?;
    Ok(bytes)
}
