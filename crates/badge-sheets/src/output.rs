//! Writing pages to disk: one PNG per page and a combined PDF

use crate::constants::{INCHES_PER_METER, px_to_pt};
use crate::types::*;
use image::RgbImage;
use lopdf::{Dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Save every page as `<number>.png` inside `dir`, creating it if needed.
///
/// Each file records the page's resolution, so it prints at its physical
/// size. Returns the written paths in page order.
pub async fn save_pages(pages: &[Page], dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref().to_owned();
    tokio::fs::create_dir_all(&dir).await?;

    let images: Vec<(usize, u32, Arc<RgbImage>)> = pages
        .iter()
        .map(|p| (p.number, p.dpi, Arc::clone(&p.image)))
        .collect();
    let encoded = tokio::task::spawn_blocking(move || {
        images
            .iter()
            .map(|(number, dpi, image)| encode_png(image, *dpi).map(|bytes| (*number, bytes)))
            .collect::<Result<Vec<_>>>()
    })
    .await??;

    let mut saved = Vec::with_capacity(encoded.len());
    for (number, bytes) in encoded {
        let path = dir.join(format!("{}.png", number));
        tokio::fs::write(&path, bytes).await?;
        log::info!("Page {} saved: {}", number, path.display());
        saved.push(path);
    }

    Ok(saved)
}

/// Save all pages, in order, as a single PDF.
///
/// Each PDF page takes the physical size of its raster at the page's dpi.
pub async fn save_pdf(pages: &[Page], path: impl AsRef<Path>) -> Result<()> {
    if pages.is_empty() {
        return Err(BadgeError::NoPages);
    }
    if let Some(page) = pages.iter().find(|p| p.dpi == 0) {
        return Err(BadgeError::Config(format!(
            "Page {} has no resolution (dpi is zero)",
            page.number
        )));
    }

    let path = path.as_ref().to_owned();
    let images: Vec<(u32, Arc<RgbImage>)> =
        pages.iter().map(|p| (p.dpi, Arc::clone(&p.image))).collect();

    let bytes = tokio::task::spawn_blocking(move || {
        let mut doc = build_pdf(&images)?;
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, BadgeError>(writer)
    })
    .await??;

    tokio::fs::write(&path, bytes).await?;
    log::info!("PDF written with {} pages: {}", pages.len(), path.display());
    Ok(())
}

/// Pixels per meter for a resolution in dots per inch
fn pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 * INCHES_PER_METER).round() as u32
}

fn encode_png(image: &RgbImage, dpi: u32) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        if dpi > 0 {
            let ppm = pixels_per_meter(dpi);
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
        writer.finish()?;
    }
    Ok(bytes)
}

/// Build a document with one full-bleed image page per raster
fn build_pdf(images: &[(u32, Arc<RgbImage>)]) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::with_capacity(images.len());
    for (dpi, image) in images {
        let page_id = add_image_page(&mut doc, image, *dpi, pages_id);
        kids.push(Object::Reference(page_id));
    }

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(kids.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    doc.compress();
    Ok(doc)
}

fn add_image_page(
    doc: &mut Document,
    image: &RgbImage,
    dpi: u32,
    parent_pages_id: lopdf::ObjectId,
) -> lopdf::ObjectId {
    let (width_px, height_px) = image.dimensions();
    let width_pt = px_to_pt(width_px, dpi);
    let height_pt = px_to_pt(height_px, dpi);

    let mut image_dict = Dictionary::new();
    image_dict.set("Type", Object::Name(b"XObject".to_vec()));
    image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
    image_dict.set("Width", Object::Integer(width_px as i64));
    image_dict.set("Height", Object::Integer(height_px as i64));
    image_dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    image_dict.set("BitsPerComponent", Object::Integer(8));
    let image_id = doc.add_object(Stream::new(image_dict, image.as_raw().clone()));

    // Scale the unit image square up to the full page
    let content = format!("q {} 0 0 {} 0 0 cm /Im0 Do Q\n", width_pt, height_pt);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ]),
    );
    page_dict.set("Resources", Object::Dictionary(resources));
    page_dict.set("Contents", Object::Reference(content_id));

    doc.add_object(page_dict)
}
