//! SVG rasterization and PNG encoding.

use std::sync::{Arc, OnceLock};

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{fontdb, Options, Tree};
use tracing::debug;

use crate::constants::dpi_to_pixels_per_meter;

use super::RenderError;

static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();

/// System fonts, loaded once per process.
fn fonts() -> Arc<fontdb::Database> {
    FONTS
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// Rasterizes an SVG document and encodes it as PNG tagged with `dpi`.
pub fn rasterize(svg: &str, dpi: u32) -> Result<Vec<u8>, RenderError> {
    let mut options = Options::default();
    options.fontdb = fonts();
    let tree = Tree::from_str(svg, &options).map_err(|e| RenderError::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        RenderError::Encode(format!(
            "cannot allocate a {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    encode_png(&pixmap, dpi)
}

/// Encodes straight (non-premultiplied) RGBA with a `pHYs` chunk.
fn encode_png(pixmap: &Pixmap, dpi: u32) -> Result<Vec<u8>, RenderError> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let ppm = dpi_to_pixels_per_meter(dpi);
    let mut buf = Vec::new();
    let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header().map_err(encode_error)?;
    writer.write_image_data(&rgba).map_err(encode_error)?;
    writer.finish().map_err(encode_error)?;

    Ok(buf)
}

fn encode_error(e: png::EncodingError) -> RenderError {
    RenderError::Encode(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterizes_minimal_document() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' width='4' height='3' viewBox='0 0 4 3'>\
                   <rect width='4' height='3' fill='red'/></svg>";
        let png = rasterize(svg, 300).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoder = png::Decoder::new(std::io::Cursor::new(png));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (4, 3));
        let dims = info.pixel_dims.unwrap();
        assert_eq!(dims.xppu, 11_811);
    }

    #[test]
    fn malformed_svg_is_reported() {
        assert!(matches!(rasterize("<svg", 300), Err(RenderError::Svg(_))));
    }
}
