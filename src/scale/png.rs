use std::io::Cursor;

use anyhow::Context as _;

use crate::{
    foundation::error::{FathomError, FathomResult},
    scale::color::Rgb,
};

/// Edge length of one legend swatch in pixels.
pub const SWATCH_PX: u32 = 25;

/// Encode a horizontal strip of square swatches, one per color, as PNG.
pub fn render_colorbar_png<S: AsRef<str>>(colors: &[S]) -> FathomResult<Vec<u8>> {
    if colors.is_empty() {
        return Err(FathomError::validation("colorbar needs at least one color"));
    }
    let swatches = colors
        .iter()
        .map(|c| Rgb::parse_hex(c.as_ref()))
        .collect::<FathomResult<Vec<_>>>()?;

    let width = SWATCH_PX * swatches.len() as u32;
    let img = image::RgbaImage::from_fn(width, SWATCH_PX, |x, _| {
        image::Rgba(swatches[(x / SWATCH_PX) as usize].to_rgba8())
    });

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode colorbar png")?;
    Ok(buf)
}
