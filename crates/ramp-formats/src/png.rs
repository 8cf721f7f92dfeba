use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use ramp_engine::paint::{sample, ColorStop, InterpolationMode};

use crate::error::CodecError;

/// Renders a horizontal strip: column `x` gets the color at
/// `t = x / (width - 1)` and every row is identical. A one-pixel-wide image
/// is sampled at `t = 0`.
pub fn render_image(
    stops: &[ColorStop],
    mode: InterpolationMode,
    width: u32,
    height: u32,
) -> Result<RgbImage, CodecError> {
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidSize { width, height });
    }

    let span = width.saturating_sub(1).max(1) as f64;
    let column: Vec<Rgb<u8>> = (0..width)
        .map(|x| Rgb(sample(stops, x as f64 / span, mode).to_array()))
        .collect();

    Ok(RgbImage::from_fn(width, height, |x, _| column[x as usize]))
}

/// [`render_image`] encoded as PNG bytes.
pub fn encode_png(
    stops: &[ColorStop],
    mode: InterpolationMode,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, CodecError> {
    let img = render_image(stops, mode, width, height)?;
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| CodecError::Image(e.to_string()))?;
    log::debug!("encoded {width}x{height} PNG ({} bytes)", buf.get_ref().len());
    Ok(buf.into_inner())
}
