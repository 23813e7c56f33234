// Canvas building blocks: fill, resize, center, paste with alpha mask, flatten.
// Every asset is some combination of these steps.
use crate::error::Error;
use crate::types::{Offset, Size};

use image::imageops::{self, FilterType};
use image::{GenericImageView, ImageBuffer, Pixel, Rgb, RgbImage, Rgba, RgbaImage};

/// The resampling filter used for every resize (windowed sinc, anti-aliased).
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Allocate a fully opaque canvas filled with `color`.
pub fn canvas(size: Size, color: Rgb<u8>) -> RgbaImage {
    let [r, g, b] = color.0;
    RgbaImage::from_pixel(size.width, size.height, Rgba([r, g, b, 255]))
}

/// Resize to exactly `size`, ignoring the source aspect ratio.
pub fn resize_exact<I>(img: &I, size: Size) -> ImageBuffer<I::Pixel, Vec<<I::Pixel as Pixel>::Subpixel>>
where
    I: GenericImageView,
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: 'static,
{
    imageops::resize(img, size.width, size.height, FILTER)
}

/// Resize a transparent source to exactly `size` without letting the color
/// hidden under transparent pixels bleed into the edges.
pub fn resize_rgba(img: &RgbaImage, size: Size) -> RgbaImage {
    /* 1) Premultiply: color under alpha 0 becomes black, so it carries no weight.
       Visual: nothing yet, this buffer is never shown. */
    let mut premul = img.clone();
    for px in premul.pixels_mut() {
        let a = px[3] as u32;
        for c in 0..3 {
            px[c] = mul_div255(px[c] as u32, a) as u8;
        }
    }

    /* 2) Resample in premultiplied space. */
    let mut out = imageops::resize(&premul, size.width, size.height, FILTER);

    /* 3) Unpremultiply back to straight alpha (alpha 0 stays black).
       Visual: soft edges keep the glyph's own color instead of a dark/light halo. */
    for px in out.pixels_mut() {
        let a = px[3] as u32;
        if a == 0 || a == 255 { continue; }
        for c in 0..3 {
            let straight = (px[c] as u32 * 255 + a / 2) / a;
            px[c] = straight.min(255) as u8;
        }
    }
    out
}

/// `round(v * m / 255)` with the usual 8-bit shift trick.
#[inline]
fn mul_div255(v: u32, m: u32) -> u32 {
    let t = v * m + 128;
    (t + (t >> 8)) >> 8
}

/// Scale `source` to the given height, keeping its aspect ratio.
/// The width is truncated, never rounded up.
pub fn fit_height(source: Size, height: u32) -> Result<Size, Error> {
    if source.width == 0 || source.height == 0 {
        return Err(Error::Geometry(format!("source image is empty ({source})")));
    }
    let ratio = source.width as f64 / source.height as f64;
    let width = (height as f64 * ratio) as u32;
    if width == 0 {
        return Err(Error::Geometry(format!(
            "{source} scaled to height {height} leaves no width"
        )));
    }
    Ok(Size::new(width, height))
}

/// Offset that centers `item` inside `canvas` (floor division on each axis).
pub fn centered(canvas: Size, item: Size) -> Offset {
    Offset {
        x: (canvas.width as i64 - item.width as i64).div_euclid(2),
        y: (canvas.height as i64 - item.height as i64).div_euclid(2),
    }
}

/// Paste `src` onto `dst` at `at`, weighting each pixel by the source alpha.
/// Only the color channels blend; the canvas alpha is left untouched.
/// Source pixels falling outside the canvas are clipped.
pub fn paste_masked(dst: &mut RgbaImage, src: &RgbaImage, at: Offset) {
    let (dw, dh) = (dst.width() as i64, dst.height() as i64);

    for (sx, sy, px) in src.enumerate_pixels() {
        // Where this source pixel lands on the canvas; off-canvas pixels are dropped.
        let x = at.x + sx as i64;
        let y = at.y + sy as i64;
        if x < 0 || y < 0 || x >= dw || y >= dh { continue; }

        let a = px[3] as u32;
        if a == 0 { continue; }              // visual: background shows through

        let out = dst.get_pixel_mut(x as u32, y as u32);
        if a == 255 {                        // visual: solid glyph pixel
            out[0] = px[0];
            out[1] = px[1];
            out[2] = px[2];
            continue;
        }

        // Each side is rounded on its own before summing (matches PIL's paste).
        let inv = 255 - a;
        for c in 0..3 {
            let mixed = mul_div255(out[c] as u32, inv) + mul_div255(px[c] as u32, a);
            out[c] = mixed.min(255) as u8;
        }
    }
}

/// Drop the alpha channel. Canvases built by `canvas` are already opaque.
pub fn flatten(img: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| img.get_pixel(x, y).to_rgb())
}
