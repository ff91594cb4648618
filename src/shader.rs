//! Per-pixel shaders and the driver that runs them over a grid.
//!
//! A [`Shader`] maps `(pixel, row, col)` to a new pixel. Closures of that
//! shape are shaders directly; functions of one pixel become shaders through
//! [`PerPixel`]. Every library shader preserves alpha.

use rgb::Rgb;

use crate::buffer::Pixels;
use crate::error::BufferError;
use crate::pixel::{ColorVector, Pixel};

/// A function from a pixel and its coordinate to a new pixel.
pub trait Shader {
    fn shade(&self, pixel: Pixel, row: usize, col: usize) -> Pixel;
}

impl<F> Shader for F
where
    F: Fn(Pixel, usize, usize) -> Pixel,
{
    #[inline]
    fn shade(&self, pixel: Pixel, row: usize, col: usize) -> Pixel {
        self(pixel, row, col)
    }
}

/// Adapts a coordinate-unaware `Fn(Pixel) -> Pixel` into a [`Shader`].
#[derive(Clone, Copy, Debug)]
pub struct PerPixel<F>(pub F);

impl<F> Shader for PerPixel<F>
where
    F: Fn(Pixel) -> Pixel,
{
    #[inline]
    fn shade(&self, pixel: Pixel, _row: usize, _col: usize) -> Pixel {
        (self.0)(pixel)
    }
}

/// Run `shader` over every pixel of `pixels` in row-major order.
///
/// Each result is written back before the next pixel is read, so a shader
/// that reads neighbors through a shared handle sees already-shaded values
/// above and to the left.
pub fn apply<P, S>(pixels: &mut P, shader: &S) -> Result<(), BufferError>
where
    P: Pixels + ?Sized,
    S: Shader + ?Sized,
{
    let (height, width) = (pixels.height(), pixels.width());
    log::trace!("shading {height}x{width} pixels");
    for row in 0..height {
        for col in 0..width {
            let pixel = pixels.get(row, col)?;
            pixels.set(row, col, shader.shade(pixel, row, col))?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

/// Each color channel becomes `255 - channel`.
pub fn invert(pixel: Pixel) -> Pixel {
    Pixel(pixel.0 ^ 0x00FF_FFFF)
}

/// Each color channel becomes the integer mean of the three.
pub fn grayscale(pixel: Pixel) -> Pixel {
    let gray = ((pixel.r() as u32 + pixel.g() as u32 + pixel.b() as u32) / 3) as u8;
    Pixel::from_argb(pixel.a(), gray, gray, gray)
}

/// Classic sepia tone matrix, saturating at 255.
pub fn sepia(pixel: Pixel) -> Pixel {
    let (r, g, b) = (pixel.r() as f32, pixel.g() as f32, pixel.b() as f32);
    ColorVector::new(
        0.393 * r + 0.769 * g + 0.189 * b,
        0.349 * r + 0.686 * g + 0.168 * b,
        0.272 * r + 0.534 * g + 0.131 * b,
    )
    .to_pixel_with_alpha(pixel.a())
}

/// Scale each channel's distance from mid-gray by `scale`.
///
/// Results are clamped to `[0, 255]` and truncated.
pub fn adjust_contrast(pixel: Pixel, scale: f32) -> Pixel {
    let v = ((ColorVector::from(pixel).map(|c| c / 255.0) - 0.5) * scale + 0.5) * 255.0;
    v.to_pixel_with_alpha(pixel.a())
}

/// Add `amount` to each color channel, clamping to `[0, 255]`.
pub fn brighten(pixel: Pixel, amount: i32) -> Pixel {
    let mut out = pixel;
    out.set_r(pixel.r() as i32 + amount);
    out.set_g(pixel.g() as i32 + amount);
    out.set_b(pixel.b() as i32 + amount);
    out
}

/// `channel' = 255 * (channel / 255)^(1 / gamma)`, rounded to nearest.
///
/// `gamma > 1` brightens midtones, `gamma < 1` darkens them.
pub fn correct_gamma(pixel: Pixel, gamma: f32) -> Pixel {
    let exponent = 1.0 / gamma;
    ColorVector::from(pixel)
        .map(|c| (c / 255.0).powf(exponent) * 255.0)
        .round()
        .to_pixel_with_alpha(pixel.a())
}

/// Replace the color channels with `rgb`.
pub fn fill(pixel: Pixel, rgb: Rgb<u8>) -> Pixel {
    pixel.with_rgb(rgb)
}

/// Contrast shader; see [`adjust_contrast`].
pub fn contrast(scale: f32) -> PerPixel<impl Fn(Pixel) -> Pixel + Copy> {
    PerPixel(move |p| adjust_contrast(p, scale))
}

/// Brightness shader; see [`brighten`].
pub fn brightness(amount: i32) -> PerPixel<impl Fn(Pixel) -> Pixel + Copy> {
    PerPixel(move |p| brighten(p, amount))
}

/// Gamma shader; see [`correct_gamma`].
pub fn gamma(gamma: f32) -> PerPixel<impl Fn(Pixel) -> Pixel + Copy> {
    PerPixel(move |p| correct_gamma(p, gamma))
}

/// Solid-fill shader; see [`fill`].
pub fn solid(rgb: Rgb<u8>) -> PerPixel<impl Fn(Pixel) -> Pixel + Copy> {
    PerPixel(move |p| fill(p, rgb))
}
