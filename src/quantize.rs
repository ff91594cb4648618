//! Posterization and Floyd–Steinberg error-diffusion dithering.

use crate::buffer::Pixels;
use crate::error::BufferError;
use crate::pixel::{ColorVector, Pixel};
use crate::shader::Shader;

/// Largest supported depth: 256 levels per channel is the identity.
pub const MAX_DEPTH: u32 = 256;

/// How posterization turns scaled channel values back into integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round to nearest, ties to even.
    #[default]
    Round,
    /// Round toward negative infinity.
    Floor,
}

impl Rounding {
    #[inline]
    fn apply(self, v: ColorVector) -> ColorVector {
        match self {
            Self::Round => v.round_ties_even(),
            Self::Floor => v.floor(),
        }
    }
}

/// Reduces each color channel to `depth` evenly spaced levels.
///
/// Level `k` maps to `k * 256 / depth`, so depth 2 yields `{0, 128}` and
/// depth 256 is the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Posterizer {
    depth: u32,
    rounding: Rounding,
}

impl Posterizer {
    /// # Errors
    ///
    /// [`BufferError::InvalidDepth`] unless `1 <= depth <= 256`.
    pub fn new(depth: u32) -> Result<Self, BufferError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(BufferError::InvalidDepth { depth });
        }
        Ok(Self {
            depth,
            rounding: Rounding::default(),
        })
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Distance between adjacent output levels.
    pub fn step(&self) -> f32 {
        256.0 / self.depth as f32
    }

    /// Quantize a color vector. The result is integral and in `[0, 255]`.
    pub fn posterize_color(&self, color: ColorVector) -> ColorVector {
        let depth = self.depth as f32;
        let levels = self
            .rounding
            .apply(color * (depth / 256.0))
            .clamp(0.0, depth - 1.0);
        self.rounding
            .apply(levels * (256.0 / depth))
            .clamp(0.0, 255.0)
    }

    /// Quantize a pixel's color channels, keeping alpha.
    pub fn posterize(&self, pixel: Pixel) -> Pixel {
        self.posterize_color(pixel.into())
            .to_pixel_with_alpha(pixel.a())
    }
}

impl Shader for Posterizer {
    #[inline]
    fn shade(&self, pixel: Pixel, _row: usize, _col: usize) -> Pixel {
        self.posterize(pixel)
    }
}

// ---------------------------------------------------------------------------
// Dithering
// ---------------------------------------------------------------------------

/// Floyd–Steinberg dither `pixels` down to `depth` levels per channel.
///
/// # Errors
///
/// [`BufferError::InvalidDepth`] unless `1 <= depth <= 256`; checked before
/// any pixel is touched.
pub fn dither<P: Pixels + ?Sized>(pixels: &mut P, depth: u32) -> Result<(), BufferError> {
    dither_with(pixels, &Posterizer::new(depth)?)
}

/// Floyd–Steinberg dither using a configured [`Posterizer`].
///
/// Pixels are visited in row-major order. Each pixel's accumulated error is
/// added before quantizing; the difference between the pixel's original
/// color and its quantized color is pushed to the unvisited neighbors with
/// weights 7/16 (right), 3/16 (below left), 5/16 (below), and 1/16 (below
/// right). Shares that would land outside the grid are dropped. Alpha is
/// left unchanged.
pub fn dither_with<P: Pixels + ?Sized>(
    pixels: &mut P,
    posterizer: &Posterizer,
) -> Result<(), BufferError> {
    let (height, width) = (pixels.height(), pixels.width());
    log::trace!(
        "dithering {height}x{width} pixels at depth {}",
        posterizer.depth()
    );
    let mut errors = ErrorGrid::new(height, width);
    for row in 0..height {
        for col in 0..width {
            let pixel = pixels.get(row, col)?;
            let original = ColorVector::from(pixel);
            let quantized = posterizer.posterize_color(original + errors.get(row, col));
            pixels.set(row, col, quantized.to_pixel_with_alpha(pixel.a()))?;
            errors.spread(row, col, original - quantized);
        }
    }
    Ok(())
}

/// Per-pixel error accumulators for one dithering pass.
struct ErrorGrid {
    cells: Vec<ColorVector>,
    height: usize,
    width: usize,
}

impl ErrorGrid {
    fn new(height: usize, width: usize) -> Self {
        Self {
            cells: vec![ColorVector::ZERO; height * width],
            height,
            width,
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> ColorVector {
        self.cells[row * self.width + col]
    }

    #[inline]
    fn add(&mut self, row: usize, col: usize, v: ColorVector) {
        self.cells[row * self.width + col] += v;
    }

    fn spread(&mut self, row: usize, col: usize, diff: ColorVector) {
        let last_col = col + 1 >= self.width;
        let last_row = row + 1 >= self.height;
        if !last_col {
            self.add(row, col + 1, diff * (7.0 / 16.0));
        }
        if !last_row {
            if col > 0 {
                self.add(row + 1, col - 1, diff * (3.0 / 16.0));
            }
            self.add(row + 1, col, diff * (5.0 / 16.0));
            if !last_col {
                self.add(row + 1, col + 1, diff * (1.0 / 16.0));
            }
        }
    }

    #[cfg(test)]
    fn total(&self) -> ColorVector {
        self.cells
            .iter()
            .fold(ColorVector::ZERO, |acc, &v| acc + v)
    }
}
