//! Target dimensions for a scaled copy of an image.

/// The size of an image at some scale relative to its original size.
///
/// Both sides always share one scale factor, so the aspect ratio is kept.
/// Scaled sides are truncated toward zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    original_height: usize,
    original_width: usize,
    scale: f64,
}

impl Dimensions {
    /// Dimensions at scale 1.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            original_height: height,
            original_width: width,
            scale: 1.0,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Scale so the width becomes `width`.
    ///
    /// A zero original width leaves the scale unchanged.
    pub fn with_width(self, width: usize) -> Self {
        match self.original_width {
            0 => self,
            w => self.with_scale(width as f64 / w as f64),
        }
    }

    /// Scale so the height becomes `height`.
    ///
    /// A zero original height leaves the scale unchanged.
    pub fn with_height(self, height: usize) -> Self {
        match self.original_height {
            0 => self,
            h => self.with_scale(height as f64 / h as f64),
        }
    }

    /// Scale so neither side exceeds `max`. Never scales up.
    pub fn with_max(self, max: usize) -> Self {
        let max = max as f64;
        let mut scale = 1.0_f64;
        if self.original_width > 0 {
            scale = scale.min(max / self.original_width as f64);
        }
        if self.original_height > 0 {
            scale = scale.min(max / self.original_height as f64);
        }
        self.with_scale(scale)
    }

    pub fn height(&self) -> usize {
        scaled(self.original_height, self.scale)
    }

    pub fn width(&self) -> usize {
        scaled(self.original_width, self.scale)
    }

    /// The longer scaled side.
    pub fn max(&self) -> usize {
        self.height().max(self.width())
    }

    pub fn original_height(&self) -> usize {
        self.original_height
    }

    pub fn original_width(&self) -> usize {
        self.original_width
    }
}

#[inline]
fn scaled(side: usize, scale: f64) -> usize {
    // Float-to-int casts saturate; negative or NaN becomes 0.
    (side as f64 * scale).floor() as usize
}
