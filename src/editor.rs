//! An editing session over one current image.

use rgb::Rgb;

use crate::buffer::PixelBuffer;
use crate::error::BufferError;
use crate::limits::ResourceLimits;
use crate::orientation::Orientation;
use crate::quantize::{Posterizer, Rounding, dither_with};
use crate::rect::Rect;
use crate::shader::{self, PerPixel, Shader, apply};

/// One edit to the current image.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Edit {
    FlipVertical,
    FlipHorizontal,
    RotateDown,
    RotateRight,
    RotateLeft,
    Crop(Rect),
    /// Nearest-neighbor resize.
    Resize { height: usize, width: usize },
    ResizeBilinear { height: usize, width: usize },
    Orient(Orientation),
    Invert,
    Grayscale,
    Sepia,
    Contrast(f32),
    Brighten(i32),
    Gamma(f32),
    Fill(Rgb<u8>),
    Posterize(u32),
    Dither(u32),
}

impl Edit {
    /// `(height, width)` after applying this edit to a `height × width` image.
    pub fn output_dimensions(&self, height: usize, width: usize) -> (usize, usize) {
        match *self {
            Self::RotateRight | Self::RotateLeft => (width, height),
            Self::Crop(rect) => (rect.height, rect.width),
            Self::Resize { height, width } | Self::ResizeBilinear { height, width } => {
                (height, width)
            }
            Self::Orient(o) => o.display_dimensions(height, width),
            _ => (height, width),
        }
    }
}

/// Owns the image being edited and applies [`Edit`]s to it one at a time.
///
/// An edit either completes or leaves the current image exactly as it was.
#[derive(Clone, Debug)]
pub struct ImageEditor {
    image: PixelBuffer,
    limits: ResourceLimits,
    rounding: Rounding,
    edits_applied: usize,
}

impl ImageEditor {
    pub fn new(image: PixelBuffer) -> Self {
        Self {
            image,
            limits: ResourceLimits::none(),
            rounding: Rounding::default(),
            edits_applied: 0,
        }
    }

    /// Cap the size of images produced by later edits.
    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Rounding used by [`Edit::Posterize`] and [`Edit::Dither`].
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn current(&self) -> &PixelBuffer {
        &self.image
    }

    pub fn into_inner(self) -> PixelBuffer {
        self.image
    }

    /// Number of edits that have succeeded.
    pub fn edits_applied(&self) -> usize {
        self.edits_applied
    }

    /// Swap in a new current image, returning the old one.
    ///
    /// # Errors
    ///
    /// [`BufferError::Limit`] if `image` exceeds the configured limits; the
    /// current image is kept.
    pub fn open(&mut self, image: PixelBuffer) -> Result<PixelBuffer, BufferError> {
        self.limits.check_dimensions(image.height(), image.width())?;
        log::debug!(
            "opening {}x{} image, replacing {}x{}",
            image.height(),
            image.width(),
            self.image.height(),
            self.image.width()
        );
        self.edits_applied = 0;
        Ok(core::mem::replace(&mut self.image, image))
    }

    /// Apply `edit` to the current image.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation reports, or [`BufferError::Limit`]
    /// if the result would exceed the configured limits. The current image
    /// is untouched on error.
    pub fn apply(&mut self, edit: Edit) -> Result<(), BufferError> {
        match self.run(edit) {
            Ok(()) => {
                self.edits_applied += 1;
                log::debug!(
                    "applied {edit:?}, image is now {}x{}",
                    self.image.height(),
                    self.image.width()
                );
                Ok(())
            }
            Err(err) => {
                log::warn!("rejected {edit:?}: {err}");
                Err(err)
            }
        }
    }

    /// Run an arbitrary shader over the whole current image.
    pub fn shade(&mut self, shader: &dyn Shader) -> Result<(), BufferError> {
        apply(&mut self.image, shader)?;
        self.edits_applied += 1;
        log::debug!("applied custom shader");
        Ok(())
    }

    fn run(&mut self, edit: Edit) -> Result<(), BufferError> {
        let (height, width) = edit.output_dimensions(self.image.height(), self.image.width());
        self.limits.check_dimensions(height, width)?;

        let image = &mut self.image;
        match edit {
            Edit::FlipVertical => image.flip_vertical(),
            Edit::FlipHorizontal => image.flip_horizontal(),
            Edit::RotateDown => image.rotate_down(),
            Edit::RotateRight => image.rotate_right(),
            Edit::RotateLeft => image.rotate_left(),
            Edit::Crop(rect) => image.crop(rect)?,
            Edit::Resize { height, width } => image.resize(height, width)?,
            Edit::ResizeBilinear { height, width } => image.resize_bilinear(height, width)?,
            Edit::Orient(o) => image.apply_orientation(o),
            Edit::Invert => apply(image, &PerPixel(shader::invert))?,
            Edit::Grayscale => apply(image, &PerPixel(shader::grayscale))?,
            Edit::Sepia => apply(image, &PerPixel(shader::sepia))?,
            Edit::Contrast(scale) => apply(image, &shader::contrast(scale))?,
            Edit::Brighten(amount) => apply(image, &shader::brightness(amount))?,
            Edit::Gamma(gamma) => apply(image, &shader::gamma(gamma))?,
            Edit::Fill(rgb) => apply(image, &shader::solid(rgb))?,
            Edit::Posterize(depth) => {
                let posterizer = Posterizer::new(depth)?.with_rounding(self.rounding);
                apply(image, &posterizer)?;
            }
            Edit::Dither(depth) => {
                let posterizer = Posterizer::new(depth)?.with_rounding(self.rounding);
                dither_with(image, &posterizer)?;
            }
        }
        Ok(())
    }
}
