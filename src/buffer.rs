//! Pixel grids: the [`Pixels`] access trait, the owning [`PixelBuffer`], and
//! the borrowing [`Selection`] view.
//!
//! Every access is bounds-checked and reports [`BufferError::OutOfBounds`]
//! in all build profiles.

use core::fmt;

use imgref::{Img, ImgRef, ImgRefMut, ImgVec};

use crate::error::{BufferError, check_len};
use crate::pixel::Pixel;
use crate::rect::Rect;

// ---------------------------------------------------------------------------
// Pixels
// ---------------------------------------------------------------------------

/// Read/write access to a rectangular grid of packed pixels.
///
/// Implemented by [`PixelBuffer`] and [`Selection`], so operations written
/// against this trait work on whole images and on sub-rectangles alike.
pub trait Pixels {
    /// Number of rows.
    fn height(&self) -> usize;

    /// Number of columns.
    fn width(&self) -> usize;

    /// Pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if the coordinate is outside
    /// `[0, height) × [0, width)`.
    fn get(&self, row: usize, col: usize) -> Result<Pixel, BufferError>;

    /// Overwrite the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if the coordinate is outside
    /// `[0, height) × [0, width)`. Nothing is written in that case.
    fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<(), BufferError>;

    /// Verify that `(row, col)` is addressable.
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BufferError> {
        let (height, width) = (self.height(), self.width());
        if row >= height || col >= width {
            return Err(BufferError::OutOfBounds {
                row,
                col,
                height,
                width,
            });
        }
        Ok(())
    }

    /// Verify that `rect` lies entirely inside this grid.
    fn check_rect(&self, rect: Rect) -> Result<(), BufferError> {
        let (height, width) = (self.height(), self.width());
        if !rect.fits_within(height, width) {
            return Err(BufferError::OutOfBounds {
                row: rect.row.saturating_add(rect.height),
                col: rect.col.saturating_add(rect.width),
                height,
                width,
            });
        }
        Ok(())
    }

    /// Borrow `rect` as a [`Selection`].
    fn select(&mut self, rect: Rect) -> Result<Selection<'_, Self>, BufferError>
    where
        Self: Sized,
    {
        Selection::new(self, rect)
    }
}

// ---------------------------------------------------------------------------
// PixelBuffer (owned)
// ---------------------------------------------------------------------------

/// Owned, row-major pixel grid with `data.len() == height * width`.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<Pixel>,
    height: usize,
    width: usize,
}

impl PixelBuffer {
    /// Allocate a zero-filled (transparent black) buffer.
    ///
    /// # Panics
    ///
    /// Panics if `height * width` overflows `usize`.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, Pixel::TRANSPARENT)
    }

    /// Allocate a buffer with every pixel set to `pixel`.
    ///
    /// # Panics
    ///
    /// Panics if `height * width` overflows `usize`.
    pub fn filled(height: usize, width: usize, pixel: Pixel) -> Self {
        let len = height
            .checked_mul(width)
            .unwrap_or_else(|| panic!("buffer size {height}x{width} overflows usize"));
        Self {
            data: vec![pixel; len],
            height,
            width,
        }
    }

    /// Wrap a row-major pixel vector.
    ///
    /// # Errors
    ///
    /// [`BufferError::DimensionMismatch`] if `data.len() != height * width`.
    pub fn from_vec(height: usize, width: usize, data: Vec<Pixel>) -> Result<Self, BufferError> {
        check_len(height, width, data.len())?;
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Wrap a row-major vector of packed `0xAARRGGBB` values.
    ///
    /// # Errors
    ///
    /// [`BufferError::DimensionMismatch`] if `argb.len() != height * width`.
    pub fn from_argb(height: usize, width: usize, argb: Vec<u32>) -> Result<Self, BufferError> {
        check_len(height, width, argb.len())?;
        Ok(Self {
            data: argb.into_iter().map(Pixel).collect(),
            height,
            width,
        })
    }

    /// Adopt an `imgref` image, compacting away any row padding.
    pub fn from_img(img: ImgVec<Pixel>) -> Self {
        let (buf, width, height) = img.as_ref().to_contiguous_buf();
        Self {
            data: buf.into_owned(),
            height,
            width,
        }
    }

    /// Consume the buffer and return the backing vector for reuse.
    pub fn into_vec(self) -> Vec<Pixel> {
        self.data
    }

    /// The packed `0xAARRGGBB` values in row-major order.
    pub fn to_argb(&self) -> Vec<u32> {
        self.data.iter().map(|p| p.argb()).collect()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total pixel count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All pixels, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// All pixels, row-major, mutable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Pixels of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        assert!(
            row < self.height,
            "row index {row} out of bounds (height: {})",
            self.height
        );
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Mutable pixels of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row_mut(&mut self, row: usize) -> &mut [Pixel] {
        assert!(
            row < self.height,
            "row index {row} out of bounds (height: {})",
            self.height
        );
        let start = row * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // `max(1)` keeps `chunks_exact` valid for zero-width buffers, which
        // have no data and therefore yield no rows.
        self.data.chunks_exact(self.width.max(1))
    }

    /// Borrow as an `imgref` image.
    pub fn as_img(&self) -> ImgRef<'_, Pixel> {
        Img::new(self.data.as_slice(), self.width, self.height)
    }

    /// Borrow as a mutable `imgref` image.
    pub fn as_img_mut(&mut self) -> ImgRefMut<'_, Pixel> {
        Img::new(self.data.as_mut_slice(), self.width, self.height)
    }

    /// Swap in new storage and dimensions, returning the previous storage.
    pub(crate) fn replace(&mut self, height: usize, width: usize, data: Vec<Pixel>) -> Vec<Pixel> {
        debug_assert_eq!(data.len(), height * width);
        log::debug!(
            "replacing {}x{} buffer with {height}x{width}",
            self.height,
            self.width
        );
        self.height = height;
        self.width = width;
        core::mem::replace(&mut self.data, data)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl Pixels for PixelBuffer {
    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<Pixel, BufferError> {
        self.check_bounds(row, col)?;
        Ok(self.data[self.index(row, col)])
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<(), BufferError> {
        self.check_bounds(row, col)?;
        let i = self.index(row, col);
        self.data[i] = pixel;
        Ok(())
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelBuffer({}x{})", self.height, self.width)
    }
}

// ---------------------------------------------------------------------------
// Selection (borrowed)
// ---------------------------------------------------------------------------

/// A rectangular read/write window onto a parent grid.
///
/// `(row, col)` in the selection addresses `(row + rect.row, col + rect.col)`
/// in the parent. No pixels are copied; writes land in the parent. A
/// selection can itself be the parent of a nested selection.
pub struct Selection<'a, P: Pixels + ?Sized> {
    parent: &'a mut P,
    rect: Rect,
}

impl<'a, P: Pixels + ?Sized> Selection<'a, P> {
    /// Select `rect` from `parent`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `rect` does not fit inside `parent`.
    pub fn new(parent: &'a mut P, rect: Rect) -> Result<Self, BufferError> {
        parent.check_rect(rect)?;
        Ok(Self { parent, rect })
    }

    /// The selected rectangle, in parent coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl<P: Pixels + ?Sized> Pixels for Selection<'_, P> {
    #[inline]
    fn height(&self) -> usize {
        self.rect.height
    }

    #[inline]
    fn width(&self) -> usize {
        self.rect.width
    }

    fn get(&self, row: usize, col: usize) -> Result<Pixel, BufferError> {
        self.check_bounds(row, col)?;
        self.parent.get(row + self.rect.row, col + self.rect.col)
    }

    fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<(), BufferError> {
        self.check_bounds(row, col)?;
        self.parent
            .set(row + self.rect.row, col + self.rect.col, pixel)
    }
}

impl<P: Pixels + ?Sized> fmt::Debug for Selection<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Selection({}x{} at {},{})",
            self.rect.height, self.rect.width, self.rect.row, self.rect.col
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
