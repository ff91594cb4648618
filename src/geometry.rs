//! Flips, rotations, crops, and resizes.
//!
//! Every operation replaces the buffer's storage and dimensions. Allocating
//! variants build a fresh destination; the `_into` variants take a
//! caller-supplied destination of exactly the result size and hand back the
//! previous storage so it can be reused for the next edit.

use crate::buffer::{PixelBuffer, Pixels};
use crate::error::{BufferError, check_len};
use crate::pixel::{ColorVector, Pixel};
use crate::rect::Rect;

impl PixelBuffer {
    /// Mirror top to bottom. An odd middle row stays where it is.
    pub fn flip_vertical(&mut self) {
        let (height, width) = (self.height(), self.width());
        let data = self.as_mut_slice();
        for r in 0..height / 2 {
            let (upper, lower) = data.split_at_mut((height - 1 - r) * width);
            upper[r * width..(r + 1) * width].swap_with_slice(&mut lower[..width]);
        }
    }

    /// Mirror left to right.
    pub fn flip_horizontal(&mut self) {
        let width = self.width().max(1);
        for row in self.as_mut_slice().chunks_exact_mut(width) {
            row.reverse();
        }
    }

    /// Rotate 180°. Dimensions are unchanged.
    pub fn rotate_down(&mut self) {
        self.flip_vertical();
        self.flip_horizontal();
    }

    /// Rotate 90° clockwise.
    pub fn rotate_right(&mut self) {
        let dst = vec![Pixel::TRANSPARENT; self.len()];
        self.rotate_right_unchecked(dst);
    }

    /// Rotate 90° clockwise into `dst`, returning the previous storage.
    ///
    /// # Errors
    ///
    /// [`BufferError::DimensionMismatch`] if `dst` does not hold exactly
    /// `height * width` pixels.
    pub fn rotate_right_into(&mut self, dst: Vec<Pixel>) -> Result<Vec<Pixel>, BufferError> {
        check_len(self.width(), self.height(), dst.len())?;
        Ok(self.rotate_right_unchecked(dst))
    }

    fn rotate_right_unchecked(&mut self, mut dst: Vec<Pixel>) -> Vec<Pixel> {
        let (old_h, old_w) = (self.height(), self.width());
        let src = self.as_slice();
        // dst is old_w rows of old_h pixels; dst(row, col) = src(old_h - 1 - col, row).
        for (row, dst_row) in dst.chunks_exact_mut(old_h.max(1)).enumerate() {
            for (col, px) in dst_row.iter_mut().enumerate() {
                *px = src[(old_h - 1 - col) * old_w + row];
            }
        }
        self.replace(old_w, old_h, dst)
    }

    /// Rotate 90° counter-clockwise.
    pub fn rotate_left(&mut self) {
        let dst = vec![Pixel::TRANSPARENT; self.len()];
        self.rotate_left_unchecked(dst);
    }

    /// Rotate 90° counter-clockwise into `dst`, returning the previous storage.
    ///
    /// # Errors
    ///
    /// [`BufferError::DimensionMismatch`] if `dst` does not hold exactly
    /// `height * width` pixels.
    pub fn rotate_left_into(&mut self, dst: Vec<Pixel>) -> Result<Vec<Pixel>, BufferError> {
        check_len(self.width(), self.height(), dst.len())?;
        Ok(self.rotate_left_unchecked(dst))
    }

    fn rotate_left_unchecked(&mut self, mut dst: Vec<Pixel>) -> Vec<Pixel> {
        let (old_h, old_w) = (self.height(), self.width());
        let src = self.as_slice();
        // dst(row, col) = src(col, old_w - 1 - row).
        for (row, dst_row) in dst.chunks_exact_mut(old_h.max(1)).enumerate() {
            for (col, px) in dst_row.iter_mut().enumerate() {
                *px = src[col * old_w + (old_w - 1 - row)];
            }
        }
        self.replace(old_w, old_h, dst)
    }

    /// Keep only the pixels inside `rect`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `rect` extends past the buffer.
    pub fn crop(&mut self, rect: Rect) -> Result<(), BufferError> {
        self.check_rect(rect)?;
        let dst = vec![Pixel::TRANSPARENT; rect.height * rect.width];
        self.crop_unchecked(rect, dst);
        Ok(())
    }

    /// Crop into `dst`, returning the previous storage.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `rect` extends past the buffer,
    /// [`BufferError::DimensionMismatch`] if `dst` does not hold exactly
    /// `rect.height * rect.width` pixels.
    pub fn crop_into(&mut self, rect: Rect, dst: Vec<Pixel>) -> Result<Vec<Pixel>, BufferError> {
        self.check_rect(rect)?;
        check_len(rect.height, rect.width, dst.len())?;
        Ok(self.crop_unchecked(rect, dst))
    }

    fn crop_unchecked(&mut self, rect: Rect, mut dst: Vec<Pixel>) -> Vec<Pixel> {
        if !rect.is_empty() {
            let width = self.width();
            let src = self.as_slice();
            for (r, dst_row) in dst.chunks_exact_mut(rect.width).enumerate() {
                let start = (rect.row + r) * width + rect.col;
                dst_row.copy_from_slice(&src[start..start + rect.width]);
            }
        }
        self.replace(rect.height, rect.width, dst)
    }

    /// Nearest-neighbor resize to `height × width`.
    ///
    /// Destination `(row, col)` samples source
    /// `(floor(row * old_h / height), floor(col * old_w / width))`.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidDimension`] if either target dimension is zero or
    /// the source is empty.
    pub fn resize(&mut self, height: usize, width: usize) -> Result<(), BufferError> {
        self.check_resize(height, width)?;
        let dst = vec![Pixel::TRANSPARENT; height * width];
        self.resize_unchecked(height, width, dst);
        Ok(())
    }

    /// Nearest-neighbor resize into `dst`, returning the previous storage.
    ///
    /// # Errors
    ///
    /// As [`resize`](Self::resize), plus [`BufferError::DimensionMismatch`] if
    /// `dst` does not hold exactly `height * width` pixels.
    pub fn resize_into(
        &mut self,
        height: usize,
        width: usize,
        dst: Vec<Pixel>,
    ) -> Result<Vec<Pixel>, BufferError> {
        self.check_resize(height, width)?;
        check_len(height, width, dst.len())?;
        Ok(self.resize_unchecked(height, width, dst))
    }

    fn check_resize(&self, height: usize, width: usize) -> Result<(), BufferError> {
        if height == 0 || width == 0 {
            return Err(BufferError::InvalidDimension { height, width });
        }
        if self.is_empty() {
            return Err(BufferError::InvalidDimension {
                height: self.height(),
                width: self.width(),
            });
        }
        Ok(())
    }

    fn resize_unchecked(&mut self, height: usize, width: usize, mut dst: Vec<Pixel>) -> Vec<Pixel> {
        let (old_h, old_w) = (self.height(), self.width());
        let src = self.as_slice();
        // Integer form of floor(row / height * old_h); exact where the float
        // form can land a hair below an integer.
        let cols: Vec<usize> = (0..width).map(|c| c * old_w / width).collect();
        for (row, dst_row) in dst.chunks_exact_mut(width).enumerate() {
            let src_row = &src[(row * old_h / height) * old_w..][..old_w];
            for (px, &c) in dst_row.iter_mut().zip(&cols) {
                *px = src_row[c];
            }
        }
        self.replace(height, width, dst)
    }

    /// Bilinear resize to `height × width`. Output pixels are opaque.
    ///
    /// With `x_ratio = (old_w - 1) / width` and `y_ratio = (old_h - 1) / height`,
    /// destination `(i, j)` blends the four source pixels around
    /// `(y_ratio * i, x_ratio * j)`.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidDimension`] if either target dimension is zero, or
    /// if the source is smaller than 2×2.
    pub fn resize_bilinear(&mut self, height: usize, width: usize) -> Result<(), BufferError> {
        self.check_resize_bilinear(height, width)?;
        let dst = vec![Pixel::TRANSPARENT; height * width];
        self.resize_bilinear_unchecked(height, width, dst);
        Ok(())
    }

    /// Bilinear resize into `dst`, returning the previous storage.
    ///
    /// # Errors
    ///
    /// As [`resize_bilinear`](Self::resize_bilinear), plus
    /// [`BufferError::DimensionMismatch`] if `dst` does not hold exactly
    /// `height * width` pixels.
    pub fn resize_bilinear_into(
        &mut self,
        height: usize,
        width: usize,
        dst: Vec<Pixel>,
    ) -> Result<Vec<Pixel>, BufferError> {
        self.check_resize_bilinear(height, width)?;
        check_len(height, width, dst.len())?;
        Ok(self.resize_bilinear_unchecked(height, width, dst))
    }

    fn check_resize_bilinear(&self, height: usize, width: usize) -> Result<(), BufferError> {
        if height == 0 || width == 0 {
            return Err(BufferError::InvalidDimension { height, width });
        }
        if self.height() < 2 || self.width() < 2 {
            return Err(BufferError::InvalidDimension {
                height: self.height(),
                width: self.width(),
            });
        }
        Ok(())
    }

    fn resize_bilinear_unchecked(
        &mut self,
        height: usize,
        width: usize,
        mut dst: Vec<Pixel>,
    ) -> Vec<Pixel> {
        let (old_h, old_w) = (self.height(), self.width());
        let src = self.as_slice();
        let sample = |row: usize, col: usize| ColorVector::from(src[row * old_w + col]);

        let x_ratio = (old_w - 1) as f32 / width as f32;
        let y_ratio = (old_h - 1) as f32 / height as f32;

        for (i, dst_row) in dst.chunks_exact_mut(width).enumerate() {
            let y = y_ratio * i as f32;
            // The ratio keeps y below old_h - 1; the clamp guards float error.
            let y0 = (y.floor() as usize).min(old_h - 2);
            let dy = y - y0 as f32;
            for (j, px) in dst_row.iter_mut().enumerate() {
                let x = x_ratio * j as f32;
                let x0 = (x.floor() as usize).min(old_w - 2);
                let dx = x - x0 as f32;

                let blended = sample(y0, x0) * ((1.0 - dx) * (1.0 - dy))
                    + sample(y0, x0 + 1) * (dx * (1.0 - dy))
                    + sample(y0 + 1, x0) * ((1.0 - dx) * dy)
                    + sample(y0 + 1, x0 + 1) * (dx * dy);
                *px = blended.round().to_pixel();
            }
        }
        self.replace(height, width, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(height: usize, width: usize) -> PixelBuffer {
        let data = (0..height * width).map(|i| Pixel(i as u32)).collect();
        PixelBuffer::from_vec(height, width, data).unwrap()
    }

    fn values(buf: &PixelBuffer) -> Vec<u32> {
        buf.to_argb()
    }

    // --- flips ---

    #[test]
    fn flip_vertical_swaps_rows() {
        let mut buf = numbered(3, 2);
        buf.flip_vertical();
        assert_eq!(values(&buf), [4, 5, 2, 3, 0, 1]);
    }

    #[test]
    fn flip_vertical_even_height() {
        let mut buf = numbered(4, 1);
        buf.flip_vertical();
        assert_eq!(values(&buf), [3, 2, 1, 0]);
    }

    #[test]
    fn flip_horizontal_reverses_rows() {
        let mut buf = numbered(2, 3);
        buf.flip_horizontal();
        assert_eq!(values(&buf), [2, 1, 0, 5, 4, 3]);
    }

    #[test]
    fn rotate_down_reverses_everything() {
        let mut buf = numbered(2, 3);
        buf.rotate_down();
        assert_eq!(values(&buf), [5, 4, 3, 2, 1, 0]);
        assert_eq!((buf.height(), buf.width()), (2, 3));
    }

    #[test]
    fn flips_on_empty_buffers() {
        let mut buf = PixelBuffer::new(0, 3);
        buf.flip_vertical();
        buf.flip_horizontal();
        let mut buf = PixelBuffer::new(3, 0);
        buf.rotate_down();
        assert_eq!((buf.height(), buf.width()), (3, 0));
    }

    // --- rotations ---

    #[test]
    fn rotate_right_checkerboard() {
        let mut buf =
            PixelBuffer::from_argb(2, 2, vec![0xFF000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFF000000])
                .unwrap();
        buf.rotate_right();
        assert_eq!(
            values(&buf),
            [0xFFFFFFFF, 0xFF000000, 0xFF000000, 0xFFFFFFFF]
        );
    }

    #[test]
    fn rotate_right_swaps_dimensions() {
        // 0 1 2       3 0
        // 3 4 5  ->   4 1
        //             5 2
        let mut buf = numbered(2, 3);
        buf.rotate_right();
        assert_eq!((buf.height(), buf.width()), (3, 2));
        assert_eq!(values(&buf), [3, 0, 4, 1, 5, 2]);
    }

    #[test]
    fn rotate_left_swaps_dimensions() {
        // 0 1 2       2 5
        // 3 4 5  ->   1 4
        //             0 3
        let mut buf = numbered(2, 3);
        buf.rotate_left();
        assert_eq!((buf.height(), buf.width()), (3, 2));
        assert_eq!(values(&buf), [2, 5, 1, 4, 0, 3]);
    }

    #[test]
    fn rotate_into_returns_old_storage() {
        let mut buf = numbered(2, 3);
        let old = buf.rotate_right_into(vec![Pixel::BLACK; 6]).unwrap();
        assert_eq!(old, numbered(2, 3).into_vec());
        let old = buf.rotate_left_into(old).unwrap();
        assert_eq!(old.len(), 6);
        assert_eq!(buf, numbered(2, 3));
    }

    #[test]
    fn rotate_into_rejects_wrong_size() {
        let mut buf = numbered(2, 3);
        let err = buf.rotate_left_into(vec![Pixel::BLACK; 5]).unwrap_err();
        assert_eq!(
            err,
            BufferError::DimensionMismatch {
                expected: 6,
                actual: 5
            }
        );
        assert_eq!(buf, numbered(2, 3));
    }

    #[test]
    fn rotate_single_row() {
        let mut buf = numbered(1, 4);
        buf.rotate_right();
        assert_eq!((buf.height(), buf.width()), (4, 1));
        assert_eq!(values(&buf), [0, 1, 2, 3]);
        buf.rotate_right();
        assert_eq!(values(&buf), [3, 2, 1, 0]);
    }

    // --- crop ---

    #[test]
    fn crop_copies_rectangle() {
        let mut buf = numbered(4, 5);
        buf.crop(Rect::new(1, 2, 3, 2)).unwrap();
        assert_eq!((buf.height(), buf.width()), (2, 3));
        assert_eq!(values(&buf), [7, 8, 9, 12, 13, 14]);
    }

    #[test]
    fn crop_full_is_identity() {
        let mut buf = numbered(3, 4);
        buf.crop(Rect::full(3, 4)).unwrap();
        assert_eq!(buf, numbered(3, 4));
    }

    #[test]
    fn crop_out_of_bounds_leaves_buffer() {
        let mut buf = numbered(3, 4);
        let err = buf.crop(Rect::new(1, 1, 4, 2)).unwrap_err();
        assert!(matches!(err, BufferError::OutOfBounds { .. }));
        assert_eq!(buf, numbered(3, 4));
    }

    #[test]
    fn crop_into_checks_destination() {
        let mut buf = numbered(3, 4);
        let err = buf
            .crop_into(Rect::new(0, 0, 2, 2), vec![Pixel::BLACK; 3])
            .unwrap_err();
        assert!(matches!(err, BufferError::DimensionMismatch { .. }));
        let old = buf
            .crop_into(Rect::new(0, 0, 2, 2), vec![Pixel::BLACK; 4])
            .unwrap();
        assert_eq!(old.len(), 12);
        assert_eq!(values(&buf), [0, 1, 4, 5]);
    }

    #[test]
    fn crop_empty_rect() {
        let mut buf = numbered(3, 4);
        buf.crop(Rect::new(3, 4, 0, 0)).unwrap();
        assert!(buf.is_empty());
    }

    // --- nearest-neighbor resize ---

    #[test]
    fn resize_upscale_duplicates() {
        let mut buf = numbered(2, 2);
        buf.resize(4, 4).unwrap();
        assert_eq!(
            values(&buf),
            [0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 3, 3, 2, 2, 3, 3]
        );
    }

    #[test]
    fn resize_downscale_samples() {
        let mut buf = numbered(4, 4);
        buf.resize(2, 2).unwrap();
        assert_eq!(values(&buf), [0, 2, 8, 10]);
    }

    #[test]
    fn resize_odd_ratio() {
        let mut buf = numbered(1, 3);
        buf.resize(1, 2).unwrap();
        // floor(0 * 3 / 2) = 0, floor(1 * 3 / 2) = 1
        assert_eq!(values(&buf), [0, 1]);
    }

    #[test]
    fn resize_zero_target_rejected() {
        let mut buf = numbered(2, 2);
        assert_eq!(
            buf.resize(0, 3).unwrap_err(),
            BufferError::InvalidDimension {
                height: 0,
                width: 3
            }
        );
        assert_eq!(buf, numbered(2, 2));
    }

    #[test]
    fn resize_empty_source_rejected() {
        let mut buf = PixelBuffer::new(0, 4);
        assert!(matches!(
            buf.resize(2, 2),
            Err(BufferError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn resize_into_returns_old_storage() {
        let mut buf = numbered(2, 2);
        let old = buf.resize_into(1, 1, vec![Pixel::WHITE]).unwrap();
        assert_eq!(old.len(), 4);
        assert_eq!(values(&buf), [0]);
    }

    // --- bilinear resize ---

    fn gray(v: u8) -> Pixel {
        Pixel::from_argb(0xFF, v, v, v)
    }

    #[test]
    fn bilinear_uniform_stays_uniform() {
        let mut buf = PixelBuffer::filled(5, 7, gray(90));
        buf.resize_bilinear(3, 11).unwrap();
        assert_eq!((buf.height(), buf.width()), (3, 11));
        assert!(buf.as_slice().iter().all(|&p| p == gray(90)));
    }

    #[test]
    fn bilinear_blends_neighbors() {
        // 2x2 source, 2x2 target: ratios are 0.5, so (1, 1) samples the center.
        let mut buf = PixelBuffer::from_vec(
            2,
            2,
            vec![gray(0), gray(100), gray(200), Pixel::from_argb(0xFF, 40, 80, 120)],
        )
        .unwrap();
        buf.resize_bilinear(2, 2).unwrap();
        assert_eq!(buf.get(0, 0).unwrap(), gray(0));
        assert_eq!(buf.get(0, 1).unwrap(), gray(50));
        assert_eq!(buf.get(1, 0).unwrap(), gray(100));
        // (0 + 100 + 200 + 40) / 4 = 85, (0 + 100 + 200 + 80) / 4 = 95, ...
        assert_eq!(buf.get(1, 1).unwrap(), Pixel::from_argb(0xFF, 85, 95, 105));
    }

    #[test]
    fn bilinear_same_size_keeps_origin() {
        let mut buf = numbered(4, 4);
        for p in buf.as_mut_slice() {
            *p = Pixel(p.0 | 0xFF00_0000);
        }
        let origin = buf.get(0, 0).unwrap();
        buf.resize_bilinear(4, 4).unwrap();
        assert_eq!(buf.get(0, 0).unwrap(), origin);
    }

    #[test]
    fn bilinear_output_is_opaque() {
        let mut buf = PixelBuffer::filled(3, 3, Pixel(0x40102030));
        buf.resize_bilinear(2, 2).unwrap();
        assert!(buf.as_slice().iter().all(|p| p.a() == 0xFF));
    }

    #[test]
    fn bilinear_requires_two_by_two_source() {
        let mut buf = numbered(1, 5);
        assert_eq!(
            buf.resize_bilinear(2, 2).unwrap_err(),
            BufferError::InvalidDimension {
                height: 1,
                width: 5
            }
        );
        let mut buf = numbered(3, 3);
        assert!(buf.resize_bilinear(3, 0).is_err());
    }

    #[test]
    fn bilinear_into_checks_destination() {
        let mut buf = PixelBuffer::filled(2, 2, gray(10));
        assert!(matches!(
            buf.resize_bilinear_into(3, 3, vec![Pixel::BLACK; 8]),
            Err(BufferError::DimensionMismatch { .. })
        ));
        let old = buf
            .resize_bilinear_into(3, 3, vec![Pixel::BLACK; 9])
            .unwrap();
        assert_eq!(old.len(), 4);
        assert!(buf.as_slice().iter().all(|&p| p == gray(10)));
    }
}
