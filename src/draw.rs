//! Filled rectangles and lines.

use rgb::Rgb;

use crate::buffer::{Pixels, Selection};
use crate::error::BufferError;
use crate::rect::Rect;
use crate::shader::{self, apply};

/// Paint `rect` with `rgb`, keeping each pixel's alpha.
///
/// # Errors
///
/// [`BufferError::OutOfBounds`] if `rect` does not lie within `pixels`.
pub fn fill_rect<P: Pixels + ?Sized>(
    pixels: &mut P,
    rect: Rect,
    rgb: Rgb<u8>,
) -> Result<(), BufferError> {
    let mut selection = Selection::new(pixels, rect)?;
    apply(&mut selection, &shader::solid(rgb))
}

/// Draw a Bresenham line from `from` to `to`, both `(row, col)` and both
/// included, painting `rgb` and keeping each pixel's alpha.
///
/// # Errors
///
/// [`BufferError::OutOfBounds`] if either endpoint is outside `pixels`.
/// Both are checked before anything is drawn.
pub fn draw_line<P: Pixels + ?Sized>(
    pixels: &mut P,
    from: (usize, usize),
    to: (usize, usize),
    rgb: Rgb<u8>,
) -> Result<(), BufferError> {
    pixels.check_bounds(from.0, from.1)?;
    pixels.check_bounds(to.0, to.1)?;

    let (mut row, mut col) = (from.0 as isize, from.1 as isize);
    let (end_row, end_col) = (to.0 as isize, to.1 as isize);
    let d_col = (end_col - col).abs();
    let d_row = -(end_row - row).abs();
    let step_col = if col < end_col { 1 } else { -1 };
    let step_row = if row < end_row { 1 } else { -1 };
    let mut err = d_col + d_row;

    loop {
        let (r, c) = (row as usize, col as usize);
        let pixel = pixels.get(r, c)?;
        pixels.set(r, c, pixel.with_rgb(rgb))?;
        if row == end_row && col == end_col {
            break;
        }
        let e2 = 2 * err;
        if e2 >= d_row {
            err += d_row;
            col += step_col;
        }
        if e2 <= d_col {
            err += d_col;
            row += step_row;
        }
    }
    Ok(())
}
