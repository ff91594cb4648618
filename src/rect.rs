//! Axis-aligned integer rectangles.

/// Far-edge rule for [`Rect::contains_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bounds {
    /// `row <= rect.row + rect.height` (and likewise for columns). This
    /// admits one row and one column past the rectangle's extent.
    #[default]
    Inclusive,
    /// `row < rect.row + rect.height`: exactly the cells the rectangle covers.
    Exclusive,
}

/// A rectangle identified by its top-left corner and its size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// The rectangle covering a whole `height × width` image.
    pub const fn full(height: usize, width: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// One past the last row, or `None` on overflow.
    pub fn end_row(&self) -> Option<usize> {
        self.row.checked_add(self.height)
    }

    /// One past the last column, or `None` on overflow.
    pub fn end_col(&self) -> Option<usize> {
        self.col.checked_add(self.width)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Containment with an inclusive far edge.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.contains_with(row, col, Bounds::Inclusive)
    }

    pub fn contains_with(&self, row: usize, col: usize, bounds: Bounds) -> bool {
        let end_row = self.row.saturating_add(self.height);
        let end_col = self.col.saturating_add(self.width);
        if row < self.row || col < self.col {
            return false;
        }
        match bounds {
            Bounds::Inclusive => row <= end_row && col <= end_col,
            Bounds::Exclusive => row < end_row && col < end_col,
        }
    }

    /// Whether the rectangle lies entirely within a `height × width` extent.
    pub fn fits_within(&self, height: usize, width: usize) -> bool {
        self.end_row().is_some_and(|end| end <= height)
            && self.end_col().is_some_and(|end| end <= width)
    }
}
