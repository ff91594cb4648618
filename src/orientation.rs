//! EXIF orientation support.

use crate::buffer::PixelBuffer;

/// EXIF orientation tag values.
///
/// Describes how stored pixels must be transformed for display. Values
/// match the EXIF Orientation tag (TIFF tag 274). A decoder hands this over
/// alongside the buffer; [`PixelBuffer::apply_orientation`] bakes it in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// No rotation or flip needed.
    #[default]
    Normal = 1,
    /// Flip horizontally (mirror left-right).
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Flip vertically (mirror top-bottom).
    FlipVertical = 4,
    /// Transpose (rotate 90 CW then flip horizontally).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90 = 6,
    /// Transverse (rotate 90 CCW then flip horizontally).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (= 90 CCW).
    Rotate270 = 8,
}

impl Orientation {
    /// Create from EXIF orientation value (1-8).
    ///
    /// Returns [`Normal`](Orientation::Normal) for out-of-range values.
    pub fn from_exif(value: u16) -> Self {
        match value {
            1 => Self::Normal,
            2 => Self::FlipHorizontal,
            3 => Self::Rotate180,
            4 => Self::FlipVertical,
            5 => Self::Transpose,
            6 => Self::Rotate90,
            7 => Self::Transverse,
            8 => Self::Rotate270,
            _ => Self::Normal,
        }
    }

    /// EXIF tag value (1-8).
    pub fn exif_value(self) -> u16 {
        self as u16
    }

    /// Whether this orientation swaps height and width.
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Self::Transpose | Self::Rotate90 | Self::Transverse | Self::Rotate270
        )
    }

    /// Display `(height, width)` for the given stored dimensions.
    pub fn display_dimensions(self, height: usize, width: usize) -> (usize, usize) {
        if self.swaps_dimensions() {
            (width, height)
        } else {
            (height, width)
        }
    }

    /// Whether any transformation is needed.
    pub fn is_identity(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// The orientation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Self::Rotate90 => Self::Rotate270,
            Self::Rotate270 => Self::Rotate90,
            other => other,
        }
    }
}

impl PixelBuffer {
    /// Transform the stored pixels so they display upright.
    pub fn apply_orientation(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Normal => {}
            Orientation::FlipHorizontal => self.flip_horizontal(),
            Orientation::Rotate180 => self.rotate_down(),
            Orientation::FlipVertical => self.flip_vertical(),
            Orientation::Transpose => {
                self.rotate_right();
                self.flip_horizontal();
            }
            Orientation::Rotate90 => self.rotate_right(),
            Orientation::Transverse => {
                self.rotate_left();
                self.flip_horizontal();
            }
            Orientation::Rotate270 => self.rotate_left(),
        }
    }
}
