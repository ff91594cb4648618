//! In-memory editing of packed ARGB pixel grids.
//!
//! - [`Pixel`] / [`ColorVector`]: packed 32-bit pixels and float color math
//! - [`Pixels`] / [`PixelBuffer`] / [`Selection`]: grids and rectangular views
//! - geometry on [`PixelBuffer`]: flips, rotations, crop, nearest and bilinear resize
//! - [`Shader`] / [`apply`]: per-pixel color transforms over any [`Pixels`]
//! - [`Posterizer`] / [`dither`]: quantization and Floyd–Steinberg dithering
//! - [`fill_rect`] / [`draw_line`]: drawing primitives
//! - [`Orientation`]: EXIF orientation baked into pixels
//! - [`ImageEditor`] / [`Edit`]: a session that applies edits atomically
//! - [`ResourceLimits`]: caps on the size of produced images
//!
//! Every fallible operation validates its inputs before writing a pixel and
//! reports a [`BufferError`].
//!
//! ```
//! use pixedit::{Edit, ImageEditor, Pixel, PixelBuffer};
//!
//! let image = PixelBuffer::filled(2, 3, Pixel::from_argb(0xFF, 0x10, 0x20, 0x30));
//! let mut editor = ImageEditor::new(image);
//! editor.apply(Edit::RotateRight)?;
//! editor.apply(Edit::Invert)?;
//! let image = editor.into_inner();
//! assert_eq!((image.height(), image.width()), (3, 2));
//! assert_eq!(image.as_slice()[0], Pixel(0xFFEF_DFCF));
//! # Ok::<(), pixedit::BufferError>(())
//! ```

#![forbid(unsafe_code)]

mod buffer;
mod dimensions;
mod draw;
mod editor;
mod error;
mod geometry;
mod limits;
mod orientation;
mod pixel;
mod quantize;
mod rect;
pub mod shader;

pub use buffer::{PixelBuffer, Pixels, Selection};
pub use dimensions::Dimensions;
pub use draw::{draw_line, fill_rect};
pub use editor::{Edit, ImageEditor};
pub use error::BufferError;
pub use limits::{LimitExceeded, ResourceLimits};
pub use orientation::Orientation;
pub use pixel::{ColorVector, Pixel};
pub use quantize::{MAX_DEPTH, Posterizer, Rounding, dither, dither_with};
pub use rect::{Bounds, Rect};
pub use shader::{PerPixel, Shader, apply};

// Re-exports for callers building buffers from other image types.
pub use imgref::{Img, ImgRef, ImgRefMut, ImgVec};
pub use rgb;
pub use rgb::Rgb;
