//! The error type shared by every buffer operation.

use thiserror::Error;

use crate::limits::LimitExceeded;

/// Errors from pixel buffer operations.
///
/// All variants are caller contract violations detected before any pixel is
/// written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BufferError {
    /// A flat pixel array does not hold exactly `height * width` pixels.
    #[error("pixel array holds {actual} pixels, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// A coordinate or rectangle lies outside a `height × width` extent.
    #[error("({row}, {col}) is outside {height}x{width}")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    /// A requested size cannot be produced from the source.
    #[error("invalid dimensions {height}x{width}")]
    InvalidDimension { height: usize, width: usize },
    /// Quantization depth outside `[1, 256]`.
    #[error("quantization depth {depth} is outside [1, 256]")]
    InvalidDepth { depth: u32 },
    /// A configured resource limit rejected the result size.
    #[error(transparent)]
    Limit(#[from] LimitExceeded),
}

/// Verify `len == height * width`.
pub(crate) fn check_len(height: usize, width: usize, len: usize) -> Result<(), BufferError> {
    let expected = height
        .checked_mul(width)
        .ok_or(BufferError::InvalidDimension { height, width })?;
    if len != expected {
        return Err(BufferError::DimensionMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_len_matches() {
        assert!(check_len(3, 4, 12).is_ok());
        assert!(check_len(0, 7, 0).is_ok());
    }

    #[test]
    fn check_len_mismatch() {
        assert_eq!(
            check_len(2, 2, 3),
            Err(BufferError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn check_len_overflow() {
        assert_eq!(
            check_len(usize::MAX, 2, 0),
            Err(BufferError::InvalidDimension {
                height: usize::MAX,
                width: 2
            })
        );
    }

    #[test]
    fn display() {
        let msg = BufferError::OutOfBounds {
            row: 5,
            col: 1,
            height: 4,
            width: 4,
        }
        .to_string();
        assert_eq!(msg, "(5, 1) is outside 4x4");
    }

    #[test]
    fn limit_is_transparent() {
        let err: BufferError = LimitExceeded::Width { actual: 9, max: 8 }.into();
        assert_eq!(err.to_string(), "width 9 exceeds limit 8");
    }
}
