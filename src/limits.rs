//! Resource limits for operations that allocate a new buffer.
//!
//! [`ResourceLimits`] caps the dimensions an operation may produce.
//! [`LimitExceeded`] is returned when a check fails. Checks run before any
//! allocation or pixel work.

use thiserror::Error;

/// Caps on the size of buffers an edit may produce.
///
/// All fields are optional; `None` means no limit for that resource.
///
/// # Example
///
/// ```
/// use pixedit::ResourceLimits;
///
/// let limits = ResourceLimits::none()
///     .with_max_pixels(16_000_000)
///     .with_max_width(8192);
/// assert!(limits.check_dimensions(4000, 3000).is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResourceLimits {
    /// Maximum total pixels (height × width).
    pub max_pixels: Option<u64>,
    /// Maximum image width in pixels.
    pub max_width: Option<usize>,
    /// Maximum image height in pixels.
    pub max_height: Option<usize>,
}

impl ResourceLimits {
    /// No limits (all fields `None`).
    pub fn none() -> Self {
        Self::default()
    }

    /// Set maximum total pixels.
    pub fn with_max_pixels(mut self, max: u64) -> Self {
        self.max_pixels = Some(max);
        self
    }

    /// Set maximum image width in pixels.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set maximum image height in pixels.
    pub fn with_max_height(mut self, height: usize) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Whether any limits are set.
    pub fn has_any(&self) -> bool {
        self.max_pixels.is_some() || self.max_width.is_some() || self.max_height.is_some()
    }

    /// Check `height × width` against `max_height`, `max_width`, and `max_pixels`.
    pub fn check_dimensions(&self, height: usize, width: usize) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_width
            && width > max
        {
            return Err(LimitExceeded::Width { actual: width, max });
        }
        if let Some(max) = self.max_height
            && height > max
        {
            return Err(LimitExceeded::Height {
                actual: height,
                max,
            });
        }
        if let Some(max) = self.max_pixels {
            let pixels = height as u64 * width as u64;
            if pixels > max {
                return Err(LimitExceeded::Pixels {
                    actual: pixels,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// A resource limit was exceeded.
///
/// Each variant carries the actual value and the limit that was exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LimitExceeded {
    /// Width exceeded `max_width`.
    #[error("width {actual} exceeds limit {max}")]
    Width {
        /// Actual width.
        actual: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// Height exceeded `max_height`.
    #[error("height {actual} exceeds limit {max}")]
    Height {
        /// Actual height.
        actual: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// Pixel count exceeded `max_pixels`.
    #[error("pixel count {actual} exceeds limit {max}")]
    Pixels {
        /// Actual pixel count.
        actual: u64,
        /// Maximum allowed.
        max: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_limits() {
        let limits = ResourceLimits::none();
        assert!(!limits.has_any());
        assert!(limits.check_dimensions(usize::MAX, usize::MAX).is_ok());
    }

    #[test]
    fn builder_sets_limits() {
        let limits = ResourceLimits::none()
            .with_max_pixels(1_000_000)
            .with_max_height(600);
        assert!(limits.has_any());
        assert_eq!(limits.max_pixels, Some(1_000_000));
        assert_eq!(limits.max_height, Some(600));
        assert!(limits.max_width.is_none());
    }

    #[test]
    fn check_dimensions_pass() {
        let limits = ResourceLimits::none()
            .with_max_width(1920)
            .with_max_height(1080)
            .with_max_pixels(2_073_600);
        assert!(limits.check_dimensions(1080, 1920).is_ok());
        assert!(limits.check_dimensions(100, 100).is_ok());
    }

    #[test]
    fn check_dimensions_width_exceeded() {
        let limits = ResourceLimits::none().with_max_width(1920);
        assert_eq!(
            limits.check_dimensions(1080, 1921).unwrap_err(),
            LimitExceeded::Width {
                actual: 1921,
                max: 1920
            }
        );
    }

    #[test]
    fn check_dimensions_height_exceeded() {
        let limits = ResourceLimits::none().with_max_height(1080);
        assert_eq!(
            limits.check_dimensions(1081, 10).unwrap_err(),
            LimitExceeded::Height {
                actual: 1081,
                max: 1080
            }
        );
    }

    #[test]
    fn check_dimensions_pixels_exceeded() {
        let limits = ResourceLimits::none().with_max_pixels(99);
        assert_eq!(
            limits.check_dimensions(10, 10).unwrap_err(),
            LimitExceeded::Pixels {
                actual: 100,
                max: 99
            }
        );
    }

    #[test]
    fn display_names_the_limit() {
        let msg = LimitExceeded::Width { actual: 5, max: 4 }.to_string();
        assert!(msg.contains("width"));
        assert!(msg.contains('5'));
    }
}
