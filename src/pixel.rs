//! Packed ARGB pixels and the floating-point color vector used for math
//! that would lose precision in 8-bit integer form.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub};

use rgb::Rgb;

/// A premultiplied 32-bit ARGB pixel (`0xAARRGGBB`).
///
/// Channel setters clamp to `[0, 255]`. Alpha is read-only: it can only be
/// changed by building a new pixel with [`Pixel::from_argb`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Pack four channels.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Set red, clamping `value` into `[0, 255]`.
    #[inline]
    pub fn set_r(&mut self, value: i32) {
        self.0 = (self.0 & 0xFF00_FFFF) | (clamp_channel(value) as u32) << 16;
    }

    /// Set green, clamping `value` into `[0, 255]`.
    #[inline]
    pub fn set_g(&mut self, value: i32) {
        self.0 = (self.0 & 0xFFFF_00FF) | (clamp_channel(value) as u32) << 8;
    }

    /// Set blue, clamping `value` into `[0, 255]`.
    #[inline]
    pub fn set_b(&mut self, value: i32) {
        self.0 = (self.0 & 0xFFFF_FF00) | clamp_channel(value) as u32;
    }

    /// The color channels without alpha.
    #[inline]
    pub const fn rgb(self) -> Rgb<u8> {
        Rgb {
            r: self.r(),
            g: self.g(),
            b: self.b(),
        }
    }

    /// Replace the color channels, keeping this pixel's alpha.
    #[inline]
    pub const fn with_rgb(self, rgb: Rgb<u8>) -> Self {
        Self::from_argb(self.a(), rgb.r, rgb.g, rgb.b)
    }

    /// Channel-wise saturating add of another pixel's color (alpha unchanged).
    pub fn saturating_add(self, other: Pixel) -> Self {
        let mut out = self;
        out.set_r(self.r() as i32 + other.r() as i32);
        out.set_g(self.g() as i32 + other.g() as i32);
        out.set_b(self.b() as i32 + other.b() as i32);
        out
    }

    /// Channel-wise saturating subtract of another pixel's color (alpha unchanged).
    pub fn saturating_sub(self, other: Pixel) -> Self {
        let mut out = self;
        out.set_r(self.r() as i32 - other.r() as i32);
        out.set_g(self.g() as i32 - other.g() as i32);
        out.set_b(self.b() as i32 - other.b() as i32);
        out
    }
}

impl From<u32> for Pixel {
    #[inline]
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Pixel> for u32 {
    #[inline]
    fn from(pixel: Pixel) -> Self {
        pixel.0
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pixel(0x{:08X})", self.0)
    }
}

#[inline]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

// ---------------------------------------------------------------------------
// ColorVector
// ---------------------------------------------------------------------------

/// Three-component floating-point color (R, G, B).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorVector {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorVector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Apply `f` to each channel.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    #[inline]
    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }

    /// Round half away from zero.
    #[inline]
    pub fn round(self) -> Self {
        self.map(f32::round)
    }

    /// Round half to even.
    #[inline]
    pub fn round_ties_even(self) -> Self {
        self.map(f32::round_ties_even)
    }

    #[inline]
    pub fn clamp(self, min: f32, max: f32) -> Self {
        self.map(|c| c.clamp(min, max))
    }

    /// Sum of the three channels.
    #[inline]
    pub fn sum(self) -> f32 {
        self.r + self.g + self.b
    }

    /// Pack as an opaque pixel.
    #[inline]
    pub fn to_pixel(self) -> Pixel {
        self.to_pixel_with_alpha(0xFF)
    }

    /// Pack with the given alpha. Each channel is clamped to `[0, 255]` and
    /// then truncated toward zero.
    #[inline]
    pub fn to_pixel_with_alpha(self, alpha: u8) -> Pixel {
        let c = self.clamp(0.0, 255.0);
        Pixel::from_argb(alpha, c.r as u8, c.g as u8, c.b as u8)
    }
}

impl From<Pixel> for ColorVector {
    #[inline]
    fn from(pixel: Pixel) -> Self {
        Self::new(pixel.r() as f32, pixel.g() as f32, pixel.b() as f32)
    }
}

impl From<Rgb<u8>> for ColorVector {
    #[inline]
    fn from(rgb: Rgb<u8>) -> Self {
        Self::new(rgb.r as f32, rgb.g as f32, rgb.b as f32)
    }
}

impl Add for ColorVector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Add<f32> for ColorVector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self {
        self.map(|c| c + rhs)
    }
}

impl AddAssign for ColorVector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ColorVector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Sub<f32> for ColorVector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self {
        self.map(|c| c - rhs)
    }
}

impl Mul<f32> for ColorVector {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|c| c * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_accessors() {
        let p = Pixel(0x80102030);
        assert_eq!(p.a(), 0x80);
        assert_eq!(p.r(), 0x10);
        assert_eq!(p.g(), 0x20);
        assert_eq!(p.b(), 0x30);
        assert_eq!(Pixel::from_argb(0x80, 0x10, 0x20, 0x30), p);
    }

    #[test]
    fn setters_clamp() {
        let mut p = Pixel(0xFF000000);
        p.set_r(300);
        p.set_g(-5);
        p.set_b(128);
        assert_eq!(p, Pixel(0xFFFF0080));
    }

    #[test]
    fn setters_leave_other_channels() {
        let mut p = Pixel(0x11223344);
        p.set_g(0xAB);
        assert_eq!(p, Pixel(0x1122AB44));
    }

    #[test]
    fn saturating_arithmetic_keeps_alpha() {
        let a = Pixel(0x7FF0_1010);
        let b = Pixel(0x0020_2020);
        assert_eq!(a.saturating_add(b), Pixel(0x7FFF_3030));
        assert_eq!(b.saturating_sub(a), Pixel(0x0000_1010));
    }

    #[test]
    fn rgb_roundtrip_preserves_alpha() {
        let p = Pixel(0x40102030);
        let swapped = p.with_rgb(Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(swapped, Pixel(0x40010203));
        assert_eq!(swapped.rgb(), Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn vector_ops() {
        let v = ColorVector::new(1.0, 2.0, 3.0);
        assert_eq!(v + v, ColorVector::new(2.0, 4.0, 6.0));
        assert_eq!(v - 1.0, ColorVector::new(0.0, 1.0, 2.0));
        assert_eq!(v * 0.5, ColorVector::new(0.5, 1.0, 1.5));
        assert_eq!((v * 0.5).round(), ColorVector::new(1.0, 1.0, 2.0));
        assert_eq!((v * 0.5).round_ties_even(), ColorVector::new(0.0, 1.0, 2.0));
        assert_eq!((v * 0.5).floor(), ColorVector::new(0.0, 1.0, 1.0));
        assert_eq!(v.sum(), 6.0);
    }

    #[test]
    fn packing_clamps() {
        let v = ColorVector::new(-20.0, 127.9, 400.0);
        assert_eq!(v.to_pixel(), Pixel(0xFF007FFF));
        assert_eq!(v.to_pixel_with_alpha(0x10), Pixel(0x10007FFF));
    }

    #[test]
    fn pixel_vector_roundtrip() {
        let p = Pixel(0xFF102030);
        assert_eq!(ColorVector::from(p).to_pixel(), p);
    }

    #[test]
    fn debug_is_hex() {
        assert_eq!(format!("{:?}", Pixel(0xFF0A0B0C)), "Pixel(0xFF0A0B0C)");
    }
}
