//! 3D coordinate triplet.
//!
//! Storage and algebra shared by [`Pnt`](super::Pnt), [`Vec3`](super::Vec3)
//! and [`Dir`](super::Dir).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::precision;

/// Cartesian coordinate entity {X, Y, Z}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XYZ {
    x: f64,
    y: f64,
    z: f64,
}

impl XYZ {
    /// Creates an XYZ with zero coordinates.
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Creates an XYZ with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns all three coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// True when no coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Length of the triplet seen as a vector.
    #[inline]
    pub fn modulus(&self) -> f64 {
        self.square_modulus().sqrt()
    }

    #[inline]
    pub const fn square_modulus(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns true if every coordinate differs by at most `tolerance`.
    #[inline]
    pub fn is_equal(&self, other: &XYZ, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    #[inline]
    pub const fn added(&self, other: &XYZ) -> XYZ {
        XYZ::from_coords(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    pub const fn subtracted(&self, other: &XYZ) -> XYZ {
        XYZ::from_coords(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    pub const fn multiplied(&self, scalar: f64) -> XYZ {
        XYZ::from_coords(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    #[inline]
    pub const fn reversed(&self) -> XYZ {
        XYZ::from_coords(-self.x, -self.y, -self.z)
    }

    #[inline]
    pub const fn dot(&self, other: &XYZ) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub const fn crossed(&self, other: &XYZ) -> XYZ {
        XYZ {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the normalized triplet, or None if its length is within
    /// [`precision::CONFUSION`] of zero.
    pub fn normalized(&self) -> Option<XYZ> {
        let d = self.modulus();
        if !d.is_finite() || d <= precision::CONFUSION {
            return None;
        }
        Some(self.multiplied(1.0 / d))
    }
}

impl Add for XYZ {
    type Output = XYZ;
    #[inline]
    fn add(self, other: XYZ) -> XYZ {
        self.added(&other)
    }
}

impl Sub for XYZ {
    type Output = XYZ;
    #[inline]
    fn sub(self, other: XYZ) -> XYZ {
        self.subtracted(&other)
    }
}

impl Mul<f64> for XYZ {
    type Output = XYZ;
    #[inline]
    fn mul(self, scalar: f64) -> XYZ {
        self.multiplied(scalar)
    }
}

impl Neg for XYZ {
    type Output = XYZ;
    #[inline]
    fn neg(self) -> XYZ {
        self.reversed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_cross_follows_right_hand_rule() {
        let x = XYZ::from_coords(1.0, 0.0, 0.0);
        let y = XYZ::from_coords(0.0, 1.0, 0.0);
        assert_eq!(x.crossed(&y), XYZ::from_coords(0.0, 0.0, 1.0));
        assert_eq!(y.crossed(&x), XYZ::from_coords(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_xyz_normalized() {
        let v = XYZ::from_coords(3.0, 4.0, 0.0).normalized().unwrap();
        assert!((v.x() - 0.6).abs() < 1e-10);
        assert!((v.y() - 0.8).abs() < 1e-10);
        assert!((v.modulus() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_xyz_normalized_degenerate() {
        assert!(XYZ::new().normalized().is_none());
        assert!(XYZ::from_coords(f64::NAN, 0.0, 0.0).normalized().is_none());
    }

    #[test]
    fn test_xyz_is_finite() {
        assert!(XYZ::from_coords(1.0, -2.0, 3.0).is_finite());
        assert!(!XYZ::from_coords(1.0, f64::INFINITY, 3.0).is_finite());
    }

    #[test]
    fn test_xyz_operators() {
        let a = XYZ::from_coords(1.0, 2.0, 3.0);
        let b = XYZ::from_coords(0.5, 0.5, 0.5);
        assert_eq!(a + b, XYZ::from_coords(1.5, 2.5, 3.5));
        assert_eq!(a - b, XYZ::from_coords(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, XYZ::from_coords(2.0, 4.0, 6.0));
        assert_eq!(-a, XYZ::from_coords(-1.0, -2.0, -3.0));
    }
}
