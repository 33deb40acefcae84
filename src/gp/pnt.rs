//! 3D point in model space.

use serde::{Deserialize, Serialize};

use super::{Vec3, XYZ};

/// A 3D cartesian point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pnt {
    coord: XYZ,
}

impl Pnt {
    /// Creates a point at origin (0, 0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self { coord: XYZ::new() }
    }

    #[inline]
    pub const fn from_xyz(xyz: XYZ) -> Self {
        Self { coord: xyz }
    }

    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: XYZ::from_coords(x, y, z),
        }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.coord.x()
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.coord.y()
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.coord.z()
    }

    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        self.coord.coords()
    }

    #[inline]
    pub const fn xyz(&self) -> &XYZ {
        &self.coord
    }

    /// True when every coordinate is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coord.is_finite()
    }

    /// Returns true if distance to other <= linear_tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Pnt, linear_tolerance: f64) -> bool {
        self.distance(other) <= linear_tolerance
    }

    #[inline]
    pub fn distance(&self, other: &Pnt) -> f64 {
        self.square_distance(other).sqrt()
    }

    #[inline]
    pub fn square_distance(&self, other: &Pnt) -> f64 {
        self.coord.subtracted(&other.coord).square_modulus()
    }

    /// Returns the point moved by `v`.
    #[inline]
    pub fn translated(&self, v: &Vec3) -> Pnt {
        Pnt::from_xyz(self.coord.added(v.xyz()))
    }
}

impl From<[f64; 3]> for Pnt {
    fn from(arr: [f64; 3]) -> Self {
        Pnt::from_coords(arr[0], arr[1], arr[2])
    }
}

impl From<(f64, f64, f64)> for Pnt {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Pnt::from_coords(tuple.0, tuple.1, tuple.2)
    }
}

impl From<Pnt> for [f64; 3] {
    fn from(pnt: Pnt) -> Self {
        [pnt.x(), pnt.y(), pnt.z()]
    }
}
