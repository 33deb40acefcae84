//! 3D vector.

use super::{Dir, Pnt, XYZ};

/// A 3D vector in cartesian space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    coord: XYZ,
}

impl Vec3 {
    /// Creates a null vector.
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

    /// Creates a vector from two points (P1 -> P2).
    #[inline]
    pub fn from_points(p1: &Pnt, p2: &Pnt) -> Self {
        Self {
            coord: p2.xyz().subtracted(p1.xyz()),
        }
    }

    /// Vector of length `magnitude` along `dir`.
    #[inline]
    pub fn along(dir: &Dir, magnitude: f64) -> Self {
        Self {
            coord: dir.xyz().multiplied(magnitude),
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
    pub const fn xyz(&self) -> &XYZ {
        &self.coord
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.coord.modulus()
    }

    #[inline]
    pub fn added(&self, other: &Vec3) -> Vec3 {
        Vec3::from_xyz(self.coord.added(&other.coord))
    }

    #[inline]
    pub fn multiplied(&self, scalar: f64) -> Vec3 {
        Vec3::from_xyz(self.coord.multiplied(scalar))
    }

    /// Scalar projection onto a unit direction.
    #[inline]
    pub fn dot_dir(&self, dir: &Dir) -> f64 {
        self.coord.dot(dir.xyz())
    }
}
