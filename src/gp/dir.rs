//! Unit direction vector.

use serde::{Deserialize, Serialize};

use super::XYZ;

/// A unit vector (direction) in 3D space.
/// Always normalized (magnitude = 1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dir {
    coord: XYZ,
}

impl Default for Dir {
    fn default() -> Self {
        Self::z()
    }
}

impl Dir {
    /// X direction (1, 0, 0).
    pub const fn x() -> Self {
        Self { coord: XYZ::from_coords(1.0, 0.0, 0.0) }
    }

    /// Y direction (0, 1, 0).
    pub const fn y() -> Self {
        Self { coord: XYZ::from_coords(0.0, 1.0, 0.0) }
    }

    /// Z direction (0, 0, 1), the world "up" for horizontal alignments.
    pub const fn z() -> Self {
        Self { coord: XYZ::from_coords(0.0, 0.0, 1.0) }
    }

    /// Creates a direction from XYZ (normalizes).
    /// Returns None if vector is too small.
    pub fn from_xyz(xyz: XYZ) -> Option<Self> {
        xyz.normalized().map(|coord| Self { coord })
    }

    /// Creates a direction from coordinates (normalizes).
    /// Returns None if vector is too small.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Option<Self> {
        Self::from_xyz(XYZ::from_coords(x, y, z))
    }

    /// Horizontal direction at `angle` radians counter-clockwise from +X.
    pub fn from_heading(angle: f64) -> Self {
        Self {
            coord: XYZ::from_coords(angle.cos(), angle.sin(), 0.0),
        }
    }

    #[inline]
    pub const fn x_val(&self) -> f64 {
        self.coord.x()
    }

    #[inline]
    pub const fn y_val(&self) -> f64 {
        self.coord.y()
    }

    #[inline]
    pub const fn z_val(&self) -> f64 {
        self.coord.z()
    }

    #[inline]
    pub const fn xyz(&self) -> &XYZ {
        &self.coord
    }

    /// Returns true if parallel to other within angular tolerance.
    pub fn is_parallel(&self, other: &Dir, angular_tolerance: f64) -> bool {
        self.coord.crossed(&other.coord).modulus() <= angular_tolerance
    }

    /// Returns true if parallel and pointing the same way.
    pub fn is_equal(&self, other: &Dir, angular_tolerance: f64) -> bool {
        self.dot(other) > 0.0 && self.is_parallel(other, angular_tolerance)
    }

    /// Returns angle to other direction (radians, 0 to PI).
    pub fn angle(&self, other: &Dir) -> f64 {
        self.dot(other).clamp(-1.0, 1.0).acos()
    }

    /// Computes cross product (returns Dir, normalizes result).
    /// None when the directions are parallel.
    pub fn crossed(&self, other: &Dir) -> Option<Dir> {
        Dir::from_xyz(self.coord.crossed(&other.coord))
    }

    #[inline]
    pub fn dot(&self, other: &Dir) -> f64 {
        self.coord.dot(&other.coord)
    }

    #[inline]
    pub fn reversed(&self) -> Dir {
        Dir { coord: self.coord.reversed() }
    }
}

impl std::ops::Neg for Dir {
    type Output = Dir;
    fn neg(self) -> Dir {
        self.reversed()
    }
}
