//! Right-handed local coordinate system.
//!
//! The frame handed out by alignments at a station: an origin on the curve,
//! X along the direction of travel, Z up, Y = Z × X to the left.

use serde::{Deserialize, Serialize};

use super::{Dir, Pnt, Vec3, XYZ};

/// A right-handed coordinate system in 3D space.
/// Defined by an origin, a main direction (Z) and an X direction.
/// Y direction is computed as Z × X.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    origin: Pnt,
    vxdir: Dir,
    vydir: Dir,
    vzdir: Dir,
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::standard()
    }
}

impl CoordinateSystem {
    /// World coordinate system at origin.
    pub const fn standard() -> Self {
        Self {
            origin: Pnt::new(),
            vxdir: Dir::x(),
            vydir: Dir::y(),
            vzdir: Dir::z(),
        }
    }

    /// Creates from origin, main (Z) direction and X direction.
    ///
    /// `vx` is projected onto the plane perpendicular to `n`; returns None
    /// when the two directions are parallel.
    pub fn new(origin: Pnt, n: Dir, vx: Dir) -> Option<Self> {
        let proj = vx.xyz().subtracted(&n.xyz().multiplied(n.dot(&vx)));
        let vxdir = Dir::from_xyz(proj)?;
        let vydir = n.crossed(&vxdir)?;
        Some(Self {
            origin,
            vxdir,
            vydir,
            vzdir: n,
        })
    }

    /// Frame whose X axis follows `tangent` and whose Z axis is the world up
    /// direction made perpendicular to it.
    ///
    /// Returns None for a vertical tangent, where "up" is undefined.
    pub fn from_tangent(origin: Pnt, tangent: Dir) -> Option<Self> {
        let up = Dir::z();
        let proj = up.xyz().subtracted(&tangent.xyz().multiplied(tangent.dot(&up)));
        let vzdir = Dir::from_xyz(proj)?;
        let vydir = vzdir.crossed(&tangent)?;
        Some(Self {
            origin,
            vxdir: tangent,
            vydir,
            vzdir,
        })
    }

    #[inline]
    pub const fn origin(&self) -> &Pnt {
        &self.origin
    }

    #[inline]
    pub const fn xdirection(&self) -> &Dir {
        &self.vxdir
    }

    #[inline]
    pub const fn ydirection(&self) -> &Dir {
        &self.vydir
    }

    /// Returns the main (Z) direction.
    #[inline]
    pub const fn direction(&self) -> &Dir {
        &self.vzdir
    }

    /// Expresses a world point in this frame's coordinates.
    pub fn to_local(&self, p: &Pnt) -> Pnt {
        let v = Vec3::from_points(&self.origin, p);
        Pnt::from_coords(
            v.dot_dir(&self.vxdir),
            v.dot_dir(&self.vydir),
            v.dot_dir(&self.vzdir),
        )
    }

    /// Maps a point given in this frame's coordinates back to world space.
    pub fn to_global(&self, local: &Pnt) -> Pnt {
        let offset: XYZ = self.vxdir.xyz().multiplied(local.x())
            + self.vydir.xyz().multiplied(local.y())
            + self.vzdir.xyz().multiplied(local.z());
        Pnt::from_xyz(self.origin.xyz().added(&offset))
    }

    /// Returns the frame with its origin moved by `v`; axes are unchanged.
    pub fn translated(&self, v: &Vec3) -> CoordinateSystem {
        Self {
            origin: self.origin.translated(v),
            ..*self
        }
    }

    /// Returns true when origins coincide within `linear_tol` and all axes
    /// agree within `angular_tol`.
    pub fn is_equal(&self, other: &CoordinateSystem, linear_tol: f64, angular_tol: f64) -> bool {
        self.origin.is_equal(&other.origin, linear_tol)
            && self.vxdir.is_equal(&other.vxdir, angular_tol)
            && self.vydir.is_equal(&other.vydir, angular_tol)
            && self.vzdir.is_equal(&other.vzdir, angular_tol)
    }
}
