//! Geometric primitives package.
//!
//! The small set of value types alignments and stationed points are
//! expressed in: coordinates, points, vectors, unit directions and local
//! frames.

mod xyz;
mod pnt;
mod vec;
mod dir;
mod frame;

pub use xyz::XYZ;
pub use pnt::Pnt;
pub use vec::Vec3;
pub use dir::Dir;
pub use frame::CoordinateSystem;
