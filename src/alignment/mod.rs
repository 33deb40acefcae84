//! Alignments: curvilinear reference curves measured in stations.
//!
//! An alignment maps a station (distance along the curve from its origin)
//! to a local [`CoordinateSystem`]: origin on the curve, X along the
//! direction of travel, Z up, Y to the left. Lateral offsets follow the
//! civil convention of positive to the right of travel.

use std::fmt;

use log::trace;

use crate::config::Tolerances;
use crate::gp::{CoordinateSystem, Pnt};
use crate::{FeaturelineError, Result};

mod line;
mod arc;
mod offset;
mod composite;

pub use line::LineAlignment;
pub use arc::ArcAlignment;
pub use offset::OffsetAlignment;
pub use composite::CompositeAlignment;

/// A curvilinear reference curve with a station range.
///
/// Implementations must be immutable once built: stationed points cache
/// frames computed from them and are never told about geometry changes.
pub trait Alignment: fmt::Debug + Send + Sync {
    /// Display name, used in error messages.
    fn name(&self) -> &str;

    /// Station at the start of the curve.
    fn start_station(&self) -> f64;

    /// Station at the end of the curve.
    fn end_station(&self) -> f64;

    fn tolerances(&self) -> &Tolerances;

    /// Local frame at `station`.
    ///
    /// Fails with [`FeaturelineError::GeometryDomain`] when `station` lies
    /// outside the station range (plus the station tolerance).
    fn frame_at_station(&self, station: f64) -> Result<CoordinateSystem>;

    /// Smallest radius of the curve's left turns (infinite if it never
    /// turns left). An offset further left than this folds over itself.
    fn min_radius_left(&self) -> f64 {
        f64::INFINITY
    }

    /// Smallest radius of the curve's right turns (infinite if it never
    /// turns right).
    fn min_radius_right(&self) -> f64 {
        f64::INFINITY
    }

    /// Smallest radius of curvature in either direction.
    fn min_radius(&self) -> f64 {
        self.min_radius_left().min(self.min_radius_right())
    }

    /// Length of the station range.
    fn length(&self) -> f64 {
        self.end_station() - self.start_station()
    }

    /// True if `station` can be resolved to a frame.
    fn contains_station(&self, station: f64) -> bool {
        let slack = self.tolerances().station;
        station.is_finite()
            && station >= self.start_station() - slack
            && station <= self.end_station() + slack
    }

    /// Point on the curve at `station`.
    fn point_at_station(&self, station: f64) -> Result<Pnt> {
        Ok(*self.frame_at_station(station)?.origin())
    }

    /// Point displaced from the curve at `station` by `offset` (positive to
    /// the right) and `elevation` along the frame's Z axis.
    fn point_at_station_offset(&self, station: f64, offset: f64, elevation: f64) -> Result<Pnt> {
        let frame = self.frame_at_station(station)?;
        Ok(frame.to_global(&Pnt::from_coords(0.0, -offset, elevation)))
    }
}

/// Checks `station` against the alignment's range and clamps it into
/// `[start_station, end_station]` for evaluation.
pub(crate) fn resolve_station<A: Alignment + ?Sized>(alignment: &A, station: f64) -> Result<f64> {
    if !alignment.contains_station(station) {
        trace!(
            "station {} rejected by alignment '{}' [{}, {}]",
            station,
            alignment.name(),
            alignment.start_station(),
            alignment.end_station()
        );
        return Err(FeaturelineError::GeometryDomain {
            alignment: alignment.name().to_string(),
            station,
            start: alignment.start_station(),
            end: alignment.end_station(),
        });
    }
    Ok(station.clamp(alignment.start_station(), alignment.end_station()))
}

/// Rejects NaN and infinite construction parameters.
pub(crate) fn ensure_finite(what: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FeaturelineError::InvalidGeometry(format!(
            "{} must be finite, got {}",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::Dir;

    #[test]
    fn test_resolve_station_clamps_within_slack() {
        let line = LineAlignment::new("CL", Pnt::new(), Dir::x(), 10.0, 0.0).unwrap();
        let s = resolve_station(&line, 10.0 + 0.5e-6).unwrap();
        assert_eq!(s, 10.0);
        let s = resolve_station(&line, -0.5e-6).unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_resolve_station_rejects_outside() {
        let line = LineAlignment::new("CL", Pnt::new(), Dir::x(), 10.0, 0.0).unwrap();
        match resolve_station(&line, 10.5) {
            Err(FeaturelineError::GeometryDomain { alignment, station, start, end }) => {
                assert_eq!(alignment, "CL");
                assert_eq!(station, 10.5);
                assert_eq!((start, end), (0.0, 10.0));
            }
            other => panic!("expected domain error, got {:?}", other),
        }
        assert!(resolve_station(&line, f64::NAN).is_err());
    }

    #[test]
    fn test_point_at_station_offset_right_is_positive() {
        let line = LineAlignment::new("CL", Pnt::new(), Dir::x(), 10.0, 0.0).unwrap();
        let p = line.point_at_station_offset(4.0, 2.0, 0.5).unwrap();
        assert!(p.is_equal(&Pnt::from_coords(4.0, -2.0, 0.5), 1e-10));
        let p = line.point_at_station_offset(4.0, -2.0, 0.0).unwrap();
        assert!(p.is_equal(&Pnt::from_coords(4.0, 2.0, 0.0), 1e-10));
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("length", 1.0).is_ok());
        assert!(matches!(
            ensure_finite("length", f64::INFINITY),
            Err(FeaturelineError::InvalidGeometry(_))
        ));
    }
}
