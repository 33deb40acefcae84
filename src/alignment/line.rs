//! Straight (tangent) alignment.

use super::{ensure_finite, resolve_station, Alignment};
use crate::config::Tolerances;
use crate::gp::{CoordinateSystem, Dir, Pnt, Vec3};
use crate::{FeaturelineError, Result};

/// A straight alignment starting at `start` and running along `direction`.
///
/// The direction may carry a grade but must not be vertical. Stations are
/// horizontal distances, as in civil stationing: on a graded line, `length`
/// is the plan length and the slope distance is longer.
#[derive(Clone, Debug)]
pub struct LineAlignment {
    name: String,
    direction: Dir,
    length: f64,
    /// Slope distance travelled per unit of horizontal distance
    slope_factor: f64,
    start_station: f64,
    start_frame: CoordinateSystem,
    tolerances: Tolerances,
}

impl LineAlignment {
    pub fn new(
        name: impl Into<String>,
        start: Pnt,
        direction: Dir,
        length: f64,
        start_station: f64,
    ) -> Result<Self> {
        let name = name.into();
        ensure_finite("line length", length)?;
        ensure_finite("start station", start_station)?;
        if length <= 0.0 {
            return Err(FeaturelineError::InvalidGeometry(format!(
                "line alignment '{}' must have positive length, got {}",
                name, length
            )));
        }
        if !start.is_finite() {
            return Err(FeaturelineError::InvalidGeometry(format!(
                "line alignment '{}' has a non-finite start point",
                name
            )));
        }
        let start_frame = CoordinateSystem::from_tangent(start, direction).ok_or_else(|| {
            FeaturelineError::InvalidGeometry(format!(
                "line alignment '{}' cannot run vertically",
                name
            ))
        })?;
        let slope_factor = 1.0 / direction.x_val().hypot(direction.y_val());
        Ok(Self {
            name,
            direction,
            length,
            slope_factor,
            start_station,
            start_frame,
            tolerances: Tolerances::default(),
        })
    }

    /// Line from `p1` to `p2`, stationed from `start_station` at `p1`.
    pub fn through_points(
        name: impl Into<String>,
        p1: Pnt,
        p2: Pnt,
        start_station: f64,
    ) -> Result<Self> {
        let name = name.into();
        let chord = Vec3::from_points(&p1, &p2);
        let direction = Dir::from_xyz(*chord.xyz()).ok_or_else(|| {
            FeaturelineError::InvalidGeometry(format!(
                "line alignment '{}' needs two distinct points",
                name
            ))
        })?;
        let plan_length = chord.x().hypot(chord.y());
        Self::new(name, p1, direction, plan_length, start_station)
    }

    /// Replaces the default tolerances; fails if they do not validate.
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Result<Self> {
        tolerances.validate()?;
        self.tolerances = tolerances;
        Ok(self)
    }

    #[inline]
    pub fn start_point(&self) -> &Pnt {
        self.start_frame.origin()
    }

    #[inline]
    pub fn direction(&self) -> &Dir {
        &self.direction
    }
}

impl Alignment for LineAlignment {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_station(&self) -> f64 {
        self.start_station
    }

    fn end_station(&self) -> f64 {
        self.start_station + self.length
    }

    fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn frame_at_station(&self, station: f64) -> Result<CoordinateSystem> {
        let station = resolve_station(self, station)?;
        let along = Vec3::along(&self.direction, (station - self.start_station) * self.slope_factor);
        Ok(self.start_frame.translated(&along))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision;

    #[test]
    fn test_line_frame_along_x() {
        let line = LineAlignment::new("CL", Pnt::new(), Dir::x(), 100.0, 0.0).unwrap();
        let cs = line.frame_at_station(12.5).unwrap();
        assert!(cs.origin().is_equal(&Pnt::from_coords(12.5, 0.0, 0.0), precision::CONFUSION));
        assert!(cs.xdirection().is_equal(&Dir::x(), precision::ANGULAR));
        assert!(cs.ydirection().is_equal(&Dir::y(), precision::ANGULAR));
        assert!(cs.direction().is_equal(&Dir::z(), precision::ANGULAR));
    }

    #[test]
    fn test_line_start_station_shift() {
        let line = LineAlignment::new("CL", Pnt::from_coords(5.0, 5.0, 1.0), Dir::y(), 50.0, 1000.0).unwrap();
        assert_eq!(line.start_station(), 1000.0);
        assert_eq!(line.end_station(), 1050.0);
        let p = line.point_at_station(1020.0).unwrap();
        assert!(p.is_equal(&Pnt::from_coords(5.0, 25.0, 1.0), 1e-10));
        assert!(line.frame_at_station(10.0).is_err());
    }

    #[test]
    fn test_line_through_points() {
        let line = LineAlignment::through_points(
            "CL",
            Pnt::from_coords(0.0, 0.0, 0.0),
            Pnt::from_coords(30.0, 40.0, 0.0),
            0.0,
        )
        .unwrap();
        assert!((line.length() - 50.0).abs() < 1e-10);
        let end = line.point_at_station(50.0).unwrap();
        assert!(end.is_equal(&Pnt::from_coords(30.0, 40.0, 0.0), 1e-9));
    }

    #[test]
    fn test_line_rejects_bad_geometry() {
        assert!(LineAlignment::new("CL", Pnt::new(), Dir::x(), 0.0, 0.0).is_err());
        assert!(LineAlignment::new("CL", Pnt::new(), Dir::x(), f64::NAN, 0.0).is_err());
        assert!(LineAlignment::new("CL", Pnt::new(), Dir::z(), 10.0, 0.0).is_err());
        assert!(LineAlignment::through_points("CL", Pnt::new(), Pnt::new(), 0.0).is_err());
    }

    #[test]
    fn test_line_custom_station_tolerance() {
        let tolerances = Tolerances { station: 0.01, ..Tolerances::default() };
        let line = LineAlignment::new("CL", Pnt::new(), Dir::x(), 10.0, 0.0)
            .unwrap()
            .with_tolerances(tolerances)
            .unwrap();
        assert!(line.contains_station(10.005));
        assert!(!line.contains_station(10.02));
        let end = line.point_at_station(10.005).unwrap();
        assert!(end.is_equal(&Pnt::from_coords(10.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn test_line_rejects_invalid_tolerances() {
        let line = LineAlignment::new("CL", Pnt::new(), Dir::x(), 10.0, 0.0).unwrap();
        for station in [-1.0, f64::NAN] {
            let tolerances = Tolerances { station, ..Tolerances::default() };
            assert!(matches!(
                line.clone().with_tolerances(tolerances),
                Err(FeaturelineError::InvalidArgument(_))
            ));
        }
        // the default slack still admits the end station
        assert!(line.frame_at_station(10.0).is_ok());
    }

    #[test]
    fn test_graded_line_stations_are_horizontal() {
        // 10% grade: 10 m in plan rises 1 m
        let grade = Dir::from_coords(1.0, 0.0, 0.1).unwrap();
        let line = LineAlignment::new("Ramp", Pnt::new(), grade, 10.0, 0.0).unwrap();
        assert_eq!(line.end_station(), 10.0);
        let end = line.point_at_station(10.0).unwrap();
        assert!(end.is_equal(&Pnt::from_coords(10.0, 0.0, 1.0), 1e-10));
        let mid = line.point_at_station(5.0).unwrap();
        assert!(mid.is_equal(&Pnt::from_coords(5.0, 0.0, 0.5), 1e-10));
    }

    #[test]
    fn test_graded_line_through_points_uses_plan_length() {
        let line = LineAlignment::through_points(
            "Ramp",
            Pnt::from_coords(0.0, 0.0, 0.0),
            Pnt::from_coords(30.0, 40.0, 5.0),
            100.0,
        )
        .unwrap();
        assert!((line.length() - 50.0).abs() < 1e-10);
        let end = line.point_at_station(150.0).unwrap();
        assert!(end.is_equal(&Pnt::from_coords(30.0, 40.0, 5.0), 1e-9));
    }
}
