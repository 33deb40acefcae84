//! Horizontal circular-arc alignment.

use std::f64::consts::TAU;

use super::{ensure_finite, resolve_station, Alignment};
use crate::config::Tolerances;
use crate::gp::{CoordinateSystem, Dir, Pnt, XYZ};
use crate::{FeaturelineError, Result};

/// A circular arc in the horizontal plane through `center`.
///
/// `start_angle` locates the start point around the center (radians,
/// counter-clockwise from +X). `sweep` is the signed angle travelled:
/// positive turns left (counter-clockwise), negative turns right.
#[derive(Clone, Debug)]
pub struct ArcAlignment {
    name: String,
    center: Pnt,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    start_station: f64,
    tolerances: Tolerances,
}

impl ArcAlignment {
    pub fn new(
        name: impl Into<String>,
        center: Pnt,
        radius: f64,
        start_angle: f64,
        sweep: f64,
        start_station: f64,
    ) -> Result<Self> {
        let name = name.into();
        ensure_finite("arc radius", radius)?;
        ensure_finite("arc start angle", start_angle)?;
        ensure_finite("arc sweep", sweep)?;
        ensure_finite("start station", start_station)?;
        if !center.is_finite() {
            return Err(FeaturelineError::InvalidGeometry(format!(
                "arc alignment '{}' has a non-finite center",
                name
            )));
        }
        if radius <= 0.0 {
            return Err(FeaturelineError::InvalidGeometry(format!(
                "arc alignment '{}' must have positive radius, got {}",
                name, radius
            )));
        }
        if sweep == 0.0 || sweep.abs() > TAU {
            return Err(FeaturelineError::InvalidGeometry(format!(
                "arc alignment '{}' sweep must be non-zero and at most one turn, got {}",
                name, sweep
            )));
        }
        Ok(Self {
            name,
            center,
            radius,
            start_angle,
            sweep,
            start_station,
            tolerances: Tolerances::default(),
        })
    }

    /// Replaces the default tolerances; fails if they do not validate.
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Result<Self> {
        tolerances.validate()?;
        self.tolerances = tolerances;
        Ok(self)
    }

    #[inline]
    pub fn center(&self) -> &Pnt {
        &self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// True if the arc turns right along the direction of travel.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.sweep < 0.0
    }

    pub fn start_point(&self) -> Pnt {
        self.point_at_angle(self.start_angle)
    }

    pub fn end_point(&self) -> Pnt {
        self.point_at_angle(self.start_angle + self.sweep)
    }

    fn point_at_angle(&self, angle: f64) -> Pnt {
        let radial = XYZ::from_coords(angle.cos(), angle.sin(), 0.0);
        Pnt::from_xyz(self.center.xyz().added(&radial.multiplied(self.radius)))
    }
}

impl Alignment for ArcAlignment {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_station(&self) -> f64 {
        self.start_station
    }

    fn end_station(&self) -> f64 {
        self.start_station + self.length()
    }

    fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    fn min_radius_left(&self) -> f64 {
        if self.is_clockwise() { f64::INFINITY } else { self.radius }
    }

    fn min_radius_right(&self) -> f64 {
        if self.is_clockwise() { self.radius } else { f64::INFINITY }
    }

    fn frame_at_station(&self, station: f64) -> Result<CoordinateSystem> {
        let station = resolve_station(self, station)?;
        let angle = self.start_angle + self.sweep.signum() * (station - self.start_station) / self.radius;
        let heading = if self.is_clockwise() {
            angle - std::f64::consts::FRAC_PI_2
        } else {
            angle + std::f64::consts::FRAC_PI_2
        };
        let origin = self.point_at_angle(angle);
        CoordinateSystem::from_tangent(origin, Dir::from_heading(heading)).ok_or_else(|| {
            FeaturelineError::InvalidGeometry(format!(
                "arc alignment '{}' has no frame at station {}",
                self.name, station
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::Vec3;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn quarter_left() -> ArcAlignment {
        // Starts at (0, 0) heading +X and turns left around (0, 10)
        ArcAlignment::new("C1", Pnt::from_coords(0.0, 10.0, 0.0), 10.0, -FRAC_PI_2, FRAC_PI_2, 0.0).unwrap()
    }

    #[test]
    fn test_arc_length_and_stations() {
        let arc = quarter_left();
        assert!((arc.length() - 5.0 * PI).abs() < 1e-10);
        assert!((arc.end_station() - 5.0 * PI).abs() < 1e-10);
        assert!(arc.start_point().is_equal(&Pnt::new(), 1e-10));
        assert!(arc.end_point().is_equal(&Pnt::from_coords(10.0, 10.0, 0.0), 1e-10));
    }

    #[test]
    fn test_arc_frame_at_start_follows_heading() {
        let arc = quarter_left();
        let cs = arc.frame_at_station(0.0).unwrap();
        assert!(cs.origin().is_equal(&Pnt::new(), 1e-10));
        assert!(cs.xdirection().is_equal(&Dir::x(), 1e-9));
        // left of travel points at the center
        assert!(cs.ydirection().is_equal(&Dir::y(), 1e-9));
    }

    #[test]
    fn test_arc_frame_is_tangent_to_circle() {
        let arc = quarter_left();
        for station in [1.0, 4.0, 7.5, arc.end_station()] {
            let cs = arc.frame_at_station(station).unwrap();
            let radial = Vec3::from_points(arc.center(), cs.origin());
            assert!((radial.magnitude() - 10.0).abs() < 1e-9);
            assert!(radial.dot_dir(cs.xdirection()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_arc_clockwise() {
        // Starts at (0, 0) heading +X and turns right around (0, -10)
        let arc = ArcAlignment::new("C2", Pnt::from_coords(0.0, -10.0, 0.0), 10.0, FRAC_PI_2, -FRAC_PI_2, 100.0).unwrap();
        assert!(arc.is_clockwise());
        let cs = arc.frame_at_station(100.0).unwrap();
        assert!(cs.xdirection().is_equal(&Dir::x(), 1e-9));
        let end = arc.frame_at_station(arc.end_station()).unwrap();
        assert!(end.origin().is_equal(&Pnt::from_coords(10.0, -10.0, 0.0), 1e-9));
        assert!(end.xdirection().is_equal(&-Dir::y(), 1e-9));
    }

    #[test]
    fn test_arc_rejects_bad_geometry() {
        assert!(ArcAlignment::new("C", Pnt::new(), 0.0, 0.0, 1.0, 0.0).is_err());
        assert!(ArcAlignment::new("C", Pnt::new(), 5.0, 0.0, 0.0, 0.0).is_err());
        assert!(ArcAlignment::new("C", Pnt::new(), 5.0, 0.0, 7.0, 0.0).is_err());
        assert!(ArcAlignment::new("C", Pnt::new(), f64::NAN, 0.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_arc_turn_radius_by_side() {
        let left = quarter_left();
        assert_eq!(left.min_radius_left(), 10.0);
        assert_eq!(left.min_radius_right(), f64::INFINITY);
        let right = ArcAlignment::new("C2", Pnt::from_coords(0.0, -10.0, 0.0), 10.0, FRAC_PI_2, -FRAC_PI_2, 0.0).unwrap();
        assert_eq!(right.min_radius_left(), f64::INFINITY);
        assert_eq!(right.min_radius(), 10.0);
    }

    #[test]
    fn test_arc_rejects_invalid_tolerances() {
        let tolerances = Tolerances { linear: f64::NAN, ..Tolerances::default() };
        assert!(quarter_left().with_tolerances(tolerances).is_err());
    }

    #[test]
    fn test_arc_out_of_domain() {
        let arc = quarter_left();
        assert!(matches!(
            arc.frame_at_station(-1.0),
            Err(FeaturelineError::GeometryDomain { .. })
        ));
    }
}
