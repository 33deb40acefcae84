//! Parallel offset alignment.

use std::sync::Arc;

use super::{ensure_finite, Alignment};
use crate::config::Tolerances;
use crate::gp::{CoordinateSystem, Vec3};
use crate::{FeaturelineError, Result};

/// A curve running parallel to `base` at a constant lateral `offset`
/// (positive to the right of travel).
///
/// Offset alignments are stationed like their base: station `s` on the
/// offset sits abreast of station `s` on the base, whatever the curvature.
/// The offset must stay short of the centre of every curve it lies inside,
/// where the parallel curve would collapse or run backwards.
#[derive(Clone, Debug)]
pub struct OffsetAlignment {
    name: String,
    base: Arc<dyn Alignment>,
    offset: f64,
    tolerances: Tolerances,
}

impl OffsetAlignment {
    pub fn new(name: impl Into<String>, base: Arc<dyn Alignment>, offset: f64) -> Result<Self> {
        let name = name.into();
        ensure_finite("offset", offset)?;
        // inside radius: left turns for a left (negative) offset, right turns otherwise
        let (side, inside_radius) = if offset < 0.0 {
            ("left", base.min_radius_left())
        } else {
            ("right", base.min_radius_right())
        };
        if offset.abs() >= inside_radius {
            return Err(FeaturelineError::InvalidGeometry(format!(
                "offset alignment '{}': {} {} of '{}' reaches a curve of radius {}",
                name,
                offset.abs(),
                side,
                base.name(),
                inside_radius
            )));
        }
        let tolerances = *base.tolerances();
        Ok(Self {
            name,
            base,
            offset,
            tolerances,
        })
    }

    /// Replaces the base's tolerances; fails if they do not validate.
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Result<Self> {
        tolerances.validate()?;
        self.tolerances = tolerances;
        Ok(self)
    }

    /// The alignment this one is offset from.
    #[inline]
    pub fn base(&self) -> &Arc<dyn Alignment> {
        &self.base
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Alignment for OffsetAlignment {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_station(&self) -> f64 {
        self.base.start_station()
    }

    fn end_station(&self) -> f64 {
        self.base.end_station()
    }

    fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    fn min_radius_left(&self) -> f64 {
        self.base.min_radius_left() + self.offset
    }

    fn min_radius_right(&self) -> f64 {
        self.base.min_radius_right() - self.offset
    }

    fn frame_at_station(&self, station: f64) -> Result<CoordinateSystem> {
        let station = super::resolve_station(self, station)?;
        let frame = self.base.frame_at_station(station)?;
        let shift = Vec3::along(frame.ydirection(), -self.offset);
        Ok(frame.translated(&shift))
    }
}
