//! Alignment chained from consecutive segments.
//!
//! A road centerline is typically tangent, curve, tangent... Each segment
//! is an alignment in its own right, stationed so that it picks up where
//! the previous one ends.

use std::sync::Arc;

use log::debug;

use super::{resolve_station, Alignment};
use crate::config::Tolerances;
use crate::gp::CoordinateSystem;
use crate::{FeaturelineError, Result};

/// Contiguous sequence of alignment segments.
#[derive(Clone, Debug)]
pub struct CompositeAlignment {
    name: String,
    segments: Vec<Arc<dyn Alignment>>,
    tolerances: Tolerances,
}

impl CompositeAlignment {
    /// Chains `segments` using default tolerances.
    pub fn new(name: impl Into<String>, segments: Vec<Arc<dyn Alignment>>) -> Result<Self> {
        Self::new_with_tolerances(name, segments, Tolerances::default())
    }

    /// Chains `segments`, requiring each to start where the previous one
    /// ends: same station within `tolerances.station`, same point within
    /// `tolerances.linear`.
    pub fn new_with_tolerances(
        name: impl Into<String>,
        segments: Vec<Arc<dyn Alignment>>,
        tolerances: Tolerances,
    ) -> Result<Self> {
        let name = name.into();
        tolerances.validate()?;
        if segments.is_empty() {
            return Err(FeaturelineError::InvalidGeometry(format!(
                "composite alignment '{}' has no segments",
                name
            )));
        }

        for pair in segments.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let gap = next.start_station() - prev.end_station();
            if gap.abs() > tolerances.station {
                return Err(FeaturelineError::InvalidGeometry(format!(
                    "composite alignment '{}': segment '{}' starts at station {} but '{}' ends at {}",
                    name,
                    next.name(),
                    next.start_station(),
                    prev.name(),
                    prev.end_station()
                )));
            }
            let end = prev.point_at_station(prev.end_station())?;
            let start = next.point_at_station(next.start_station())?;
            let distance = end.distance(&start);
            if distance > tolerances.linear {
                return Err(FeaturelineError::InvalidGeometry(format!(
                    "composite alignment '{}': segments '{}' and '{}' are {} apart",
                    name,
                    prev.name(),
                    next.name(),
                    distance
                )));
            }
        }

        debug!(
            "composite alignment '{}' assembled from {} segments, stations [{}, {}]",
            name,
            segments.len(),
            segments[0].start_station(),
            segments[segments.len() - 1].end_station()
        );
        Ok(Self {
            name,
            segments,
            tolerances,
        })
    }

    #[inline]
    pub fn segments(&self) -> &[Arc<dyn Alignment>] {
        &self.segments
    }

    /// Stations of the joins where the direction of travel deflects by more
    /// than `tolerances.angular`, i.e. angle points without a curve.
    pub fn angle_points(&self) -> Result<Vec<f64>> {
        let mut stations = Vec::new();
        for pair in self.segments.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let arriving = prev.frame_at_station(prev.end_station())?;
            let leaving = next.frame_at_station(next.start_station())?;
            if !arriving
                .xdirection()
                .is_equal(leaving.xdirection(), self.tolerances.angular)
            {
                stations.push(next.start_station());
            }
        }
        Ok(stations)
    }

    /// True when the direction of travel is continuous at every join.
    pub fn is_tangent_continuous(&self) -> Result<bool> {
        Ok(self.angle_points()?.is_empty())
    }

    /// Segment owning `station`; at a join the earlier segment wins.
    pub fn segment_at_station(&self, station: f64) -> Result<&Arc<dyn Alignment>> {
        let station = resolve_station(self, station)?;
        let index = self
            .segments
            .partition_point(|segment| segment.end_station() < station)
            .min(self.segments.len() - 1);
        Ok(&self.segments[index])
    }
}

impl Alignment for CompositeAlignment {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_station(&self) -> f64 {
        self.segments[0].start_station()
    }

    fn end_station(&self) -> f64 {
        self.segments[self.segments.len() - 1].end_station()
    }

    fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    fn min_radius_left(&self) -> f64 {
        self.segments
            .iter()
            .map(|segment| segment.min_radius_left())
            .fold(f64::INFINITY, f64::min)
    }

    fn min_radius_right(&self) -> f64 {
        self.segments
            .iter()
            .map(|segment| segment.min_radius_right())
            .fold(f64::INFINITY, f64::min)
    }

    fn frame_at_station(&self, station: f64) -> Result<CoordinateSystem> {
        let segment = self.segment_at_station(station)?;
        let local = station.clamp(segment.start_station(), segment.end_station());
        segment.frame_at_station(local)
    }
}
