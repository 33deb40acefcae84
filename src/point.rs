//! Stationed featureline points.
//!
//! A featureline (edge of pavement, curb, crown...) is generated along a
//! source alignment, which is either the corridor baseline itself or an
//! alignment offset from it. Each sampled point records where it sits on
//! both curves and caches the source alignment's frame at its baseline
//! station.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::alignment::Alignment;
use crate::gp::{CoordinateSystem, Pnt};
use crate::station::format_station;
use crate::{FeaturelineError, Result};

/// An immutable labeled point on a featureline.
///
/// Alignments are shared, not owned. The frame is computed once, so it
/// reflects the source alignment as it was at construction.
#[derive(Clone, Debug)]
pub struct StationedPoint {
    basis_alignment: Arc<dyn Alignment>,
    source_alignment: Arc<dyn Alignment>,
    code: String,
    position: Pnt,
    station: f64,
    station_on_baseline: f64,
    frame: CoordinateSystem,
}

impl StationedPoint {
    /// Creates a stationed point.
    ///
    /// # Arguments
    /// * `basis_alignment` - The corridor baseline
    /// * `source_alignment` - The alignment the featureline was generated from
    ///   (the baseline or an offset alignment)
    /// * `position` - The point in model coordinates
    /// * `code` - Classification code, e.g. `"EOP"` or `"Crown"`
    /// * `station` - Station of the point on `source_alignment`
    /// * `station_on_baseline` - Station of the point on `basis_alignment`
    ///
    /// # Errors
    /// [`FeaturelineError::InvalidArgument`] for a blank code or non-finite
    /// position or stations. Any error from
    /// `source_alignment.frame_at_station(station_on_baseline)` is returned
    /// unchanged, typically [`FeaturelineError::GeometryDomain`].
    pub fn new(
        basis_alignment: Arc<dyn Alignment>,
        source_alignment: Arc<dyn Alignment>,
        position: Pnt,
        code: impl Into<String>,
        station: f64,
        station_on_baseline: f64,
    ) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(FeaturelineError::InvalidArgument(
                "featureline point code must not be empty".to_string(),
            ));
        }
        if !position.is_finite() {
            return Err(FeaturelineError::InvalidArgument(format!(
                "position of '{}' point must be finite, got {:?}",
                code,
                position.coords()
            )));
        }
        if !station.is_finite() || !station_on_baseline.is_finite() {
            return Err(FeaturelineError::InvalidArgument(format!(
                "stations of '{}' point must be finite, got {} and {} on baseline",
                code, station, station_on_baseline
            )));
        }

        let frame = source_alignment.frame_at_station(station_on_baseline)?;
        debug!(
            "'{}' point at station {} on '{}' ({} on baseline '{}')",
            code,
            station,
            source_alignment.name(),
            station_on_baseline,
            basis_alignment.name()
        );

        Ok(Self {
            basis_alignment,
            source_alignment,
            code,
            position,
            station,
            station_on_baseline,
            frame,
        })
    }

    /// The corridor baseline.
    #[inline]
    pub fn basis_alignment(&self) -> &Arc<dyn Alignment> {
        &self.basis_alignment
    }

    /// The alignment the featureline was generated from.
    #[inline]
    pub fn source_alignment(&self) -> &Arc<dyn Alignment> {
        &self.source_alignment
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Position in model coordinates.
    #[inline]
    pub fn position(&self) -> &Pnt {
        &self.position
    }

    /// Station on the source alignment.
    #[inline]
    pub fn station(&self) -> f64 {
        self.station
    }

    #[inline]
    pub fn station_on_baseline(&self) -> f64 {
        self.station_on_baseline
    }

    /// Frame of the source alignment at the baseline station.
    #[inline]
    pub fn frame(&self) -> &CoordinateSystem {
        &self.frame
    }

    /// True when the featureline was generated from the baseline itself.
    pub fn is_on_baseline(&self) -> bool {
        Arc::ptr_eq(&self.basis_alignment, &self.source_alignment)
    }

    /// Position expressed in [`frame`](Self::frame) coordinates:
    /// x along travel, y to the left, z up.
    pub fn local_position(&self) -> Pnt {
        self.frame.to_local(&self.position)
    }

    /// Signed lateral distance from the frame origin, positive to the right.
    pub fn offset(&self) -> f64 {
        -self.local_position().y()
    }

    /// Distance above the frame origin along the frame's Z axis.
    pub fn elevation_delta(&self) -> f64 {
        self.local_position().z()
    }
}

impl fmt::Display for StationedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.code, format_station(self.station, 2))
    }
}
