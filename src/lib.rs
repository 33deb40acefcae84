//! featureline: stationed points on corridor featurelines
//!
//! A [`StationedPoint`] is a sampled point of a featureline (edge of
//! pavement, curb, crown...) tied to the alignment that generated the line
//! and to the corridor baseline, together with the local frame at its
//! station. Frames come from any [`Alignment`]; straight, circular-arc,
//! offset and composite alignments are provided.

pub mod precision;
pub mod config;
pub mod gp;
pub mod station;
pub mod alignment;
pub mod point;

// Re-exports for convenience
pub use alignment::{Alignment, ArcAlignment, CompositeAlignment, LineAlignment, OffsetAlignment};
pub use config::Tolerances;
pub use gp::{CoordinateSystem, Dir, Pnt, Vec3};
pub use point::StationedPoint;
pub use station::{format_station, parse_station};

/// Result type for featureline operations
pub type Result<T> = std::result::Result<T, FeaturelineError>;

#[derive(Debug, thiserror::Error)]
pub enum FeaturelineError {
    /// A station could not be resolved on an alignment.
    #[error("Station {station} is outside alignment '{alignment}' range [{start}, {end}]")]
    GeometryDomain {
        alignment: String,
        station: f64,
        start: f64,
        end: f64,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid station notation: {0}")]
    InvalidStation(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
