//! Precision constants for geometric comparisons.
//!
//! Defaults for [`Tolerances`](crate::config::Tolerances); code that takes a
//! configurable tolerance should read it from there instead.

/// Angular tolerance for checking equality of directions (radians).
/// Value: 1.0e-12
pub const ANGULAR: f64 = 1.0e-12;

/// Confusion tolerance for checking coincidence of two points in real space.
/// Two points are coincident if their distance < CONFUSION.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Linear tolerance for joining alignment segments end to end.
/// Value: CONFUSION * 10 = 1.0e-6
pub const LINEAR: f64 = CONFUSION * 10.0;

/// Slack allowed past either end of an alignment's station range.
/// Absorbs rounding in stations computed by callers.
/// Value: 1.0e-6
pub const STATION: f64 = 1.0e-6;

/// Length of one full station in civil notation (`12+50` = 1250.0).
pub const STATION_LENGTH: f64 = 100.0;
