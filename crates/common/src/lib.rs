//! Shared value types for the tracking-to-render adaptation layer.
//!
//! # Invariants
//! - Every matrix type here is exactly 16 packed `f32`, column-major.
//! - Native and logical extents are never mixed in one computation.

pub mod types;

pub use types::{
    Orientation, ParseOrientationError, Position3, ScreenExtent, TrackingMatrix, Units,
    UnrecognizedOrientation,
};

pub fn crate_info() -> &'static str {
    "arspace-common v0.1.0"
}
