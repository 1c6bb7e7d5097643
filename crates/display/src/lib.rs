//! Orientation-Aware Dimension Resolver: screen extents that stay "portrait
//! is tall" no matter how the device is held.
//!
//! # Invariants
//! - Native and logical extents are never mixed in one computation.
//! - Every orientation maps to exactly one remap rule; there is no implicit
//!   fallback extent.
//!
//! The platform's orientation and screen services are injected as
//! [`OrientationSource`] and [`ScreenBounds`], so tests and tools can run
//! against a [`FixedDisplay`] instead of a real screen.

mod resolver;
mod service;

pub use resolver::{DimensionResolver, Remap, ResolveError, aspect_ratio, resolve_extent};
pub use service::{FixedDisplay, OrientationSource, ScreenBounds};

pub fn crate_info() -> &'static str {
    "arspace-display v0.1.0"
}
