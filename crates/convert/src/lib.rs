//! Matrix/Vector Adapter: moves transforms from the tracking subsystem's
//! representation into the renderer's.
//!
//! # Invariants
//! - Reinterpretation only happens between types of equal byte size.
//! - The Z reflection is applied exactly once per tracking-to-render
//!   conversion. Applying it twice silently restores the right-handed input.

mod cast;
mod space;

pub use cast::{ConvertError, convert, convert_exact};
pub use space::{
    CameraMatrices, anchor_position, model_matrix_from_tracking, to_render_matrix,
    to_tracking_matrix,
};

pub fn crate_info() -> &'static str {
    "arspace-convert v0.1.0"
}
