use arspace_common::{Position3, TrackingMatrix};
use glam::{Mat4, Vec3};

use crate::cast::convert_exact;

/// Reinterpret a tracking transform as a renderer matrix. No axis changes.
pub fn to_render_matrix(transform: TrackingMatrix) -> Mat4 {
    convert_exact(transform)
}

/// Reinterpret a renderer matrix as a tracking transform. No axis changes.
pub fn to_tracking_matrix(matrix: Mat4) -> TrackingMatrix {
    convert_exact(matrix)
}

/// Model matrix for the renderer from a right-handed tracking transform.
///
/// Post-multiplies by [`TrackingMatrix::Z_REFLECTION`], which negates the Z
/// basis column and leaves X, Y and translation alone. Call this once per
/// conversion: feeding its output back in undoes the flip.
pub fn model_matrix_from_tracking(transform: TrackingMatrix) -> Mat4 {
    let flipped = transform * TrackingMatrix::Z_REFLECTION;
    tracing::trace!(translation = ?flipped.translation(), "built model matrix");
    to_render_matrix(flipped)
}

/// Position of an anchor in render space.
///
/// Reads the translation row `(a, b, c)` (floats 12..15, `w_axis` in glam)
/// and returns `(b, a, c)`. The tracking subsystem reports translation
/// with X and Y in the opposite order from the renderer's world axes, so
/// the swap is intentional. Z is passed through.
pub fn anchor_position(matrix: &Mat4) -> Position3 {
    let t = matrix.w_axis;
    Vec3::new(t.y, t.x, t.z)
}

/// The three camera matrices of one tracking frame, in renderer layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub transform: Mat4,
    pub projection: Mat4,
    pub view: Mat4,
}

impl Default for CameraMatrices {
    fn default() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
        }
    }
}

impl CameraMatrices {
    /// Layout conversion only; camera matrices are not Z-flipped.
    pub fn from_tracking(
        transform: TrackingMatrix,
        projection: TrackingMatrix,
        view: TrackingMatrix,
    ) -> Self {
        Self {
            transform: to_render_matrix(transform),
            projection: to_render_matrix(projection),
            view: to_render_matrix(view),
        }
    }
}
