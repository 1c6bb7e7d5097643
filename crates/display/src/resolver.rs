use arspace_common::{Orientation, ScreenExtent, Units, UnrecognizedOrientation};

use crate::service::{OrientationSource, ScreenBounds};

/// Errors from screen extent resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid screen extent {width}x{height}: aspect ratio undefined")]
    InvalidExtent { width: f32, height: f32 },
    #[error("unhandled orientation code {0}")]
    UnhandledOrientation(i32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<UnrecognizedOrientation> for ResolveError {
    fn from(err: UnrecognizedOrientation) -> Self {
        ResolveError::UnhandledOrientation(err.0)
    }
}

/// How a candidate extent is reshaped for one orientation.
///
/// Native and logical modes disagree on landscape, so this is not a plain
/// "swap on landscape" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remap {
    /// Keep the candidate.
    AsIs,
    /// Swap if wider than tall.
    ForcePortrait,
    /// Swap unconditionally.
    Swap,
    /// Swap if taller than wide.
    ForceLandscape,
}

impl Remap {
    /// The remap table.
    pub fn for_orientation(orientation: Orientation, units: Units) -> Self {
        match (orientation, units) {
            (Orientation::FaceUp | Orientation::FaceDown, _) => Remap::AsIs,
            // Unknown is treated as portrait, taken as reported.
            (Orientation::Unknown, _) => Remap::AsIs,
            (Orientation::Portrait | Orientation::PortraitUpsideDown, _) => Remap::ForcePortrait,
            (Orientation::LandscapeLeft | Orientation::LandscapeRight, Units::Native) => Remap::Swap,
            (Orientation::LandscapeLeft | Orientation::LandscapeRight, Units::Logical) => {
                Remap::ForceLandscape
            }
        }
    }

    pub fn apply(self, candidate: ScreenExtent) -> ScreenExtent {
        match self {
            Remap::AsIs => candidate,
            Remap::Swap => candidate.swapped(),
            Remap::ForcePortrait if !candidate.is_portrait() => candidate.swapped(),
            Remap::ForceLandscape if !candidate.is_landscape() => candidate.swapped(),
            Remap::ForcePortrait | Remap::ForceLandscape => candidate,
        }
    }
}

/// Candidate width/height from raw bounds. Logical bounds come back with
/// width and height exchanged; native bounds are taken as-is.
fn candidate_extent(raw: ScreenExtent, units: Units) -> ScreenExtent {
    match units {
        Units::Native => raw,
        Units::Logical => raw.swapped(),
    }
}

/// Oriented extent from raw bounds, without touching any service.
pub fn resolve_extent(raw: ScreenExtent, orientation: Orientation, units: Units) -> ScreenExtent {
    let remap = Remap::for_orientation(orientation, units);
    let extent = remap.apply(candidate_extent(raw, units));
    tracing::debug!(
        %orientation,
        %units,
        ?remap,
        width = extent.width,
        height = extent.height,
        "resolved screen extent"
    );
    extent
}

/// `width / height`, refusing extents whose ratio would be negative,
/// infinite or NaN.
pub fn aspect_ratio(extent: ScreenExtent) -> Result<f32, ResolveError> {
    let ScreenExtent { width, height } = extent;
    let ratio = width / height;
    if height <= 0.0 || width < 0.0 || !ratio.is_finite() {
        tracing::warn!(width, height, "screen extent has no defined aspect ratio");
        return Err(ResolveError::InvalidExtent { width, height });
    }
    Ok(ratio)
}

/// Resolves screen extents from injected orientation and bounds services.
#[derive(Debug, Clone)]
pub struct DimensionResolver<O, S> {
    orientation: O,
    screen: S,
}

impl<O: OrientationSource, S: ScreenBounds> DimensionResolver<O, S> {
    pub fn new(orientation: O, screen: S) -> Self {
        Self {
            orientation,
            screen,
        }
    }

    /// Screen extent for the current orientation, in the given units.
    pub fn resolve(&self, units: Units) -> ScreenExtent {
        let raw = self.screen.bounds(units);
        let orientation = self.orientation.current_orientation();
        tracing::trace!(%units, ?raw, %orientation, "queried display services");
        resolve_extent(raw, orientation, units)
    }

    /// Like [`resolve`](Self::resolve), for a platform orientation code
    /// that has not been mapped onto [`Orientation`] yet.
    pub fn resolve_raw(&self, code: i32, units: Units) -> Result<ScreenExtent, ResolveError> {
        let orientation = Orientation::try_from(code).inspect_err(|_| {
            tracing::warn!(code, "orientation code outside the remap table");
        })?;
        Ok(resolve_extent(self.screen.bounds(units), orientation, units))
    }

    pub fn aspect_ratio(&self, units: Units) -> Result<f32, ResolveError> {
        aspect_ratio(self.resolve(units))
    }

    /// Aspect ratio in pixels.
    pub fn native_aspect_ratio(&self) -> Result<f32, ResolveError> {
        self.aspect_ratio(Units::Native)
    }

    /// Aspect ratio in points.
    pub fn logical_aspect_ratio(&self) -> Result<f32, ResolveError> {
        self.aspect_ratio(Units::Logical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::FixedDisplay;
    use std::cell::RefCell;

    const RAW: ScreenExtent = ScreenExtent::new(800.0, 1200.0);
    const TALL: ScreenExtent = ScreenExtent::new(800.0, 1200.0);
    const WIDE: ScreenExtent = ScreenExtent::new(1200.0, 800.0);

    fn display(orientation: Orientation) -> FixedDisplay {
        FixedDisplay::new(RAW, RAW, orientation)
    }

    fn check(orientation: Orientation, units: Units, expected: ScreenExtent) {
        let resolver = DimensionResolver::new(display(orientation), display(orientation));
        assert_eq!(
            resolver.resolve(units),
            expected,
            "orientation={orientation} units={units}"
        );
    }

    #[test]
    fn face_up_keeps_candidate() {
        check(Orientation::FaceUp, Units::Native, TALL);
        check(Orientation::FaceUp, Units::Logical, WIDE);
    }

    #[test]
    fn face_down_keeps_candidate() {
        check(Orientation::FaceDown, Units::Native, TALL);
        check(Orientation::FaceDown, Units::Logical, WIDE);
    }

    #[test]
    fn unknown_keeps_candidate() {
        check(Orientation::Unknown, Units::Native, TALL);
        check(Orientation::Unknown, Units::Logical, WIDE);
    }

    #[test]
    fn portrait_forces_tall() {
        check(Orientation::Portrait, Units::Native, TALL);
        check(Orientation::Portrait, Units::Logical, TALL);
    }

    #[test]
    fn portrait_upside_down_forces_tall() {
        check(Orientation::PortraitUpsideDown, Units::Native, TALL);
        check(Orientation::PortraitUpsideDown, Units::Logical, TALL);
    }

    #[test]
    fn landscape_left() {
        check(Orientation::LandscapeLeft, Units::Native, WIDE);
        check(Orientation::LandscapeLeft, Units::Logical, WIDE);
    }

    #[test]
    fn landscape_right() {
        check(Orientation::LandscapeRight, Units::Native, WIDE);
        check(Orientation::LandscapeRight, Units::Logical, WIDE);
    }

    #[test]
    fn native_landscape_swaps_unconditionally() {
        // Already wide raw bounds still get swapped in native mode.
        let extent = resolve_extent(WIDE, Orientation::LandscapeLeft, Units::Native);
        assert_eq!(extent, TALL);
        // Logical mode only reshapes.
        let extent = resolve_extent(TALL, Orientation::LandscapeRight, Units::Logical);
        assert_eq!(extent, WIDE);
        let extent = resolve_extent(WIDE, Orientation::LandscapeRight, Units::Logical);
        assert_eq!(extent, WIDE);
    }

    #[test]
    fn remap_table_rules() {
        use Orientation::*;
        for units in Units::ALL {
            assert_eq!(Remap::for_orientation(FaceUp, units), Remap::AsIs);
            assert_eq!(Remap::for_orientation(FaceDown, units), Remap::AsIs);
            assert_eq!(Remap::for_orientation(Unknown, units), Remap::AsIs);
            assert_eq!(Remap::for_orientation(Portrait, units), Remap::ForcePortrait);
            assert_eq!(
                Remap::for_orientation(PortraitUpsideDown, units),
                Remap::ForcePortrait
            );
        }
        assert_eq!(Remap::for_orientation(LandscapeLeft, Units::Native), Remap::Swap);
        assert_eq!(
            Remap::for_orientation(LandscapeLeft, Units::Logical),
            Remap::ForceLandscape
        );
    }

    #[test]
    fn square_extent_is_stable() {
        let square = ScreenExtent::new(500.0, 500.0);
        for orientation in Orientation::ALL {
            for units in Units::ALL {
                assert_eq!(resolve_extent(square, orientation, units), square);
            }
        }
    }

    #[test]
    fn raw_code_resolves_like_enum() {
        let d = display(Orientation::Unknown);
        let resolver = DimensionResolver::new(&d, &d);
        let extent = resolver
            .resolve_raw(Orientation::LandscapeLeft.raw(), Units::Native)
            .unwrap();
        assert_eq!(extent, WIDE);
    }

    #[test]
    fn unhandled_raw_code_is_an_error() {
        let d = display(Orientation::Unknown);
        let resolver = DimensionResolver::new(&d, &d);
        let err = resolver.resolve_raw(42, Units::Logical).unwrap_err();
        assert!(matches!(err, ResolveError::UnhandledOrientation(42)));
    }

    #[test]
    fn aspect_ratio_is_finite_for_positive_bounds() {
        for orientation in Orientation::ALL {
            let d = display(orientation);
            let resolver = DimensionResolver::new(&d, &d);
            for units in Units::ALL {
                let ratio = resolver.aspect_ratio(units).unwrap();
                assert!(ratio.is_finite() && ratio > 0.0);
            }
        }
    }

    #[test]
    fn aspect_ratio_wrappers() {
        let d = display(Orientation::Portrait);
        let resolver = DimensionResolver::new(&d, &d);
        assert_eq!(resolver.native_aspect_ratio().unwrap(), 800.0 / 1200.0);
        assert_eq!(resolver.logical_aspect_ratio().unwrap(), 800.0 / 1200.0);

        let d = d.with_orientation(Orientation::LandscapeLeft);
        let resolver = DimensionResolver::new(&d, &d);
        assert_eq!(resolver.native_aspect_ratio().unwrap(), 1.5);
    }

    #[test]
    fn zero_height_is_invalid_extent() {
        // Native landscape swaps, so a zero raw width becomes a zero height.
        let d = FixedDisplay::new(
            ScreenExtent::new(0.0, 1200.0),
            RAW,
            Orientation::LandscapeLeft,
        );
        let resolver = DimensionResolver::new(&d, &d);
        let err = resolver.native_aspect_ratio().unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidExtent { width, height } if width == 1200.0 && height == 0.0
        ));
    }

    #[test]
    fn degenerate_extents_are_rejected() {
        for extent in [
            ScreenExtent::new(0.0, 0.0),
            ScreenExtent::new(10.0, -5.0),
            ScreenExtent::new(10.0, f32::NAN),
            ScreenExtent::new(f32::INFINITY, 10.0),
            ScreenExtent::new(-10.0, 5.0),
        ] {
            assert!(matches!(
                aspect_ratio(extent),
                Err(ResolveError::InvalidExtent { .. })
            ));
        }
    }

    #[test]
    fn negative_width_is_invalid_extent() {
        let err = aspect_ratio(ScreenExtent::new(-10.0, 5.0)).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidExtent { width, height } if width == -10.0 && height == 5.0
        ));
        // Zero width is a degenerate but defined ratio.
        assert_eq!(aspect_ratio(ScreenExtent::new(0.0, 5.0)).unwrap(), 0.0);
    }

    /// Records which units the resolver asked for.
    struct RecordingScreen {
        asked: RefCell<Vec<Units>>,
    }

    impl ScreenBounds for RecordingScreen {
        fn bounds(&self, units: Units) -> ScreenExtent {
            self.asked.borrow_mut().push(units);
            RAW
        }
    }

    #[test]
    fn bounds_queried_once_in_requested_units() {
        let screen = RecordingScreen {
            asked: RefCell::new(Vec::new()),
        };
        let orientation = display(Orientation::FaceUp);
        let resolver = DimensionResolver::new(&orientation, &screen);

        let _ = resolver.resolve(Units::Logical);
        let _ = resolver.resolve(Units::Native);

        assert_eq!(*screen.asked.borrow(), vec![Units::Logical, Units::Native]);
    }
}
