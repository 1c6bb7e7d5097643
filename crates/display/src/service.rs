use std::path::Path;

use arspace_common::{Orientation, ScreenExtent, Units};
use serde::{Deserialize, Serialize};

use crate::resolver::ResolveError;

/// Reports the current physical device rotation.
///
/// A platform that cannot tell must report [`Orientation::Unknown`] rather
/// than fail.
pub trait OrientationSource {
    fn current_orientation(&self) -> Orientation;
}

/// Reports raw screen bounds in the requested unit system.
///
/// Raw means orientation-un-normalized: whatever the platform hands back.
pub trait ScreenBounds {
    fn bounds(&self, units: Units) -> ScreenExtent;
}

impl<T: OrientationSource + ?Sized> OrientationSource for &T {
    fn current_orientation(&self) -> Orientation {
        (**self).current_orientation()
    }
}

impl<T: ScreenBounds + ?Sized> ScreenBounds for &T {
    fn bounds(&self, units: Units) -> ScreenExtent {
        (**self).bounds(units)
    }
}

/// A display with fixed bounds and orientation.
///
/// Implements both services. Loadable from a JSON display profile; missing
/// fields fall back to [`FixedDisplay::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedDisplay {
    /// Raw native-pixel bounds.
    pub native: ScreenExtent,
    /// Raw logical-point bounds, as reported (pre-swapped).
    pub logical: ScreenExtent,
    pub orientation: Orientation,
}

impl Default for FixedDisplay {
    fn default() -> Self {
        Self {
            native: ScreenExtent::new(1170.0, 2532.0),
            logical: ScreenExtent::new(390.0, 844.0),
            orientation: Orientation::Portrait,
        }
    }
}

impl FixedDisplay {
    pub fn new(native: ScreenExtent, logical: ScreenExtent, orientation: Orientation) -> Self {
        Self {
            native,
            logical,
            orientation,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ResolveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a display profile from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let profile = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?profile, "loaded display profile");
        Ok(profile)
    }
}

impl OrientationSource for FixedDisplay {
    fn current_orientation(&self) -> Orientation {
        self.orientation
    }
}

impl ScreenBounds for FixedDisplay {
    fn bounds(&self, units: Units) -> ScreenExtent {
        match units {
            Units::Native => self.native,
            Units::Logical => self.logical,
        }
    }
}
