use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// A point in tracking space or render space. The axis meaning differs
/// between the two spaces.
pub type Position3 = Vec3;

/// 4x4 transform in the tracking subsystem's native layout.
///
/// Four columns of four floats, column-major, translation in column 3.
/// The layout is bit-identical to [`glam::Mat4`], which is what makes the
/// reinterpretation in the convert crate legal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct TrackingMatrix {
    pub columns: [[f32; 4]; 4],
}

impl TrackingMatrix {
    pub const IDENTITY: Self = Self::from_columns([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Identity with entry (2, 2) negated. Post-multiplying by this flips
    /// the Z axis: right-handed in, left-handed out.
    pub const Z_REFLECTION: Self = Self::from_columns([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, -1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const fn from_columns(columns: [[f32; 4]; 4]) -> Self {
        Self { columns }
    }

    /// Build from 16 floats in column-major order.
    pub fn from_cols_array(values: &[f32; 16]) -> Self {
        let mut columns = [[0.0; 4]; 4];
        for (i, chunk) in values.chunks_exact(4).enumerate() {
            columns[i].copy_from_slice(chunk);
        }
        Self { columns }
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (i, column) in self.columns.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(column);
        }
        out
    }

    /// Translation part (column 3, xyz).
    pub fn translation(&self) -> Vec3 {
        let [x, y, z, _] = self.columns[3];
        Vec3::new(x, y, z)
    }
}

impl Default for TrackingMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for TrackingMatrix {
    type Output = Self;

    /// Column-major product `self * rhs`, same order as the tracking
    /// subsystem's own matrix multiply.
    fn mul(self, rhs: Self) -> Self {
        let product =
            Mat4::from_cols_array_2d(&self.columns) * Mat4::from_cols_array_2d(&rhs.columns);
        Self::from_columns(product.to_cols_array_2d())
    }
}

/// Unit system of a screen extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Units {
    /// Physical pixels. Raw bounds are not orientation aware.
    Native,
    /// Platform points. Raw bounds come back pre-swapped.
    Logical,
}

impl Units {
    pub const ALL: [Units; 2] = [Units::Native, Units::Logical];

    /// Map a `use_native` flag onto a unit system.
    pub fn from_native(use_native: bool) -> Self {
        if use_native { Units::Native } else { Units::Logical }
    }

}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Native => f.write_str("native"),
            Units::Logical => f.write_str("logical"),
        }
    }
}

/// Width/height pair in a single unit system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenExtent {
    pub width: f32,
    pub height: f32,
}

impl ScreenExtent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Tall or square.
    pub fn is_portrait(&self) -> bool {
        self.width <= self.height
    }

    /// Wide or square.
    pub fn is_landscape(&self) -> bool {
        self.width >= self.height
    }
}

/// Physical device rotation as reported by the orientation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    FaceUp,
    FaceDown,
    /// The platform could not tell. Treated as portrait.
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    pub const ALL: [Orientation; 7] = [
        Orientation::FaceUp,
        Orientation::FaceDown,
        Orientation::Unknown,
        Orientation::Portrait,
        Orientation::PortraitUpsideDown,
        Orientation::LandscapeLeft,
        Orientation::LandscapeRight,
    ];

    /// Platform orientation code.
    pub fn raw(self) -> i32 {
        match self {
            Orientation::Unknown => 0,
            Orientation::Portrait => 1,
            Orientation::PortraitUpsideDown => 2,
            Orientation::LandscapeLeft => 3,
            Orientation::LandscapeRight => 4,
            Orientation::FaceUp => 5,
            Orientation::FaceDown => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::FaceUp => "face-up",
            Orientation::FaceDown => "face-down",
            Orientation::Unknown => "unknown",
            Orientation::Portrait => "portrait",
            Orientation::PortraitUpsideDown => "portrait-upside-down",
            Orientation::LandscapeLeft => "landscape-left",
            Orientation::LandscapeRight => "landscape-right",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A platform orientation code outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized orientation code {0}")]
pub struct UnrecognizedOrientation(pub i32);

impl TryFrom<i32> for Orientation {
    type Error = UnrecognizedOrientation;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.raw() == code)
            .ok_or(UnrecognizedOrientation(code))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation name: {0}")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.name() == s)
            .ok_or_else(|| ParseOrientationError(s.to_string()))
    }
}
