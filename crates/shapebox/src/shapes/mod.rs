//! Shape capability and concrete variants.
//!
//! Purpose
//! - `Shape`: the only surface the container relies on. Perimeter and area
//!   are pure and non-negative; `kind()` names the variant so filtered
//!   removal never needs runtime type inspection.
//! - Variants validate their parameters once at construction, so the
//!   measurement methods stay infallible.
//!
//! Code cross-refs: `container::ShapeBox`, `rand::draw_shape`

mod polygon;
mod types;

use std::fmt;
use std::str::FromStr;

pub use polygon::Polygon;
pub use types::{Circle, Rectangle, Square, Triangle};

/// A measurable planar shape.
pub trait Shape: fmt::Debug {
    /// Length of the boundary. Never negative.
    fn perimeter(&self) -> f64;
    /// Enclosed area. Never negative.
    fn area(&self) -> f64;
    /// Variant tag used for filtering.
    fn kind(&self) -> ShapeKind;

    #[inline]
    fn is_kind(&self, kind: ShapeKind) -> bool {
        self.kind() == kind
    }
}

/// Closed set of known shape variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
    Triangle,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Polygon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| ShapeError::UnknownKind { name: s.to_string() })
    }
}

/// Errors raised while building shapes or shape samplers.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    InvalidParams { reason: String },
    UnknownKind { name: String },
}

impl ShapeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid shape params: {reason}"),
            Self::UnknownKind { name } => write!(f, "unknown shape kind: {name:?}"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Shared check for linear parameters (radius, side, width, ...).
pub(crate) fn check_length(name: &str, value: f64) -> Result<f64, ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::invalid(format!("{name} must be finite")));
    }
    if value < 0.0 {
        return Err(ShapeError::invalid(format!("{name} must be >= 0")));
    }
    Ok(value)
}
