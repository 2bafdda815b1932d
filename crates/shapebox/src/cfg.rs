//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; no runtime configuration. Tests compare sums against
//!   these instead of inventing their own epsilons.

/// Absolute tolerance for comparing perimeter/area sums.
pub const SUM_EPS: f64 = 1e-9;
/// Two polygon vertices closer than this count as the same point.
pub(crate) const VERTEX_EPS: f64 = 1e-12;
/// Upper bound for sampled sizes; keeps polygon shoelace sums finite.
pub const SAMPLE_SIZE_MAX: f64 = 1e100;
