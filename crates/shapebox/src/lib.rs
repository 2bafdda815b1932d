//! Fixed-capacity box of polymorphic shapes.
//!
//! Layout
//! - `shapes`: the `Shape` capability plus the concrete variants
//!   (`Circle`, `Rectangle`, `Square`, `Triangle`, `Polygon`).
//! - `container`: `ShapeBox`, an index-addressable sequence of owned shapes
//!   bounded by a fixed capacity.
//! - `rand`: seeded, replayable shape sampling for demos and benches.
//!
//! All operations are synchronous and take `&mut self` for mutation; callers
//! that share a box across threads bring their own lock.

pub mod cfg;
pub mod container;
pub mod rand;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use container::{BoxError, ShapeBox};
pub use shapes::{Circle, Polygon, Rectangle, Shape, ShapeError, ShapeKind, Square, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::container::{BoxError, ShapeBox};
    pub use crate::rand::{draw_shape, fill_box, ReplayToken, SampleCfg};
    pub use crate::shapes::{
        Circle, Polygon, Rectangle, Shape, ShapeError, ShapeKind, Square, Triangle,
    };
    pub use nalgebra::Vector2 as Vec2;
}
