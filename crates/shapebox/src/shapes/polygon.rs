//! Simple polygon given by its vertices in boundary order.
//!
//! - Perimeter: closed edge-length sum.
//! - Area: absolute shoelace value, so CW and CCW inputs agree.
//!
//! Convexity is not required; self-intersecting inputs get the shoelace value
//! of the signed regions, which is the caller's problem.

use nalgebra::Vector2;

use super::{Shape, ShapeError, ShapeKind};
use crate::cfg::VERTEX_EPS;

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2<f64>>,
}

impl Polygon {
    /// Build from ordered vertices. Consecutive duplicates (and a repeated
    /// closing vertex) are dropped; at least 3 distinct vertices must remain.
    pub fn new(vertices: Vec<Vector2<f64>>) -> Result<Self, ShapeError> {
        if vertices.iter().any(|v| !(v.x.is_finite() && v.y.is_finite())) {
            return Err(ShapeError::invalid("polygon vertices must be finite"));
        }
        let mut vs = vertices;
        vs.dedup_by(|a, b| (*a - *b).norm() < VERTEX_EPS);
        while vs.len() > 1 && (vs[0] - vs[vs.len() - 1]).norm() < VERTEX_EPS {
            vs.pop();
        }
        if vs.len() < 3 {
            return Err(ShapeError::invalid("polygon needs at least 3 distinct vertices"));
        }
        let poly = Self { vertices: vs };
        // Finite vertices can still overflow edge lengths or the shoelace sum.
        if !(poly.perimeter().is_finite() && poly.area().is_finite()) {
            return Err(ShapeError::invalid("polygon measurements overflow f64"));
        }
        Ok(poly)
    }

    /// Regular `n`-gon with circumradius `radius`, first vertex on +x.
    pub fn regular(n: usize, radius: f64) -> Result<Self, ShapeError> {
        super::check_length("radius", radius)?;
        if n < 3 {
            return Err(ShapeError::invalid("regular polygon needs n >= 3"));
        }
        let step = std::f64::consts::TAU / n as f64;
        let vs = (0..n)
            .map(|k| {
                let th = step * k as f64;
                Vector2::new(radius * th.cos(), radius * th.sin())
            })
            .collect();
        Self::new(vs)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

impl Shape for Polygon {
    fn perimeter(&self) -> f64 {
        self.edges().map(|(p, q)| (q - p).norm()).sum()
    }
    fn area(&self) -> f64 {
        let twice: f64 = self.edges().map(|(p, q)| cross(p, q)).sum();
        0.5 * twice.abs()
    }
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }
}
