//! Parametric shapes: circle, rectangle, square, equilateral triangle.

use std::f64::consts::PI;

use super::{check_length, Shape, ShapeError, ShapeKind};

/// Circle of radius `r`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: check_length("radius", radius)?,
        })
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

/// Axis-free rectangle `width × height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            width: check_length("width", width)?,
            height: check_length("height", height)?,
        })
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
    fn area(&self) -> f64 {
        self.width * self.height
    }
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            side: check_length("side", side)?,
        })
    }
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }
    fn area(&self) -> f64 {
        self.side * self.side
    }
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }
}

/// Equilateral triangle with edge length `side`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    side: f64,
}

impl Triangle {
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            side: check_length("side", side)?,
        })
    }
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Triangle {
    fn perimeter(&self) -> f64 {
        3.0 * self.side
    }
    fn area(&self) -> f64 {
        // √3/4 · s²
        3f64.sqrt() / 4.0 * self.side * self.side
    }
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }
}
