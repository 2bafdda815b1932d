//! JSON snapshot of a `ShapeBox`.

use serde::Serialize;
use shapebox::ShapeBox;

#[derive(Debug, Serialize)]
pub struct ShapeRow {
    pub index: usize,
    pub kind: String,
    pub perimeter: f64,
    pub area: f64,
}

#[derive(Debug, Serialize)]
pub struct BoxReport {
    pub capacity: usize,
    pub len: usize,
    pub sum_perimeter: f64,
    pub sum_area: f64,
    pub shapes: Vec<ShapeRow>,
}

impl BoxReport {
    pub fn of(bx: &ShapeBox) -> Self {
        let shapes = bx
            .iter()
            .enumerate()
            .map(|(index, s)| ShapeRow {
                index,
                kind: s.kind().to_string(),
                perimeter: s.perimeter(),
                area: s.area(),
            })
            .collect();
        Self {
            capacity: bx.capacity(),
            len: bx.len(),
            sum_perimeter: bx.sum_perimeter(),
            sum_area: bx.sum_area(),
            shapes,
        }
    }
}
