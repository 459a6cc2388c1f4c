use crate::models::DataPoint;
use serde::{Deserialize, Serialize};

pub const TOOLTIP_OFFSET: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub client_x: f64,
    pub client_y: f64,
}

impl Pointer {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            client_x: x,
            client_y: y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl Tooltip {
    pub fn hidden() -> Self {
        Self::default()
    }
}

// Last match in collection order wins.
pub fn hit_test(points: &[DataPoint], x: f64, y: f64) -> Option<&DataPoint> {
    points
        .iter()
        .filter(|point| point.cell_rect().contains(x, y))
        .last()
}

pub fn tooltip_for(points: &[DataPoint], pointer: Pointer) -> Tooltip {
    match hit_test(points, pointer.x, pointer.y) {
        Some(point) => Tooltip {
            visible: true,
            text: tooltip_text(point),
            x: pointer.client_x + TOOLTIP_OFFSET,
            y: pointer.client_y + TOOLTIP_OFFSET,
        },
        None => Tooltip::hidden(),
    }
}

pub fn tooltip_text(point: &DataPoint) -> String {
    format!("Intensity count: {} on {}", point.count, point.date)
}
