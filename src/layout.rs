use serde::{Deserialize, Serialize};

pub const SURFACE_WIDTH: f64 = 800.0;
pub const SURFACE_HEIGHT: f64 = 800.0;
pub const CELL_SIZE: f64 = 20.0;
pub const CELL_PADDING: f64 = 2.0;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const STEP: f64 = CELL_SIZE + CELL_PADDING;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Edges are inclusive on all four sides.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

pub fn cell_rect(month: usize, weekday: usize) -> Rect {
    Rect {
        x: month as f64 * STEP + CELL_SIZE,
        y: weekday as f64 * STEP + CELL_SIZE,
        width: CELL_SIZE,
        height: CELL_SIZE,
    }
}

pub fn weekday_label_origin(weekday: usize) -> (f64, f64) {
    (0.0, weekday as f64 * STEP + CELL_SIZE * 1.5)
}

pub fn month_label_origin(month: usize) -> (f64, f64) {
    (month as f64 * STEP + CELL_SIZE, 10.0)
}
