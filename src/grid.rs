use crate::models::DataPoint;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

pub const MONTHS: usize = 12;
pub const WEEKDAYS: usize = 7;

pub const REFERENCE_YEAR: i32 = 2023;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub month: usize,
    pub weekday: usize,
    pub point: DataPoint,
    pub synthesized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    months: [[GridCell; WEEKDAYS]; MONTHS],
}

impl Grid {
    pub fn months(&self) -> &[[GridCell; WEEKDAYS]; MONTHS] {
        &self.months
    }

    pub fn cell(&self, month: usize, weekday: usize) -> Option<&GridCell> {
        self.months.get(month)?.get(weekday)
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.months.iter().flatten()
    }
}

// Last point wins when several share a (month, weekday) slot.
pub fn build_grid(points: &[DataPoint]) -> Grid {
    let mut slots: [[Option<DataPoint>; WEEKDAYS]; MONTHS] = [[None; WEEKDAYS]; MONTHS];
    for point in points {
        slots[point.month_index()][point.weekday_index()] = Some(*point);
    }

    let months = std::array::from_fn(|month| {
        std::array::from_fn(|weekday| match slots[month][weekday] {
            Some(point) => GridCell {
                month,
                weekday,
                point,
                synthesized: false,
            },
            None => {
                let date = placeholder_date(month as u32, weekday as u32);
                debug_assert!(date.is_some(), "no placeholder for month {month}");
                GridCell {
                    month,
                    weekday,
                    point: DataPoint::new(date.unwrap_or(NaiveDate::MIN), 0),
                    synthesized: true,
                }
            }
        })
    });

    Grid { months }
}

// First day on or after the 1st of `month0` falling on `weekday`.
pub fn placeholder_date(month0: u32, weekday: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(REFERENCE_YEAR, month0 + 1, 1)?;
    let offset = (i64::from(weekday) - i64::from(first.weekday().num_days_from_sunday())).rem_euclid(7);
    Some(first + Duration::days(offset))
}
