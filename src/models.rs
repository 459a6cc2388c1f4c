use crate::layout::{self, Rect};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub count: u64,
}

impl DataPoint {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }

    pub fn month_index(&self) -> usize {
        self.date.month0() as usize
    }

    pub fn weekday_index(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }

    pub fn cell_rect(&self) -> Rect {
        layout::cell_rect(self.month_index(), self.weekday_index())
    }
}

// `YYYY-MM-DD` or RFC 3339; timestamps keep the date at their own offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {raw}")))
}

// Loosely typed; `PointForm::validate` does the checking.
#[derive(Debug, Default, Deserialize)]
pub struct PointRequest {
    #[serde(default)]
    pub date: Option<serde_json::Value>,
    #[serde(default)]
    pub count: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointerQuery {
    pub x: f64,
    pub y: f64,
    pub client_x: Option<f64>,
    pub client_y: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CellQuery {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CellView {
    pub weekday: usize,
    pub label: String,
    pub date: String,
    pub count: u64,
    pub color: String,
    pub synthesized: bool,
    pub rect: Rect,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthView {
    pub month: usize,
    pub label: String,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GridResponse {
    pub width: f64,
    pub height: f64,
    pub months: Vec<MonthView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_point_indices_follow_calendar_fields() {
        let point = DataPoint::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 7);
        assert_eq!(point.month_index(), 2);
        assert_eq!(point.weekday_index(), 5);
    }

    #[test]
    fn parse_date_accepts_plain_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date("2024-03-15"), Some(expected));
        assert_eq!(parse_date(" 2024-03-15 "), Some(expected));
        assert_eq!(parse_date("2024-03-15T23:30:00+02:00"), Some(expected));
        assert_eq!(parse_date("15/03/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn data_point_json_uses_iso_dates() {
        let points: Vec<DataPoint> = serde_json::from_str(
            r#"[{"date":"2024-01-02","count":3},{"date":"2024-02-10T00:00:00Z","count":0}]"#,
        )
        .unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());

        let encoded = serde_json::to_value(points[0]).unwrap();
        assert_eq!(encoded, serde_json::json!({ "date": "2024-01-02", "count": 3 }));
    }

    #[test]
    fn data_point_json_rejects_bad_dates_and_negative_counts() {
        assert!(serde_json::from_str::<DataPoint>(r#"{"date":"soon","count":1}"#).is_err());
        assert!(serde_json::from_str::<DataPoint>(r#"{"date":"2024-01-02","count":-1}"#).is_err());
    }
}
