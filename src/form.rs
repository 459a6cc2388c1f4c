use crate::errors::AppError;
use crate::models::{parse_date, DataPoint, PointRequest};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingDate,
    MissingCount,
    InvalidDate(String),
    InvalidCount(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDate => write!(f, "date is required"),
            Self::MissingCount => write!(f, "count is required"),
            Self::InvalidDate(raw) => write!(f, "date must be a calendar date (YYYY-MM-DD), got '{raw}'"),
            Self::InvalidCount(raw) => write!(f, "count must be a whole number of zero or more, got '{raw}'"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

impl PointForm {
    pub fn validate(&self) -> Result<DataPoint, FormError> {
        let date = self.date.trim();
        let count = self.count.trim();
        if date.is_empty() {
            return Err(FormError::MissingDate);
        }
        if count.is_empty() {
            return Err(FormError::MissingCount);
        }

        let date = parse_date(date).ok_or_else(|| FormError::InvalidDate(date.to_string()))?;
        let count = count
            .parse::<u64>()
            .map_err(|_| FormError::InvalidCount(count.to_string()))?;

        Ok(DataPoint::new(date, count))
    }
}

impl From<PointRequest> for PointForm {
    fn from(request: PointRequest) -> Self {
        Self {
            date: field_text(request.date),
            count: field_text(request.count),
        }
    }
}

fn field_text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}
