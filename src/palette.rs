#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Empty,
    Low,
    Medium,
    High,
    Max,
}

impl Intensity {
    pub fn from_count(count: u64) -> Self {
        match count {
            0 => Self::Empty,
            1..=4 => Self::Low,
            5..=9 => Self::Medium,
            10..=14 => Self::High,
            _ => Self::Max,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Empty => "#ebedf0",
            Self::Low => "#c6e48b",
            Self::Medium => "#7bc96f",
            Self::High => "#239a3b",
            Self::Max => "#196127",
        }
    }
}

pub fn color_for(count: u64) -> &'static str {
    Intensity::from_count(count).color()
}
