use serde::{Deserialize, Serialize};

/// A point in data space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An authored line. Points stay in the order the author wrote them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSpec {
    pub id: String,
    #[serde(default)]
    pub color_token: String,
    #[serde(default)]
    pub points: Vec<DataPoint>,
}

impl LineSpec {
    pub fn new(id: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            id: id.into(),
            color_token: String::new(),
            points,
        }
    }

    pub fn with_color_token(mut self, token: impl Into<String>) -> Self {
        self.color_token = token.into();
        self
    }

    /// (min_x, max_x) over the authored points.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter();
        let first = iter.next()?;
        Some(iter.fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))))
    }
}

/// An x-interval of the primary line to shade against the zero baseline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadeRange {
    pub from_x: f64,
    pub to_x: f64,
}

impl ShadeRange {
    pub const fn new(from_x: f64, to_x: f64) -> Self {
        Self { from_x, to_x }
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.from_x && x <= self.to_x
    }
}
