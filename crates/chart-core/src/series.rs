// File: crates/chart-core/src/series.rs
// Summary: Series payload model carried from an element's data attribute to a chart handle.
// Notes:
// - The payload keeps whatever JSON value was decoded. Rendering code reads it through
//   `points()`/`aligned()`, which never fail: non-numeric entries and non-array values
//   simply render as absent points.

use serde_json::Value;

/// One decoded data series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesData(Value);

impl SeriesData {
    /// Series from concrete numbers.
    pub fn from_points(points: &[f64]) -> Self {
        Self(Value::Array(points.iter().map(|&p| Value::from(p)).collect()))
    }

    /// Series of `len` zeros, the default for a presentation with `len` categories.
    pub fn zeros(len: usize) -> Self {
        Self(Value::Array(vec![Value::from(0); len]))
    }

    /// Wrap an already-parsed JSON value as-is.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// The raw decoded value.
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Whether the payload is a JSON array at all.
    pub fn is_sequence(&self) -> bool {
        self.0.is_array()
    }

    /// Number of entries; zero for non-array payloads.
    pub fn len(&self) -> usize {
        self.0.as_array().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric view of the payload. Non-numeric entries are `None`; a non-array
    /// payload yields an empty view.
    pub fn points(&self) -> Vec<Option<f64>> {
        match &self.0 {
            Value::Array(items) => items.iter().map(Value::as_f64).collect(),
            _ => Vec::new(),
        }
    }

    /// Numeric view fitted to `len` categories: extra points are ignored and
    /// missing points are `None`.
    pub fn aligned(&self, len: usize) -> Vec<Option<f64>> {
        let mut pts = self.points();
        pts.resize(len, None);
        pts
    }
}

impl From<Vec<f64>> for SeriesData {
    fn from(points: Vec<f64>) -> Self {
        Self::from_points(&points)
    }
}

impl Default for SeriesData {
    fn default() -> Self {
        Self(Value::Array(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn points_view_skips_non_numbers() {
        let s = SeriesData::from_value(json!([1, "x", null, 2.5]));
        assert_eq!(s.points(), vec![Some(1.0), None, None, Some(2.5)]);
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn non_array_views_as_empty() {
        let s = SeriesData::from_value(json!({"a": 1}));
        assert!(!s.is_sequence());
        assert!(s.points().is_empty());
        assert_eq!(s.aligned(3), vec![None, None, None]);
    }

    #[test]
    fn aligned_truncates_and_pads() {
        let s = SeriesData::from_points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.aligned(4), vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        let s = SeriesData::from_points(&[7.0]);
        assert_eq!(s.aligned(3), vec![Some(7.0), None, None]);
    }

    #[test]
    fn zeros_matches_length() {
        assert_eq!(SeriesData::zeros(4).points(), vec![Some(0.0); 4]);
    }
}
