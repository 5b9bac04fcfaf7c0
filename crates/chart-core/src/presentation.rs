// File: crates/chart-core/src/presentation.rs
// Summary: Immutable per-presentation chart configuration (labels, colors, axis policy).

use crate::axis::AxisPolicy;
use crate::series::SeriesData;
use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresentationKind {
    /// Proportional chart: one segment per category.
    Segmented,
    /// Quantity per bucket: one bar per category.
    Bucketed,
}

impl PresentationKind {
    /// Chart type tag handed to the rendering backend.
    pub fn type_tag(&self) -> &'static str {
        match self {
            PresentationKind::Segmented => "doughnut",
            PresentationKind::Bucketed => "bar",
        }
    }
}

/// Bar/segment outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub color: Rgba,
    pub width: f32,
}

/// Everything a backend needs to build a chart besides the data series.
/// Fields are private; a config is fixed once built.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationConfig {
    kind: PresentationKind,
    labels: Vec<&'static str>,
    dataset_label: Option<&'static str>,
    fills: Vec<Rgba>,
    border: Option<Border>,
    hover_offset: Option<f32>,
    axis: AxisPolicy,
    fallback: SeriesData,
}

impl PresentationConfig {
    /// Remaining / Spent / Pending proportions.
    pub fn segmented() -> Self {
        let labels = vec!["Remaining", "Spent", "Pending"];
        Self {
            kind: PresentationKind::Segmented,
            fallback: SeriesData::zeros(labels.len()),
            labels,
            dataset_label: None,
            fills: vec![
                Rgba::rgb(75, 192, 192),
                Rgba::rgb(255, 99, 132),
                Rgba::rgb(255, 255, 0),
            ],
            border: None,
            hover_offset: Some(4.0),
            axis: AxisPolicy::None,
        }
    }

    /// Quarterly breakdown, one bar per quarter.
    pub fn bucketed() -> Self {
        let labels = vec!["1st Quarter", "2nd Quarter", "3rd Quarter", "4th Quarter"];
        let blue = Rgba::rgb(54, 162, 235);
        Self {
            kind: PresentationKind::Bucketed,
            fallback: SeriesData::zeros(labels.len()),
            labels,
            dataset_label: Some("Quarterly breakdown"),
            fills: vec![blue.with_alpha(0.6)],
            border: Some(Border { color: blue, width: 1.0 }),
            hover_offset: None,
            axis: AxisPolicy::zero_based(100.0),
        }
    }

    pub fn for_kind(kind: PresentationKind) -> Self {
        match kind {
            PresentationKind::Segmented => Self::segmented(),
            PresentationKind::Bucketed => Self::bucketed(),
        }
    }

    pub fn kind(&self) -> PresentationKind { self.kind }
    pub fn type_tag(&self) -> &'static str { self.kind.type_tag() }
    pub fn labels(&self) -> &[&'static str] { &self.labels }
    pub fn dataset_label(&self) -> Option<&'static str> { self.dataset_label }
    pub fn fills(&self) -> &[Rgba] { &self.fills }
    pub fn border(&self) -> Option<Border> { self.border }
    pub fn hover_offset(&self) -> Option<f32> { self.hover_offset }
    pub fn axis(&self) -> AxisPolicy { self.axis }

    /// Series substituted when an element's payload cannot be decoded.
    pub fn fallback(&self) -> &SeriesData { &self.fallback }

    /// Fill for category `index`; colors repeat when there are fewer fills than categories.
    pub fn fill_for(&self, index: usize) -> Rgba {
        if self.fills.is_empty() {
            return Rgba::default();
        }
        self.fills[index % self.fills.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_one_zero_per_label() {
        for cfg in [PresentationConfig::segmented(), PresentationConfig::bucketed()] {
            assert_eq!(cfg.fallback().points(), vec![Some(0.0); cfg.labels().len()]);
        }
    }

    #[test]
    fn bucketed_reuses_single_fill() {
        let cfg = PresentationConfig::bucketed();
        assert_eq!(cfg.fill_for(0), cfg.fill_for(3));
        assert_eq!(cfg.fill_for(2).a, 153);
    }

    #[test]
    fn segmented_has_distinct_fills() {
        let cfg = PresentationConfig::segmented();
        assert_eq!(cfg.fill_for(1), Rgba::rgb(255, 99, 132));
        assert_eq!(cfg.type_tag(), "doughnut");
        assert!(!cfg.axis().has_axes());
    }
}
