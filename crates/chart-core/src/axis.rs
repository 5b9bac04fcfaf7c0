// File: crates/chart-core/src/axis.rs
// Summary: Axis/scale policy attached to a presentation.

/// How the value axis of a presentation is scaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisPolicy {
    /// No axes at all (proportional charts).
    None,
    /// Linear value axis with a fixed tick step.
    Linear { begin_at_zero: bool, step: f64 },
}

impl AxisPolicy {
    /// Zero-based linear axis ticking every `step` units.
    pub fn zero_based(step: f64) -> Self {
        AxisPolicy::Linear { begin_at_zero: true, step }
    }

    pub fn has_axes(&self) -> bool {
        matches!(self, AxisPolicy::Linear { .. })
    }

    /// Value range `(min, max)` that covers `values` under this policy.
    /// Returns `None` for [`AxisPolicy::None`].
    pub fn range_for(&self, values: &[f64]) -> Option<(f64, f64)> {
        let AxisPolicy::Linear { begin_at_zero, step } = *self else {
            return None;
        };
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in values.iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            lo = 0.0;
            hi = 0.0;
        }
        if begin_at_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        let step = if step > 0.0 { step } else { 1.0 };
        let min = (lo / step).floor() * step;
        let mut max = (hi / step).ceil() * step;
        if (max - min).abs() < 1e-12 {
            max = min + step;
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_range() {
        assert_eq!(AxisPolicy::None.range_for(&[1.0, 2.0]), None);
        assert!(!AxisPolicy::None.has_axes());
    }

    #[test]
    fn zero_based_rounds_to_step() {
        let axis = AxisPolicy::zero_based(100.0);
        assert_eq!(axis.range_for(&[120.0, 40.0, 310.0]), Some((0.0, 400.0)));
        assert_eq!(axis.range_for(&[5.0, 5.0]), Some((0.0, 100.0)));
    }

    #[test]
    fn empty_values_still_span_one_step() {
        let axis = AxisPolicy::zero_based(100.0);
        assert_eq!(axis.range_for(&[]), Some((0.0, 100.0)));
    }
}
