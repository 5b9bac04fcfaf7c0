// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Upper bound on generated ticks; large ranges fall back to coarser steps.
pub const MAX_TICKS: usize = 50;

/// Tick values from `min` to `max` every `step`, coarsened by whole multiples of `step`
/// until at most [`MAX_TICKS`] ticks remain.
pub fn step_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    let span = max - min;
    if !(step > 0.0) || !span.is_finite() || span < 0.0 {
        return vec![min, max];
    }
    let mut step = step;
    // Compared in f64: huge spans would saturate a usize tick count.
    while span / step > (MAX_TICKS - 1) as f64 {
        step *= 2.0;
    }
    let count = (span / step + 1e-9).floor() as usize;
    (0..=count).map(|i| min + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_follow_step() {
        assert_eq!(step_ticks(0.0, 300.0, 100.0), vec![0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn ticks_are_capped() {
        let ticks = step_ticks(0.0, 1_000_000.0, 100.0);
        assert!(ticks.len() <= MAX_TICKS);
        assert_eq!(ticks[0], 0.0);
    }

    #[test]
    fn huge_spans_stay_capped() {
        for max in [1e22, 1e300, f64::MAX] {
            let ticks = step_ticks(0.0, max, 100.0);
            assert!(!ticks.is_empty() && ticks.len() <= MAX_TICKS, "max {max}");
            assert!(ticks.iter().all(|t| t.is_finite() && *t <= max));
        }
    }

    #[test]
    fn non_finite_span_returns_endpoints() {
        assert_eq!(step_ticks(-f64::MAX, f64::MAX, 100.0), vec![-f64::MAX, f64::MAX]);
        let ticks = step_ticks(0.0, f64::INFINITY, 100.0);
        assert_eq!(ticks.len(), 2);
    }

    #[test]
    fn degenerate_step_returns_endpoints() {
        assert_eq!(step_ticks(0.0, 10.0, 0.0), vec![0.0, 10.0]);
    }
}
