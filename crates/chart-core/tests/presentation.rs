// File: crates/chart-core/tests/presentation.rs
// Purpose: Fixed labels, colors and axis policies of the two presentations.

use chart_core::{AxisPolicy, PresentationConfig, PresentationKind, Rgba};

#[test]
fn segmented_config() {
    let cfg = PresentationConfig::segmented();
    assert_eq!(cfg.kind(), PresentationKind::Segmented);
    assert_eq!(cfg.labels(), &["Remaining", "Spent", "Pending"]);
    assert_eq!(
        cfg.fills(),
        &[Rgba::rgb(75, 192, 192), Rgba::rgb(255, 99, 132), Rgba::rgb(255, 255, 0)]
    );
    assert_eq!(cfg.hover_offset(), Some(4.0));
    assert_eq!(cfg.axis(), AxisPolicy::None);
}

#[test]
fn bucketed_config() {
    let cfg = PresentationConfig::bucketed();
    assert_eq!(cfg.kind(), PresentationKind::Bucketed);
    assert_eq!(cfg.type_tag(), "bar");
    assert_eq!(cfg.labels(), &["1st Quarter", "2nd Quarter", "3rd Quarter", "4th Quarter"]);
    assert_eq!(cfg.dataset_label(), Some("Quarterly breakdown"));
    assert_eq!(cfg.fills(), &[Rgba::rgba(54, 162, 235, 153)]);
    let border = cfg.border().expect("bucketed bars have a border");
    assert_eq!(border.color, Rgba::rgb(54, 162, 235));
    assert_eq!(border.width, 1.0);
    assert_eq!(cfg.axis(), AxisPolicy::Linear { begin_at_zero: true, step: 100.0 });
    assert_eq!(cfg.fallback().points(), vec![Some(0.0); 4]);
}

#[test]
fn for_kind_matches_named_constructors() {
    assert_eq!(PresentationConfig::for_kind(PresentationKind::Segmented), PresentationConfig::segmented());
    assert_eq!(PresentationConfig::for_kind(PresentationKind::Bucketed), PresentationConfig::bucketed());
}
