use culture_core::models::GapSeverity;
use culture_gaps::severity::{band_for, legend};
use culture_gaps::{gap_color, gap_severity, SEVERITY_BANDS};

#[test]
fn band_boundaries() {
    let cases = [
        (0, GapSeverity::Low),
        (19, GapSeverity::Low),
        (20, GapSeverity::Moderate),
        (39, GapSeverity::Moderate),
        (40, GapSeverity::Significant),
        (59, GapSeverity::Significant),
        (60, GapSeverity::High),
        (100, GapSeverity::High),
    ];
    for (gap, expected) in cases {
        assert_eq!(gap_severity(gap), expected, "gap {gap}");
    }
}

#[test]
fn colours_per_band() {
    assert_eq!(gap_color(0), "#22c55e");
    assert_eq!(gap_color(25), "#eab308");
    assert_eq!(gap_color(45), "#f97316");
    assert_eq!(gap_color(75), "#ef4444");
}

#[test]
fn every_gap_lands_in_exactly_one_band() {
    for gap in 0..=100u8 {
        let holders: Vec<_> = SEVERITY_BANDS.iter().filter(|b| b.contains(gap)).collect();
        assert_eq!(holders.len(), 1, "gap {gap}");
        assert_eq!(holders[0], band_for(gap));
        assert_eq!(gap_severity(gap), holders[0].severity);
        assert_eq!(gap_color(gap), holders[0].color);
    }
}

#[test]
fn bands_are_contiguous_and_ascending() {
    assert_eq!(SEVERITY_BANDS[0].lower, 0);
    assert_eq!(SEVERITY_BANDS[SEVERITY_BANDS.len() - 1].upper, 100);
    for pair in SEVERITY_BANDS.windows(2) {
        assert_eq!(pair[0].upper + 1, pair[1].lower);
        assert!(pair[0].severity < pair[1].severity);
    }
}

#[test]
fn legend_lists_bands_low_to_high() {
    let labels: Vec<&str> = legend().iter().map(|b| b.label).collect();
    assert_eq!(
        labels,
        vec!["Low (<20)", "Moderate (20-39)", "Significant (40-59)", "High (60+)"]
    );
}

#[test]
fn out_of_range_gap_clamps_to_top_band() {
    assert_eq!(gap_severity(200), GapSeverity::High);
}
