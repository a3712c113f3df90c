//! Gap severity and colour classification.
//!
//! Both classifiers read the same band table, so a gap's severity name and
//! its colour can never disagree.

use serde::Serialize;

use culture_core::constants::MAX_SCORE;
use culture_core::models::GapSeverity;

/// One step of the severity function. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityBand {
    pub lower: u8,
    pub upper: u8,
    pub severity: GapSeverity,
    /// Hex display colour.
    pub color: &'static str,
    /// Legend text.
    pub label: &'static str,
}

impl SeverityBand {
    pub fn contains(&self, gap: u8) -> bool {
        (self.lower..=self.upper).contains(&gap)
    }
}

/// Ascending, contiguous bands covering 0..=100.
pub const SEVERITY_BANDS: [SeverityBand; 4] = [
    SeverityBand {
        lower: 0,
        upper: 19,
        severity: GapSeverity::Low,
        color: "#22c55e",
        label: "Low (<20)",
    },
    SeverityBand {
        lower: 20,
        upper: 39,
        severity: GapSeverity::Moderate,
        color: "#eab308",
        label: "Moderate (20-39)",
    },
    SeverityBand {
        lower: 40,
        upper: 59,
        severity: GapSeverity::Significant,
        color: "#f97316",
        label: "Significant (40-59)",
    },
    SeverityBand {
        lower: 60,
        upper: MAX_SCORE,
        severity: GapSeverity::High,
        color: "#ef4444",
        label: "High (60+)",
    },
];

/// The band a gap falls in. Gaps above 100 land in the top band.
pub fn band_for(gap: u8) -> &'static SeverityBand {
    SEVERITY_BANDS
        .iter()
        .rev()
        .find(|band| gap >= band.lower)
        .unwrap_or(&SEVERITY_BANDS[0])
}

pub fn gap_severity(gap: u8) -> GapSeverity {
    band_for(gap).severity
}

pub fn gap_color(gap: u8) -> &'static str {
    band_for(gap).color
}

/// The band table in display order, for legends.
pub fn legend() -> &'static [SeverityBand] {
    &SEVERITY_BANDS
}
