//! The fixed per-feature configuration table
//!
//! Four characteristic columns are analyzed; each carries its display
//! ranges, the legacy cutoffs drawn for comparison, and which density
//! extremum (if any) the new threshold is read from. The asymmetries
//! (only Dispersion's estimate is drawn, Longevity gets no estimate at
//! all) are historical behavior and live here, not in the code paths.

use crate::density::ThresholdMode;
use serde::Serialize;

/// The four characteristic features, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeatureKind {
    Dispersion,
    BuggedFormality,
    Engagement,
    Longevity,
}

impl FeatureKind {
    pub fn all() -> &'static [FeatureKind] {
        &[
            FeatureKind::Dispersion,
            FeatureKind::BuggedFormality,
            FeatureKind::Engagement,
            FeatureKind::Longevity,
        ]
    }

    /// CSV column name
    pub fn column(&self) -> &'static str {
        match self {
            FeatureKind::Dispersion => "Dispersion",
            FeatureKind::BuggedFormality => "BuggedFormality",
            FeatureKind::Engagement => "Engagement",
            FeatureKind::Longevity => "Longevity",
        }
    }

    /// Lowercase name used for figure filenames
    pub fn slug(&self) -> &'static str {
        match self {
            FeatureKind::Dispersion => "dispersion",
            FeatureKind::BuggedFormality => "bugged_formality",
            FeatureKind::Engagement => "engagement",
            FeatureKind::Longevity => "longevity",
        }
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// A legacy cutoff drawn as a vertical line for comparison
#[derive(Debug, Clone, Copy)]
pub struct ReferenceLine {
    pub label: &'static str,
    pub value: f64,
    pub color: (u8, u8, u8),
    pub stroke_width: u32,
}

/// Static display and estimation settings for one feature
#[derive(Debug, Clone, Copy)]
pub struct FeatureSpec {
    pub kind: FeatureKind,
    pub axis_label: &'static str,
    /// Which curve extremum the new threshold is read from; None skips
    /// estimation entirely
    pub mode: Option<ThresholdMode>,
    /// Whether the computed estimate is drawn on the figure (it is always
    /// reported when computed)
    pub draw_estimate: bool,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub references: &'static [ReferenceLine],
}

pub const MAGENTA: (u8, u8, u8) = (255, 0, 255);
pub const ORANGE_RED: (u8, u8, u8) = (255, 69, 0);
pub const LIME: (u8, u8, u8) = (0, 255, 0);

static SPECS: [FeatureSpec; 4] = [
    FeatureSpec {
        kind: FeatureKind::Dispersion,
        axis_label: "Dispersion (km)",
        mode: Some(ThresholdMode::Min),
        draw_estimate: true,
        x_range: (0.0, 5000.0),
        y_range: (0.0, 25.0),
        references: &[ReferenceLine {
            label: "Old Threshold",
            value: 4926.0,
            color: MAGENTA,
            stroke_width: 1,
        }],
    },
    FeatureSpec {
        kind: FeatureKind::BuggedFormality,
        axis_label: "Formality Level",
        mode: Some(ThresholdMode::Max),
        draw_estimate: false,
        x_range: (0.0, 450.0),
        y_range: (0.0, 25.0),
        references: &[
            ReferenceLine {
                label: "Old Low Threshold",
                value: 0.1,
                color: MAGENTA,
                stroke_width: 4,
            },
            ReferenceLine {
                label: "Old High Threshold",
                value: 20.0,
                color: LIME,
                stroke_width: 1,
            },
        ],
    },
    FeatureSpec {
        kind: FeatureKind::Engagement,
        axis_label: "Engagement Level",
        mode: Some(ThresholdMode::Max),
        draw_estimate: false,
        x_range: (0.0, 22.0),
        y_range: (0.0, 25.0),
        references: &[ReferenceLine {
            label: "Threshold",
            value: 3.5,
            color: MAGENTA,
            stroke_width: 1,
        }],
    },
    FeatureSpec {
        kind: FeatureKind::Longevity,
        axis_label: "Longevity (days)",
        mode: None,
        draw_estimate: false,
        x_range: (0.0, 1800.0),
        y_range: (0.0, 25.0),
        references: &[ReferenceLine {
            label: "Threshold",
            value: 93.0,
            color: MAGENTA,
            stroke_width: 1,
        }],
    },
];

/// The full table, in report order
pub fn specs() -> &'static [FeatureSpec; 4] {
    &SPECS
}
