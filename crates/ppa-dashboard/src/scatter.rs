//! Meaning vs. stress scatter description
//!
//! A chart-library-neutral JSON document: one point per project plus the
//! two horizontal background bands that split the meaning axis.

use crate::error::ExportError;
use ppa_core::DashboardRow;
use serde::Serialize;

/// Chart title
pub const TITLE: &str = "High Stress + Low Meaning = Burnout Risk";

/// Midpoint of the meaning axis, where the bands meet
pub const BAND_SPLIT: f64 = 5.0;

/// Which background band a point sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BandKind {
    /// Meaning below the midpoint
    Risk,
    /// Meaning at or above the midpoint
    Healthy,
}

impl BandKind {
    /// Band for a meaning score
    #[inline]
    #[must_use]
    pub fn for_meaning(meaning: f64) -> Self {
        if meaning < BAND_SPLIT {
            BandKind::Risk
        } else {
            BandKind::Healthy
        }
    }
}

/// A horizontal background band
#[derive(Debug, Clone, Serialize)]
pub struct Band {
    /// Lower meaning bound
    pub y0: f64,
    /// Upper meaning bound
    pub y1: f64,
    /// Fill colour name
    pub fillcolor: &'static str,
    /// Fill opacity
    pub opacity: f64,
    /// Drawn beneath the points
    pub layer: &'static str,
    /// Risk or healthy
    pub kind: BandKind,
}

/// An encoded axis
#[derive(Debug, Clone, Serialize)]
pub struct Channel {
    /// Row field feeding the channel
    pub field: &'static str,
    /// Axis or legend title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    /// Continuous colour scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<&'static str>,
}

/// One project
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScatterPoint {
    /// Label drawn above the point
    pub name: String,
    /// X
    pub stress: f64,
    /// Y
    pub meaning: f64,
    /// Colour
    pub efficacy: f64,
    /// Marker size
    pub community: f64,
    /// Shown on hover
    #[serde(rename = "Core Value")]
    pub core_value: String,
    /// Band the point falls in
    pub band: BandKind,
}

/// Complete scatter description
#[derive(Debug, Clone, Serialize)]
pub struct ScatterSpec {
    /// Chart title
    pub title: &'static str,
    /// X channel
    pub x: Channel,
    /// Y channel
    pub y: Channel,
    /// Colour channel
    pub color: Channel,
    /// Size channel
    pub size: Channel,
    /// Hover fields
    pub hover: [&'static str; 2],
    /// Label placement
    pub text_position: &'static str,
    /// Background bands
    pub bands: [Band; 2],
    /// One point per project
    pub points: Vec<ScatterPoint>,
}

impl ScatterSpec {
    /// Build from dashboard rows
    #[must_use]
    pub fn build(rows: &[DashboardRow]) -> Self {
        let points = rows
            .iter()
            .map(|row| ScatterPoint {
                name: row.name.clone(),
                stress: row.metrics.stress,
                meaning: row.metrics.meaning,
                efficacy: row.metrics.efficacy,
                community: row.metrics.community,
                core_value: row.core_value_label().to_string(),
                band: BandKind::for_meaning(row.metrics.meaning),
            })
            .collect();

        Self {
            title: TITLE,
            x: Channel {
                field: "Stress",
                label: Some("System Stress"),
                scale: None,
            },
            y: Channel {
                field: "Meaning",
                label: Some("Personal Meaning"),
                scale: None,
            },
            color: Channel {
                field: "Efficacy",
                label: None,
                scale: Some("RdYlGn"),
            },
            size: Channel {
                field: "Community",
                label: None,
                scale: None,
            },
            hover: ["Name", "Core Value"],
            text_position: "top center",
            bands: [
                Band {
                    y0: 0.0,
                    y1: BAND_SPLIT,
                    fillcolor: "red",
                    opacity: 0.05,
                    layer: "below",
                    kind: BandKind::Risk,
                },
                Band {
                    y0: BAND_SPLIT,
                    y1: 10.0,
                    fillcolor: "green",
                    opacity: 0.05,
                    layer: "below",
                    kind: BandKind::Healthy,
                },
            ],
            points,
        }
    }

    /// Points below the meaning midpoint
    pub fn at_risk(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.points.iter().filter(|p| p.band == BandKind::Risk)
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    /// Returns [`ExportError::Json`] if serialization fails
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
