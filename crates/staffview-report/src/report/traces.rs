//! Trace types the dashboard needs beyond the bundled plotly ones.
//!
//! `plotly::Trace` is open for extension: a trace only has to serialize to
//! the JSON attributes plotly.js expects. `Sunburst` is not modeled by the
//! plotly crate, and its `HeatMap` cannot pin the color range to a fixed
//! interval, which the correlation chart needs so that 0 stays the midpoint
//! color. Both are small serde structs implementing `Trace` directly.
use plotly::Trace;
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
struct SunburstMarker {
    colors: Vec<String>,
}

/// A sunburst trace: nested categorical proportions on concentric rings.
///
/// Parent entries must be listed with their total value and children with a
/// parent id; `branchvalues: "total"` makes ring angles proportional to the
/// supplied values.
#[derive(Serialize, Clone, Debug)]
pub struct Sunburst {
    #[serde(rename = "type")]
    kind: &'static str,
    ids: Vec<String>,
    labels: Vec<String>,
    parents: Vec<String>,
    values: Vec<f64>,
    #[serde(rename = "branchvalues")]
    branch_values: &'static str,
    #[serde(rename = "textinfo", skip_serializing_if = "Option::is_none")]
    text_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<SunburstMarker>,
}

impl Sunburst {
    pub fn new(
        ids: Vec<String>,
        labels: Vec<String>,
        parents: Vec<String>,
        values: Vec<f64>,
    ) -> Box<Self> {
        Box::new(Sunburst {
            kind: "sunburst",
            ids,
            labels,
            parents,
            values,
            branch_values: "total",
            text_info: None,
            marker: None,
        })
    }

    /// Sector text template, e.g. `"label+percent root"`.
    pub fn text_info(mut self: Box<Self>, text_info: &str) -> Box<Self> {
        self.text_info = Some(text_info.to_string());
        self
    }

    /// Per-sector colors, aligned with the node arrays.
    pub fn marker_colors(mut self: Box<Self>, colors: Vec<String>) -> Box<Self> {
        self.marker = Some(SunburstMarker { colors });
        self
    }
}

impl Trace for Sunburst {
    fn to_json(&self) -> String {
        serde_json::to_string(self).expect("sunburst trace serializes")
    }
}

/// A heatmap trace with a named color scale pinned to a fixed value range.
///
/// Out-of-band cells may be `NaN`; they serialize as `null` and render as
/// blanks.
#[derive(Serialize, Clone, Debug)]
pub struct PinnedHeatMap {
    #[serde(rename = "type")]
    kind: &'static str,
    x: Vec<String>,
    y: Vec<String>,
    z: Vec<Vec<f64>>,
    #[serde(rename = "colorscale")]
    color_scale: String,
    zmin: f64,
    zmax: f64,
}

impl PinnedHeatMap {
    pub fn new(
        x: Vec<String>,
        y: Vec<String>,
        z: Vec<Vec<f64>>,
        color_scale: &str,
        zmin: f64,
        zmax: f64,
    ) -> Box<Self> {
        Box::new(PinnedHeatMap {
            kind: "heatmap",
            x,
            y,
            z,
            color_scale: color_scale.to_string(),
            zmin,
            zmax,
        })
    }
}

impl Trace for PinnedHeatMap {
    fn to_json(&self) -> String {
        serde_json::to_string(self).expect("heatmap trace serializes")
    }
}
