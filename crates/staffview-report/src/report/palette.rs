//! Qualitative palettes used across the dashboard.

/// Muted "executive" palette for the boxplot and bar charts (Set2).
pub const SET2: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

/// Saturated palette for the sunburst department rings (Vivid).
pub const VIVID: [&str; 11] = [
    "#E58606", "#5D69B1", "#52BCA3", "#99C945", "#CC61B0", "#24796C", "#DAA51B", "#2F8AC4",
    "#764E9F", "#ED645A", "#CC3A8E",
];

/// Cluster colors for dendrogram sub-trees below the color threshold.
pub const DENDROGRAM_CLUSTERS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Neutral color for dendrogram links above the color threshold.
pub const DENDROGRAM_ABOVE_THRESHOLD: &str = "#808080";

/// Pick a palette entry, cycling when the palette runs out.
pub fn cycle(palette: &'static [&'static str], index: usize) -> &'static str {
    palette[index % palette.len()]
}
