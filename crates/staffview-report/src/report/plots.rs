//! Chart builders converting task data into `plotly::Plot` values.
//!
//! Styling (fonts, heights, palettes) mirrors the dashboard configuration;
//! the data shaping lives in `dashboard`, not here.
use ndarray::Array2;
use plotly::common::{Font, Line, Marker, Mode};
use plotly::layout::{Annotation, Axis, Layout, Margin};
use plotly::{Bar, BoxPlot, Plot, Scatter};

use crate::cluster::Dendrogram;
use crate::config::DashboardConfig;
use crate::report::palette;
use crate::report::traces::{PinnedHeatMap, Sunburst};

fn base_layout(config: &DashboardConfig, title: &str) -> Layout {
    Layout::new().title(title).font(
        Font::new()
            .family(&config.font_family)
            .size(config.base_font_size),
    )
}

/// Two-level sunburst for one geographic zone.
///
/// `departments` holds, per department in first-encounter order, the work
/// arrangements seen under it with their row counts. Every sector of a
/// department (ring and leaves) shares that department's color.
pub fn zone_sunburst(
    zone: &str,
    departments: &[(String, Vec<(String, usize)>)],
    config: &DashboardConfig,
) -> Plot {
    let mut ids = Vec::new();
    let mut labels = Vec::new();
    let mut parents = Vec::new();
    let mut values = Vec::new();
    let mut colors = Vec::new();

    for (index, (department, modes)) in departments.iter().enumerate() {
        let color = palette::cycle(&palette::VIVID, index);
        let total: usize = modes.iter().map(|(_, count)| count).sum();
        ids.push(department.clone());
        labels.push(department.clone());
        parents.push(String::new());
        values.push(total as f64);
        colors.push(color.to_string());
        for (mode, count) in modes {
            ids.push(format!("{}/{}", department, mode));
            labels.push(mode.clone());
            parents.push(department.clone());
            values.push(*count as f64);
            colors.push(color.to_string());
        }
    }

    let trace = Sunburst::new(ids, labels, parents, values)
        .text_info("label+percent root")
        .marker_colors(colors);

    let title = format!(
        "Distribution by Department and Work Arrangement – Area: {}",
        zone
    );
    let layout =
        base_layout(config, &title).margin(Margin::new().top(50).left(0).right(0).bottom(0));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Annotated correlation heatmap over the named numeric columns.
///
/// The RdBu scale is pinned to [-1, 1] so zero correlation always maps to
/// the midpoint color. `NaN` cells render blank and carry no annotation.
pub fn correlation_heatmap(
    names: &[String],
    correlations: &Array2<f64>,
    config: &DashboardConfig,
) -> Plot {
    let z: Vec<Vec<f64>> = correlations
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect();

    let trace = PinnedHeatMap::new(names.to_vec(), names.to_vec(), z, "RdBu", -1.0, 1.0);

    let mut annotations = Vec::new();
    for (i, row_name) in names.iter().enumerate() {
        for (j, col_name) in names.iter().enumerate() {
            let value = correlations[(i, j)];
            if value.is_nan() {
                continue;
            }
            let text_color = if value.abs() > 0.6 { "white" } else { "black" };
            let text = format!("{:.2}", value);
            annotations.push(
                Annotation::new()
                    .x(col_name.clone())
                    .y(row_name.clone())
                    .text(text.as_str())
                    .show_arrow(false)
                    .font(Font::new().color(text_color)),
            );
        }
    }

    let layout = base_layout(config, "Correlation Matrix")
        .height(config.heatmap_height)
        .annotations(annotations);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Placeholder shown when the dataset has no numeric columns to correlate.
pub fn correlation_placeholder(config: &DashboardConfig) -> Plot {
    let layout = base_layout(config, "Correlation Matrix")
        .height(config.heatmap_height)
        .x_axis(Axis::new().visible(false))
        .y_axis(Axis::new().visible(false))
        .annotations(vec![Annotation::new()
            .x_ref("paper")
            .y_ref("paper")
            .x(0.5)
            .y(0.5)
            .text("No numeric columns available")
            .show_arrow(false)]);

    let mut plot = Plot::new();
    plot.set_layout(layout);
    plot
}

/// Left-oriented dendrogram over the clustered well-being variables.
///
/// `leaf_labels` must already be permuted into the dendrogram's display
/// order. Distances are negated so the tree grows leftward with leaves on
/// the right, matching the source chart's orientation.
pub fn wellbeing_dendrogram(
    leaf_labels: &[String],
    dendrogram: &Dendrogram,
    config: &DashboardConfig,
) -> Plot {
    let mut plot = Plot::new();

    for link in &dendrogram.links {
        let color = match link.cluster {
            Some(group) => palette::cycle(&palette::DENDROGRAM_CLUSTERS, group),
            None => palette::DENDROGRAM_ABOVE_THRESHOLD,
        };
        let xs: Vec<f64> = link.distances.iter().map(|d| -d).collect();
        let ys: Vec<f64> = link.positions.to_vec();
        plot.add_trace(
            Scatter::new(xs, ys)
                .mode(Mode::Lines)
                .line(Line::new().color(color))
                .show_legend(false),
        );
    }

    let layout = base_layout(
        config,
        "Dendrogram: Relationships between Well-being, Leisure, and Productivity",
    )
    .x_axis(Axis::new().title("Distance (Similarity)"))
    .y_axis(
        Axis::new()
            .title("Selected Variables")
            .tick_values(dendrogram.leaf_positions.clone())
            .tick_text(leaf_labels.to_vec()),
    );

    plot.set_layout(layout);
    plot
}

/// One box-and-whisker salary distribution per geographic zone.
pub fn salary_boxplot(groups: &[(String, Vec<f64>)], config: &DashboardConfig) -> Plot {
    let mut plot = Plot::new();
    for (index, (zone, salaries)) in groups.iter().enumerate() {
        plot.add_trace(
            BoxPlot::new(salaries.clone())
                .name(zone.as_str())
                .marker(Marker::new().color(palette::cycle(&palette::SET2, index))),
        );
    }

    let layout = base_layout(config, "Salary Distribution by Region")
        .height(config.boxplot_height)
        .x_axis(Axis::new().title("zona_geografica"))
        .y_axis(Axis::new().title("salario_anual"));

    plot.set_layout(layout);
    plot
}

/// Mean job satisfaction per department, one colored bar each.
pub fn satisfaction_bar(means: &[(String, f64)], config: &DashboardConfig) -> Plot {
    let mut plot = Plot::new();
    for (index, (department, mean)) in means.iter().enumerate() {
        plot.add_trace(
            Bar::new(vec![department.clone()], vec![*mean])
                .name(department.as_str())
                .marker(Marker::new().color(palette::cycle(&palette::SET2, index))),
        );
    }

    let layout = base_layout(config, "Average Job Satisfaction by Department")
        .height(config.bar_height)
        .x_axis(Axis::new().title("departamento").tick_angle(-45.0))
        .y_axis(Axis::new().title("satisfaccion_laboral"));

    plot.set_layout(layout);
    plot
}
