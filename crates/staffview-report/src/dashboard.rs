//! The five dashboard tasks and the render pass that assembles them.
//!
//! Each task is a pure function from the loaded dataset to a `TaskOutcome`:
//! either the charts it rendered or the warning shown in their place. Only
//! missing optional columns are recovered this way; every other failure is
//! fatal and propagates to the caller.
use anyhow::{anyhow, Result};
use ndarray::Array2;
use plotly::Plot;

use crate::cluster;
use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::preprocessing;
use crate::report::{plots, Report, ReportSection};
use crate::stats;

pub const ZONE_COLUMN: &str = "zona_geografica";
pub const DEPARTMENT_COLUMN: &str = "departamento";
pub const WORK_MODE_COLUMN: &str = "modalidad_trabajo";
pub const SALARY_COLUMN: &str = "salario_anual";
pub const SATISFACTION_COLUMN: &str = "satisfaccion_laboral";

/// Variables clustered by the well-being dendrogram, in canonical order.
pub const WELLBEING_COLUMNS: [&str; 7] = [
    "horas_ejercicio_semana",
    "horas_videojuegos_semana",
    "horas_ocio_semana",
    "horas_sueno_noche",
    "nivel_estres",
    "satisfaccion_laboral",
    "productividad_score",
];

/// Label substituted for missing department / work-arrangement cells.
pub const UNKNOWN_LABEL: &str = "Desconocido";

pub const WARN_DENDROGRAM: &str = "Faltan columnas necesarias para generar el dendrograma.";
pub const WARN_BOXPLOT: &str =
    "No hay datos suficientes para mostrar el boxplot de salario por zona.";
pub const WARN_BAR: &str = "No se encontraron datos de satisfacción laboral por departamento.";

/// Result of one dashboard task: rendered charts or a user-visible warning.
pub enum TaskOutcome {
    Charts(Vec<Plot>),
    Skipped(String),
}

impl TaskOutcome {
    pub fn charts(&self) -> Option<&[Plot]> {
        match self {
            TaskOutcome::Charts(charts) => Some(charts),
            TaskOutcome::Skipped(_) => None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            TaskOutcome::Charts(_) => None,
            TaskOutcome::Skipped(warning) => Some(warning),
        }
    }
}

fn require_labels(data: &Dataset, name: &str) -> Result<Vec<Option<String>>> {
    data.labels(name)
        .ok_or_else(|| anyhow!("Missing column '{}'", name))
}

fn require_numeric<'a>(data: &'a Dataset, name: &str) -> Result<&'a [Option<f64>]> {
    data.numeric(name)
        .ok_or_else(|| anyhow!("Column '{}' must be numeric", name))
}

/// One sunburst per distinct non-null zone, in first-encounter order.
///
/// Missing department / work-arrangement cells are relabeled
/// `"Desconocido"` before the hierarchy is counted.
pub fn zone_sunbursts(data: &Dataset, config: &DashboardConfig) -> Result<TaskOutcome> {
    let zone_cells = require_labels(data, ZONE_COLUMN)?;
    let department_cells = require_labels(data, DEPARTMENT_COLUMN)?;
    let mode_cells = require_labels(data, WORK_MODE_COLUMN)?;

    let zones = data.distinct_non_null(ZONE_COLUMN);
    let mut charts = Vec::with_capacity(zones.len());
    for zone in &zones {
        let mut hierarchy: Vec<(String, Vec<(String, usize)>)> = Vec::new();
        for row in 0..data.n_rows() {
            if zone_cells[row].as_deref() != Some(zone.as_str()) {
                continue;
            }
            let department = department_cells[row]
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
            let mode = mode_cells[row]
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

            let slot = match hierarchy.iter().position(|(name, _)| *name == department) {
                Some(index) => index,
                None => {
                    hierarchy.push((department, Vec::new()));
                    hierarchy.len() - 1
                }
            };
            let modes = &mut hierarchy[slot].1;
            match modes.iter_mut().find(|(name, _)| *name == mode) {
                Some((_, count)) => *count += 1,
                None => modes.push((mode, 1)),
            }
        }
        charts.push(plots::zone_sunburst(zone, &hierarchy, config));
    }

    Ok(TaskOutcome::Charts(charts))
}

/// Pearson correlation heatmap over all numeric columns.
///
/// With no numeric columns at all, the task degrades to a placeholder chart
/// rather than failing.
pub fn correlation_task(data: &Dataset, config: &DashboardConfig) -> Result<TaskOutcome> {
    let numeric = data.numeric_columns();
    if numeric.is_empty() {
        log::warn!("No numeric columns found; rendering correlation placeholder");
        return Ok(TaskOutcome::Charts(vec![plots::correlation_placeholder(
            config,
        )]));
    }

    let names: Vec<String> = numeric.iter().map(|(name, _)| name.to_string()).collect();
    let matrix = stats::correlation_matrix(&numeric)?;
    Ok(TaskOutcome::Charts(vec![plots::correlation_heatmap(
        &names, &matrix, config,
    )]))
}

/// Dendrogram of the seven well-being variables.
///
/// Rows with any missing value among the seven are dropped, the survivors
/// are z-scored per column, and the variables (not the rows) are clustered.
pub fn wellbeing_dendrogram_task(data: &Dataset, config: &DashboardConfig) -> Result<TaskOutcome> {
    if WELLBEING_COLUMNS.iter().any(|name| !data.has_column(name)) {
        return Ok(TaskOutcome::Skipped(WARN_DENDROGRAM.to_string()));
    }

    let mut columns = Vec::with_capacity(WELLBEING_COLUMNS.len());
    for name in WELLBEING_COLUMNS {
        columns.push(require_numeric(data, name)?);
    }

    let complete: Vec<usize> = (0..data.n_rows())
        .filter(|&row| columns.iter().all(|cells| cells[row].is_some()))
        .collect();
    if complete.is_empty() {
        return Err(anyhow!(
            "No complete rows across the well-being columns; cannot cluster"
        ));
    }

    let mut matrix = Array2::zeros((complete.len(), WELLBEING_COLUMNS.len()));
    for (r, &row) in complete.iter().enumerate() {
        for (c, cells) in columns.iter().enumerate() {
            matrix[(r, c)] = cells[row].expect("row filtered as complete");
        }
    }

    let standardized = preprocessing::fit_transform(&matrix)?;
    let variables = standardized.t().to_owned();
    let merges = cluster::average_linkage(&variables)?;
    let dendrogram = cluster::dendrogram(
        &merges,
        WELLBEING_COLUMNS.len(),
        config.dendrogram_color_threshold,
    );

    let leaf_labels: Vec<String> = dendrogram
        .leaf_order
        .iter()
        .map(|&item| WELLBEING_COLUMNS[item].to_string())
        .collect();

    Ok(TaskOutcome::Charts(vec![plots::wellbeing_dendrogram(
        &leaf_labels,
        &dendrogram,
        config,
    )]))
}

/// Salary distribution per zone as grouped boxes.
pub fn salary_boxplot_task(data: &Dataset, config: &DashboardConfig) -> Result<TaskOutcome> {
    if !data.has_column(ZONE_COLUMN) || !data.has_column(SALARY_COLUMN) {
        return Ok(TaskOutcome::Skipped(WARN_BOXPLOT.to_string()));
    }

    let zone_cells = require_labels(data, ZONE_COLUMN)?;
    let salaries = require_numeric(data, SALARY_COLUMN)?;

    let groups: Vec<(String, Vec<f64>)> = data
        .distinct_non_null(ZONE_COLUMN)
        .into_iter()
        .map(|zone| {
            let values = zone_cells
                .iter()
                .zip(salaries.iter())
                .filter(|(cell, _)| cell.as_deref() == Some(zone.as_str()))
                .filter_map(|(_, salary)| *salary)
                .collect();
            (zone, values)
        })
        .collect();

    Ok(TaskOutcome::Charts(vec![plots::salary_boxplot(
        &groups, config,
    )]))
}

/// Mean job satisfaction per department.
pub fn department_satisfaction_task(
    data: &Dataset,
    config: &DashboardConfig,
) -> Result<TaskOutcome> {
    if !data.has_column(SATISFACTION_COLUMN) || !data.has_column(DEPARTMENT_COLUMN) {
        return Ok(TaskOutcome::Skipped(WARN_BAR.to_string()));
    }

    let departments = require_labels(data, DEPARTMENT_COLUMN)?;
    let satisfaction = require_numeric(data, SATISFACTION_COLUMN)?;
    let means = stats::group_means(&departments, satisfaction)?;

    Ok(TaskOutcome::Charts(vec![plots::satisfaction_bar(
        &means, config,
    )]))
}

fn push_section(report: &mut Report, heading: &str, outcome: TaskOutcome) {
    let mut section = ReportSection::new(heading);
    match outcome {
        TaskOutcome::Charts(charts) => {
            for chart in charts {
                section.add_chart(chart);
            }
        }
        TaskOutcome::Skipped(warning) => {
            log::warn!("{}", warning);
            section.add_warning(warning);
        }
    }
    report.add_section(section);
}

/// Run every task in fixed order and assemble the dashboard page.
pub fn render_dashboard(data: &Dataset, config: &DashboardConfig) -> Result<Report> {
    let mut report = Report::new(config.report_title.clone());
    report.add_intro(
        "Gráficas seleccionadas por zona, correlaciones y comportamiento organizacional.",
    );
    report.set_caption(
        "Análisis elaborado por <strong>Janeth Valdivia</strong> \
         <strong>Valeria Ramírez</strong> y <strong>Esther Apaza</strong>",
    );

    push_section(
        &mut report,
        "Sunburst por Zona Geográfica",
        zone_sunbursts(data, config)?,
    );
    push_section(
        &mut report,
        "Matriz de Correlación General",
        correlation_task(data, config)?,
    );
    push_section(
        &mut report,
        "Dendrograma: Bienestar, Ocio y Productividad",
        wellbeing_dendrogram_task(data, config)?,
    );
    push_section(
        &mut report,
        "Distribución Salarial por Zona Geográfica",
        salary_boxplot_task(data, config)?,
    );
    push_section(
        &mut report,
        "Satisfacción Promedio por Departamento",
        department_satisfaction_task(data, config)?,
    );

    Ok(report)
}
