//! Descriptive statistics over dataset columns.
//!
//! Correlations are computed over pairwise-complete observations, so a
//! missing cell only removes that row from the pairs involving its column.
use ndarray::Array2;
use statrs::statistics::Statistics;

use crate::error::DataError;

/// Pairwise Pearson correlation matrix of the given columns.
///
/// The result is symmetric with a unit diagonal. A pair with fewer than two
/// complete observations, or with a zero-variance member, yields `NaN`.
pub fn correlation_matrix(columns: &[(&str, &[Option<f64>])]) -> Result<Array2<f64>, DataError> {
    let k = columns.len();
    if k == 0 {
        return Err(DataError::EmptyMatrix);
    }
    let n_rows = columns[0].1.len();
    if columns.iter().any(|(_, v)| v.len() != n_rows) {
        return Err(DataError::LengthMismatch);
    }

    let mut matrix = Array2::from_elem((k, k), f64::NAN);
    for i in 0..k {
        matrix[(i, i)] = 1.0;
        for j in (i + 1)..k {
            let r = pearson(columns[i].1, columns[j].1);
            matrix[(i, j)] = r;
            matrix[(j, i)] = r;
        }
    }
    Ok(matrix)
}

/// Pearson correlation of two columns over rows where both are present.
fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let mean_x = pairs.iter().map(|(x, _)| *x).mean();
    let mean_y = pairs.iter().map(|(_, y)| *y).mean();

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

/// Arithmetic mean per group, missing cells excluded, sorted by group label.
///
/// Rows with a missing group label are dropped, and groups whose values are
/// all missing are dropped, matching standard groupby-mean semantics.
pub fn group_means(
    groups: &[Option<String>],
    values: &[Option<f64>],
) -> Result<Vec<(String, f64)>, DataError> {
    if groups.len() != values.len() {
        return Err(DataError::LengthMismatch);
    }

    let mut order: Vec<String> = Vec::new();
    let mut observed: std::collections::HashMap<String, Vec<f64>> =
        std::collections::HashMap::new();
    for (group, value) in groups.iter().zip(values.iter()) {
        let Some(group) = group else { continue };
        let bucket = observed.entry(group.clone()).or_insert_with(|| {
            order.push(group.clone());
            Vec::new()
        });
        if let Some(value) = value {
            bucket.push(*value);
        }
    }

    order.sort();
    Ok(order
        .into_iter()
        .filter_map(|group| {
            let values = &observed[&group];
            if values.is_empty() {
                None
            } else {
                let mean = values.iter().mean();
                Some((group, mean))
            }
        })
        .collect())
}
