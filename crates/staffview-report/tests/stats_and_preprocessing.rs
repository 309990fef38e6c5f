//! Integration tests for correlation, grouped means, and standardization.

use ndarray::Array2;
use staffview_report::preprocessing::{fit_scaler, fit_transform, transform_all};
use staffview_report::stats::{correlation_matrix, group_means};

// ---------------------------------------------------------------------------
// Pearson correlation matrix
// ---------------------------------------------------------------------------

#[test]
fn correlation_symmetric_with_unit_diagonal() {
    let a = vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
    let b = vec![Some(2.0), Some(1.0), Some(5.0), Some(3.0)];
    let c = vec![Some(0.5), Some(0.9), Some(0.1), Some(0.4)];
    let columns: Vec<(&str, &[Option<f64>])> = vec![("a", &a), ("b", &b), ("c", &c)];

    let m = correlation_matrix(&columns).unwrap();
    for i in 0..3 {
        assert!(
            (m[(i, i)] - 1.0).abs() < 1e-12,
            "diagonal should be 1.0, got {}",
            m[(i, i)]
        );
        for j in 0..3 {
            assert!(
                (m[(i, j)] - m[(j, i)]).abs() < 1e-12,
                "matrix should be symmetric"
            );
        }
    }
}

#[test]
fn correlation_perfect_linear_relationship() {
    let a = vec![Some(1.0), Some(2.0), Some(3.0)];
    let b = vec![Some(10.0), Some(20.0), Some(30.0)];
    let c = vec![Some(3.0), Some(2.0), Some(1.0)];
    let columns: Vec<(&str, &[Option<f64>])> = vec![("a", &a), ("b", &b), ("c", &c)];

    let m = correlation_matrix(&columns).unwrap();
    assert!((m[(0, 1)] - 1.0).abs() < 1e-12, "a~b should be +1");
    assert!((m[(0, 2)] + 1.0).abs() < 1e-12, "a~c should be -1");
}

#[test]
fn correlation_uses_pairwise_complete_rows() {
    // The None in `b` removes only row 2 from the (a, b) pair
    let a = vec![Some(1.0), Some(2.0), Some(100.0), Some(4.0)];
    let b = vec![Some(1.0), Some(2.0), None, Some(4.0)];
    let columns: Vec<(&str, &[Option<f64>])> = vec![("a", &a), ("b", &b)];

    let m = correlation_matrix(&columns).unwrap();
    assert!(
        (m[(0, 1)] - 1.0).abs() < 1e-12,
        "remaining rows are perfectly correlated, got {}",
        m[(0, 1)]
    );
}

#[test]
fn correlation_zero_variance_is_nan() {
    let a = vec![Some(1.0), Some(2.0), Some(3.0)];
    let b = vec![Some(5.0), Some(5.0), Some(5.0)];
    let columns: Vec<(&str, &[Option<f64>])> = vec![("a", &a), ("b", &b)];

    let m = correlation_matrix(&columns).unwrap();
    assert!(m[(0, 1)].is_nan(), "constant column correlation is undefined");
    assert!((m[(1, 1)] - 1.0).abs() < 1e-12, "diagonal stays 1.0");
}

#[test]
fn correlation_no_columns_errors() {
    let columns: Vec<(&str, &[Option<f64>])> = vec![];
    assert!(correlation_matrix(&columns).is_err());
}

// ---------------------------------------------------------------------------
// Grouped means
// ---------------------------------------------------------------------------

#[test]
fn group_means_basic() {
    let groups = vec![
        Some("A".to_string()),
        Some("A".to_string()),
        Some("B".to_string()),
    ];
    let values = vec![Some(4.0), Some(6.0), Some(8.0)];

    let means = group_means(&groups, &values).unwrap();
    assert_eq!(means.len(), 2);
    assert_eq!(means[0].0, "A");
    assert!((means[0].1 - 5.0).abs() < 1e-12);
    assert_eq!(means[1].0, "B");
    assert!((means[1].1 - 8.0).abs() < 1e-12);
}

#[test]
fn group_means_sorted_by_label() {
    let groups = vec![
        Some("Ventas".to_string()),
        Some("IT".to_string()),
        Some("Marketing".to_string()),
    ];
    let values = vec![Some(1.0), Some(2.0), Some(3.0)];

    let means = group_means(&groups, &values).unwrap();
    let labels: Vec<&str> = means.iter().map(|(g, _)| g.as_str()).collect();
    assert_eq!(labels, vec!["IT", "Marketing", "Ventas"]);
}

#[test]
fn group_means_skips_missing_cells() {
    let groups = vec![
        Some("A".to_string()),
        Some("A".to_string()),
        None,
        Some("B".to_string()),
    ];
    let values = vec![Some(4.0), None, Some(100.0), None];

    let means = group_means(&groups, &values).unwrap();
    // A keeps its one observed value; B has no observations and is dropped,
    // as is the row with a missing group label.
    assert_eq!(means.len(), 1);
    assert_eq!(means[0].0, "A");
    assert!((means[0].1 - 4.0).abs() < 1e-12);
}

#[test]
fn group_means_length_mismatch_errors() {
    let groups = vec![Some("A".to_string())];
    let values = vec![Some(1.0), Some(2.0)];
    assert!(group_means(&groups, &values).is_err());
}

// ---------------------------------------------------------------------------
// Standardization
// ---------------------------------------------------------------------------

#[test]
fn fit_scaler_computes_mean_and_std() {
    let x = Array2::from_shape_vec((4, 2), vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0, 4.0, 40.0])
        .unwrap();

    let scaler = fit_scaler(&x).unwrap();
    assert!((scaler.mean[0] - 2.5).abs() < 1e-12);
    assert!((scaler.mean[1] - 25.0).abs() < 1e-12);
    assert!(scaler.std[0] > 0.0);
    assert!(scaler.std[1] > 0.0);
}

#[test]
fn fit_transform_standardizes_columns() {
    let x = Array2::from_shape_vec((4, 2), vec![1.0, 100.0, 2.0, 200.0, 3.0, 300.0, 4.0, 400.0])
        .unwrap();

    let t = fit_transform(&x).unwrap();
    for c in 0..2 {
        let column: Vec<f64> = (0..4).map(|r| t[(r, c)]).collect();
        let mean: f64 = column.iter().sum::<f64>() / 4.0;
        let var: f64 = column.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / 4.0;
        assert!(mean.abs() < 1e-12, "column {} mean = {}", c, mean);
        assert!((var - 1.0).abs() < 1e-9, "column {} variance = {}", c, var);
    }
}

#[test]
fn transform_constant_column_yields_zeros() {
    let x = Array2::from_shape_vec((3, 1), vec![7.0, 7.0, 7.0]).unwrap();
    let scaler = fit_scaler(&x).unwrap();
    let t = transform_all(&x, &scaler);
    for r in 0..3 {
        assert!(
            t[(r, 0)].abs() < 1e-6,
            "constant column should standardize to ~0"
        );
    }
}

#[test]
fn fit_scaler_empty_matrix_errors() {
    let x = Array2::<f64>::zeros((0, 3));
    assert!(fit_scaler(&x).is_err());
}
