//! Integration tests for the dataset model and the employee CSV loader.

use staffview_report::dataset::{Column, Dataset};
use staffview_report::io::read_employee_csv;

fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Column::categorical(
            "zona_geografica",
            vec![
                Some("Norte".to_string()),
                Some("Sur".to_string()),
                Some("Norte".to_string()),
                None,
            ],
        ),
        Column::numeric(
            "salario_anual",
            vec![Some(30000.0), Some(28000.0), None, Some(41000.0)],
        ),
    ])
    .unwrap()
}

// ---------------------------------------------------------------------------
// Dataset construction and access
// ---------------------------------------------------------------------------

#[test]
fn dataset_dimensions() {
    let data = sample_dataset();
    assert_eq!(data.n_rows(), 4);
    assert_eq!(data.n_cols(), 2);
}

#[test]
fn dataset_rejects_mismatched_column_lengths() {
    let result = Dataset::new(vec![
        Column::numeric("a", vec![Some(1.0), Some(2.0)]),
        Column::numeric("b", vec![Some(1.0)]),
    ]);
    assert!(result.is_err(), "should error on unequal column lengths");
}

#[test]
fn numeric_accessor_rejects_categorical() {
    let data = sample_dataset();
    assert!(data.numeric("salario_anual").is_some());
    assert!(data.numeric("zona_geografica").is_none());
    assert!(data.numeric("missing").is_none());
}

#[test]
fn distinct_non_null_keeps_first_encounter_order() {
    let data = Dataset::new(vec![Column::categorical(
        "zona_geografica",
        vec![
            Some("Sur".to_string()),
            Some("Norte".to_string()),
            None,
            Some("Sur".to_string()),
            Some("Centro".to_string()),
        ],
    )])
    .unwrap();

    // Insertion order, not sorted: Sur was seen first
    assert_eq!(
        data.distinct_non_null("zona_geografica"),
        vec!["Sur", "Norte", "Centro"]
    );
}

#[test]
fn numeric_columns_in_file_order() {
    let data = sample_dataset();
    let numeric = data.numeric_columns();
    assert_eq!(numeric.len(), 1);
    assert_eq!(numeric[0].0, "salario_anual");
}

#[test]
fn labels_format_numeric_cells() {
    let data = Dataset::new(vec![Column::numeric(
        "zona_geografica",
        vec![Some(3.0), Some(1.5), None],
    )])
    .unwrap();

    let labels = data.labels("zona_geografica").unwrap();
    assert_eq!(labels[0].as_deref(), Some("3"));
    assert_eq!(labels[1].as_deref(), Some("1.5"));
    assert!(labels[2].is_none());
}

// ---------------------------------------------------------------------------
// CSV loading and type inference
// ---------------------------------------------------------------------------

#[test]
fn read_csv_infers_types_and_missing_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work.csv");
    std::fs::write(
        &path,
        "zona_geografica,departamento,salario_anual\n\
         Norte,Ventas,30000\n\
         Sur,,28000\n\
         Norte,IT,\n",
    )
    .unwrap();

    let data = read_employee_csv(&path).unwrap();
    assert_eq!(data.n_rows(), 3);

    let departments = data.categorical("departamento").unwrap();
    assert!(departments[1].is_none(), "empty cell should be missing");

    let salaries = data.numeric("salario_anual").unwrap();
    assert_eq!(salaries[0], Some(30000.0));
    assert!(salaries[2].is_none());

    assert!(
        data.categorical("zona_geografica").is_some(),
        "mixed text column should be categorical"
    );
}

#[test]
fn read_csv_numeric_column_with_stray_text_is_categorical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work.csv");
    std::fs::write(&path, "salario_anual\n30000\nn/a\n28000\n").unwrap();

    let data = read_employee_csv(&path).unwrap();
    assert!(data.numeric("salario_anual").is_none());
    assert!(data.categorical("salario_anual").is_some());
}

#[test]
fn read_csv_missing_file_errors() {
    let result = read_employee_csv("/nonexistent/work.csv");
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(
        message.contains("/nonexistent/work.csv"),
        "error should name the path: {}",
        message
    );
}

#[test]
fn read_csv_ragged_row_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work.csv");
    std::fs::write(&path, "a,b\n1,2\n3\n").unwrap();

    assert!(read_employee_csv(&path).is_err());
}
