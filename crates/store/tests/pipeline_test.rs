//! End-to-end tests: JSON store → prediction service → forecast.

use std::io::Write;
use std::sync::Arc;

use rust_decimal_macros::dec;
use savvy_core::forecast::ForecastError;
use savvy_core::prediction::PredictionService;
use savvy_shared::AppError;
use savvy_store::JsonTransactionStore;
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"[
    {"id": 1, "amount": "100", "kind": "income",  "date": "2024-01-10", "category": "salary"},
    {"id": 2, "amount": "40",  "kind": "expense", "date": "2024-01-22", "category": "rent"},
    {"id": 3, "amount": "80",  "kind": "income",  "date": "2024-02-10", "category": "salary"},
    {"id": 4, "amount": "20",  "kind": "expense", "date": "2024-02-14", "category": "gifts"}
]"#;

fn service_from(json: &str) -> PredictionService<JsonTransactionStore> {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    let store = JsonTransactionStore::open(file.path()).unwrap();
    PredictionService::new(Arc::new(store))
}

#[test]
fn test_sample_predicts_flat_savings() {
    let service = service_from(SAMPLE);

    let summary = service.monthly_summary(None).unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].period.to_string(), "2024-01");
    assert_eq!(summary[0].net_savings, dec!(60));
    assert_eq!(summary[1].period.to_string(), "2024-02");
    assert_eq!(summary[1].net_savings, dec!(60));

    let result = service.predict_savings(None).unwrap();
    assert_eq!(result.predicted_period.to_string(), "2024-03");
    assert_eq!(result.predicted_value, dec!(60.00));
}

#[test]
fn test_growing_savings_trend() {
    let service = service_from(
        r#"[
        {"id": 1, "amount": "0",  "kind": "income", "date": "2023-11-01", "category": "a"},
        {"id": 2, "amount": "10", "kind": "income", "date": "2023-12-01", "category": "a"},
        {"id": 3, "amount": "20", "kind": "income", "date": "2024-01-01", "category": "a"}
    ]"#,
    );

    let result = service.predict_savings(None).unwrap();

    assert_eq!(result.predicted_period.to_string(), "2024-02");
    assert_eq!(result.predicted_value, dec!(30.00));
}

#[test]
fn test_malformed_filter() {
    let err = service_from(SAMPLE)
        .predict_savings(Some("notadate"))
        .unwrap_err();

    assert!(matches!(err, ForecastError::InvalidFilter(_)));
    assert_eq!(AppError::from(err).status_code(), 400);
}

#[test]
fn test_unmatched_filter() {
    let err = service_from(SAMPLE)
        .predict_savings(Some("1999-01"))
        .unwrap_err();

    assert!(matches!(err, ForecastError::NoDataForPeriod { .. }));
    assert_eq!(AppError::from(err).status_code(), 404);
}

#[test]
fn test_empty_store() {
    let err = service_from("[]").predict_savings(None).unwrap_err();

    assert_eq!(err, ForecastError::NoDataAvailable);
    assert_eq!(AppError::from(err).status_code(), 404);
}

#[test]
fn test_single_month_store() {
    let err = service_from(
        r#"[{"id": 1, "amount": "5", "kind": "income", "date": "2024-06-01", "category": "a"}]"#,
    )
    .predict_savings(None)
    .unwrap_err();

    assert_eq!(err, ForecastError::InsufficientData { months: 1 });
    assert_eq!(AppError::from(err).status_code(), 400);
}

#[test]
fn test_listing_with_filter() {
    let service = service_from(SAMPLE);

    let january = service.list_transactions(Some("2024-01")).unwrap();
    assert_eq!(january.len(), 2);

    assert!(matches!(
        service.list_transactions(Some("2024-1x")),
        Err(ForecastError::InvalidFilter(_))
    ));
}
