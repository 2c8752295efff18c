use serde_json::Value as JsonValue;

use super::model::{Report, RunRecord, Series};
use crate::error::ReportError;

/// Project `x_field` and `y_field` of every record into a [`Series`],
/// keeping record order.
///
/// Fails on the first record lacking either field, or holding something
/// other than a number in one.
pub fn extract(report: &Report, x_field: &str, y_field: &str) -> Result<Series, ReportError> {
    let mut x = Vec::with_capacity(report.len());
    let mut y = Vec::with_capacity(report.len());

    for (i, record) in report.records().iter().enumerate() {
        let xv = lookup(record, x_field, i)?;
        let yv = lookup(record, y_field, i)?;
        x.push(numeric(xv, x_field, i)?);
        y.push(numeric(yv, y_field, i)?);
    }

    Ok(Series::new(x, y))
}

/// Read `field` from `record` as a number.
pub fn number(record: &RunRecord, field: &str, index: usize) -> Result<f64, ReportError> {
    numeric(lookup(record, field, index)?, field, index)
}

fn lookup<'a>(record: &'a RunRecord, field: &str, index: usize) -> Result<&'a JsonValue, ReportError> {
    record
        .get(field)
        .ok_or_else(|| ReportError::missing(field, index))
}

fn numeric(value: &JsonValue, field: &str, index: usize) -> Result<f64, ReportError> {
    value
        .as_f64()
        .ok_or_else(|| ReportError::mismatch(field, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn report(rows: JsonValue) -> Report {
        let records = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r.as_object().unwrap().clone())
            .collect();
        Report::new(records)
    }

    #[test]
    fn projects_in_record_order() {
        let r = report(json!([
            {"size": 20, "average_spanner_size": 60},
            {"size": 10, "average_spanner_size": 25.5},
        ]));
        let s = extract(&r, "size", "average_spanner_size").unwrap();
        assert_eq!(s.x, vec![20.0, 10.0]);
        assert_eq!(s.y, vec![60.0, 25.5]);
    }

    #[test]
    fn names_first_missing_field_and_index() {
        let r = report(json!([
            {"size": 10, "max_stretch": 2.0},
            {"max_stretch": 2.5},
        ]));
        match extract(&r, "size", "max_stretch") {
            Err(ReportError::MissingField { field, index }) => {
                assert_eq!(field, "size");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn x_checked_before_y() {
        let r = report(json!([{}]));
        match extract(&r, "density", "max_stretch") {
            Err(ReportError::MissingField { field, .. }) => assert_eq!(field, "density"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn strings_are_type_mismatch() {
        let r = report(json!([{"size": "10", "average_spanner_size": 25}]));
        assert!(matches!(
            extract(&r, "size", "average_spanner_size"),
            Err(ReportError::TypeMismatch { ref field, index: 0 }) if field == "size"
        ));
    }

    #[test]
    fn empty_report_gives_empty_series() {
        let s = extract(&Report::default(), "size", "max_stretch").unwrap();
        assert!(s.is_empty());
    }

    proptest! {
        #[test]
        fn series_matches_records(rows in prop::collection::vec((1u32..10_000, 0.0f64..1e9), 0..64)) {
            let records = rows
                .iter()
                .map(|(size, edges)| {
                    json!({"size": size, "average_spanner_size": edges})
                        .as_object()
                        .unwrap()
                        .clone()
                })
                .collect();
            let r = Report::new(records);
            let s = extract(&r, "size", "average_spanner_size").unwrap();

            prop_assert_eq!(s.x.len(), r.len());
            prop_assert_eq!(s.y.len(), r.len());
            for (i, (size, edges)) in rows.iter().enumerate() {
                prop_assert_eq!(s.x[i], f64::from(*size));
                prop_assert_eq!(s.y[i], *edges);
            }
        }
    }
}
