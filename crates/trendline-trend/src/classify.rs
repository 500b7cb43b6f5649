//! Timestamp shape classification.

use std::borrow::Borrow;

use trendline_types::{Record, Result, Shape, TrendError};

const EMPTY_SEQUENCE: &str = "cannot determine timestamp shape of empty sequence";

/// Determines the timestamp shape of a record sequence from its first element.
///
/// The rest of the sequence is not inspected; sequences are expected to be
/// homogeneous.
///
/// # Errors
///
/// Returns [`TrendError::InvariantViolation`] if the sequence is empty.
pub fn classify<R: Borrow<Record>>(records: &[R]) -> Result<Shape> {
    records
        .first()
        .map(|record| record.borrow().shape())
        .ok_or(TrendError::InvariantViolation(EMPTY_SEQUENCE))
}

/// Returns true if the sequence carries instant (`date_unix`) timestamps.
///
/// # Errors
///
/// Returns [`TrendError::InvariantViolation`] if the sequence is empty.
pub fn is_instant<R: Borrow<Record>>(records: &[R]) -> Result<bool> {
    Ok(classify(records)? == Shape::Daily)
}

/// Returns true if the sequence carries interval (`date_end_unix`) timestamps.
///
/// # Errors
///
/// Returns [`TrendError::InvariantViolation`] if the sequence is empty.
pub fn is_interval<R: Borrow<Record>>(records: &[R]) -> Result<bool> {
    Ok(classify(records)? == Shape::Weekly)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekly(start: i64) -> Record {
        Record::interval(start, start + 6 * 86_400).unwrap()
    }

    #[test]
    fn test_classify_daily() {
        let records = vec![Record::instant(1), Record::instant(2)];
        assert_eq!(classify(&records).unwrap(), Shape::Daily);
        assert!(is_instant(&records).unwrap());
        assert!(!is_interval(&records).unwrap());
    }

    #[test]
    fn test_classify_weekly() {
        let records = vec![weekly(0), weekly(604_800)];
        assert_eq!(classify(&records).unwrap(), Shape::Weekly);
        assert!(is_interval(&records).unwrap());
        assert!(!is_instant(&records).unwrap());
    }

    #[test]
    fn test_classify_empty() {
        let records: Vec<Record> = Vec::new();
        let err = classify(&records).unwrap_err();
        assert!(matches!(err, TrendError::InvariantViolation(_)));
        assert!(err.to_string().contains("empty sequence"));
        assert!(is_instant(&records).is_err());
        assert!(is_interval(&records).is_err());
    }

    #[test]
    fn test_classify_stable_under_permutation() {
        let mut records = vec![weekly(0), weekly(604_800), weekly(1_209_600)];
        let shape = classify(&records).unwrap();
        records.reverse();
        assert_eq!(classify(&records).unwrap(), shape);
    }

    #[test]
    fn test_classify_uses_first_element_only() {
        let mixed = vec![Record::instant(1), weekly(0)];
        assert_eq!(classify(&mixed).unwrap(), Shape::Daily);

        let borrowed: Vec<&Record> = mixed.iter().rev().collect();
        assert_eq!(classify(&borrowed).unwrap(), Shape::Weekly);
    }
}
