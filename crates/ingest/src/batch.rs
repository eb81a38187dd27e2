//! Batch normalization.
//!
//! One malformed record must fail alone: the batch keeps going and the
//! failure is reported with enough context to find the source row.

use serde::{Deserialize, Serialize};

use portal_core::{CoreError, PortalItem};

/// One record that failed normalization or persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordFailure {
    /// Position in the raw batch (normalization) or slug (persistence).
    pub label: String,
    pub reason: String,
}

/// Outcome of one vertical's ETL run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IngestReport {
    pub vertical: String,
    pub upserted: usize,
    pub failures: Vec<RecordFailure>,
}

impl IngestReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Map a normalizer over a raw batch, collecting per-record failures
/// instead of aborting.
pub fn normalize_batch<R>(
    records: &[R],
    normalize: impl Fn(&R) -> Result<PortalItem, CoreError>,
) -> (Vec<PortalItem>, Vec<RecordFailure>) {
    let mut items = Vec::with_capacity(records.len());
    let mut failures = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match normalize(record) {
            Ok(item) => items.push(item),
            Err(e) => {
                tracing::warn!(index, error = %e, "record failed normalization");
                failures.push(RecordFailure { label: format!("#{index}"), reason: e.to_string() });
            },
        }
    }
    (items, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fetch_vehicles, normalize_vehicle};

    #[test]
    fn malformed_record_does_not_abort_the_batch() {
        let mut records = fetch_vehicles();
        if let Some(first) = records.first_mut() {
            first.valor = "not a price".to_owned();
        }
        let (items, failures) = normalize_batch(&records, normalize_vehicle);
        assert_eq!(items.len(), 2);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures.first().map(|f| f.label.as_str()), Some("#0"));
    }

    #[test]
    fn clean_batch_has_no_failures() {
        let records = fetch_vehicles();
        let (items, failures) = normalize_batch(&records, normalize_vehicle);
        assert_eq!(items.len(), records.len());
        assert!(failures.is_empty());
    }
}
