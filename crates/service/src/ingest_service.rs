//! ETL orchestration: fetch -> normalize -> upsert, one vertical at a time.
//!
//! A run either completes for a vertical or fails as a whole on a hard
//! storage error; malformed records and rejected rows are collected into the
//! report instead of aborting the batch.

use std::sync::Arc;

use portal_core::{PortalItem, Vertical};
use portal_ingest::{
    IngestReport, RecordFailure, fetch_foods, fetch_medications, fetch_vehicles, food_vertical,
    medication_vertical, normalize_batch, normalize_food, normalize_medication,
    normalize_vehicle, vehicle_vertical,
};
use portal_storage::StorageError;
use portal_storage::traits::{ItemStore as _, PortalStore, VerticalStore as _};

use crate::ServiceError;

pub struct IngestService {
    storage: Arc<dyn PortalStore>,
}

impl IngestService {
    #[must_use]
    pub fn new(storage: Arc<dyn PortalStore>) -> Self {
        Self { storage }
    }

    /// Run every vertical's pipeline, in a fixed order.
    pub async fn run_all(&self) -> Result<Vec<IngestReport>, ServiceError> {
        Ok(vec![
            self.run_vehicles().await?,
            self.run_foods().await?,
            self.run_medications().await?,
        ])
    }

    pub async fn run_vehicles(&self) -> Result<IngestReport, ServiceError> {
        let (items, failures) = normalize_batch(&fetch_vehicles(), normalize_vehicle);
        self.persist(vehicle_vertical(), items, failures).await
    }

    pub async fn run_foods(&self) -> Result<IngestReport, ServiceError> {
        let (items, failures) = normalize_batch(&fetch_foods(), normalize_food);
        self.persist(food_vertical(), items, failures).await
    }

    pub async fn run_medications(&self) -> Result<IngestReport, ServiceError> {
        let (items, failures) = normalize_batch(&fetch_medications(), normalize_medication);
        self.persist(medication_vertical(), items, failures).await
    }

    async fn persist(
        &self,
        vertical: Vertical,
        items: Vec<PortalItem>,
        mut failures: Vec<RecordFailure>,
    ) -> Result<IngestReport, ServiceError> {
        let vertical_slug = vertical.slug.clone();
        let vertical_id = self.storage.upsert_vertical(&vertical).await?;
        let upserted = match self.storage.upsert_items(&vertical_id, &items).await {
            Ok(upserted) => upserted,
            Err(StorageError::PartialBatch { upserted, failures: rejected }) => {
                failures.extend(
                    rejected
                        .into_iter()
                        .map(|f| RecordFailure { label: f.slug, reason: f.reason }),
                );
                upserted
            },
            Err(e) => return Err(e.into()),
        };
        let report = IngestReport { vertical: vertical_slug, upserted, failures };
        if report.is_clean() {
            tracing::info!(vertical = %report.vertical, upserted, "ingest complete");
        } else {
            tracing::warn!(
                vertical = %report.vertical,
                upserted,
                failed = report.failures.len(),
                "ingest completed with failures"
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use portal_core::ItemOrder;
    use portal_storage::Storage;
    use tempfile::TempDir;

    use super::*;

    fn create_service() -> (IngestService, Arc<Storage>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(Storage::new(&temp_dir.path().join("portal.db")).unwrap());
        (IngestService::new(Arc::clone(&storage) as Arc<dyn PortalStore>), storage, temp_dir)
    }

    #[tokio::test]
    async fn run_all_ingests_every_vertical() {
        let (service, storage, _temp_dir) = create_service();
        let reports = service.run_all().await.unwrap();
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(IngestReport::is_clean));

        assert_eq!(storage.list_items("fipe", 100, ItemOrder::Title).unwrap().len(), 3);
        assert_eq!(storage.list_items("nutricao", 100, ItemOrder::Title).unwrap().len(), 4);
        assert_eq!(storage.list_items("medicamentos", 100, ItemOrder::Title).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn rerun_is_idempotent() {
        let (service, storage, _temp_dir) = create_service();
        service.run_all().await.unwrap();
        let second = service.run_all().await.unwrap();
        assert!(second.iter().all(IngestReport::is_clean));

        // Re-running overwrites the same rows, never duplicates them
        assert_eq!(storage.list_items("fipe", 100, ItemOrder::Title).unwrap().len(), 3);
        assert_eq!(storage.list_items("medicamentos", 100, ItemOrder::Title).unwrap().len(), 3);
    }
}
