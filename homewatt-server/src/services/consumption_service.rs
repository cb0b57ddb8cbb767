use std::sync::Arc;

use homewatt_api::models::ConsumptionEntry;
use time::{OffsetDateTime, UtcOffset};

use crate::consumption::{HOURS_IN_WINDOW, hourly_histogram, monthly_total};
use crate::errors::{ApiError, ConsumptionError};
use crate::models::ConsumptionRecord;
use crate::repositories::ConsumptionRecordRepository;
use crate::services::HouseLoader;

pub struct ConsumptionService {
    loader: Arc<dyn HouseLoader>,
    record_repository: ConsumptionRecordRepository,
    offset: UtcOffset,
}

impl ConsumptionService {
    /// `offset` is the calendar used to decide where a month starts.
    pub fn new(
        loader: Arc<dyn HouseLoader>,
        record_repository: ConsumptionRecordRepository,
        offset: UtcOffset,
    ) -> Self {
        Self { loader, record_repository, offset }
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }

    pub async fn hourly(&self, house_id: i32) -> Result<[f64; HOURS_IN_WINDOW], ApiError> {
        self.hourly_at(house_id, self.now()).await
    }

    pub async fn hourly_at(
        &self,
        house_id: i32,
        now: OffsetDateTime,
    ) -> Result<[f64; HOURS_IN_WINDOW], ApiError> {
        let tree = self.loader.load(house_id).await?;

        Ok(hourly_histogram(tree.walk(), now))
    }

    pub async fn monthly_total(&self, house_id: i32) -> Result<f64, ApiError> {
        self.monthly_total_at(house_id, self.now()).await
    }

    pub async fn monthly_total_at(&self, house_id: i32, now: OffsetDateTime) -> Result<f64, ApiError> {
        let tree = self.loader.load(house_id).await?;

        Ok(monthly_total(tree.walk(), now.to_offset(self.offset)))
    }

    pub async fn ingest_batch(
        &self,
        house_id: i32,
        entries: &[ConsumptionEntry],
    ) -> Result<usize, ApiError> {
        self.ingest_batch_at(house_id, entries, self.now()).await
    }

    /// Appends every entry or none of them.
    ///
    /// Devices are resolved through the same snapshot index the aggregations
    /// walk, so a device accepted here is always counted there.
    pub async fn ingest_batch_at(
        &self,
        house_id: i32,
        entries: &[ConsumptionEntry],
        now: OffsetDateTime,
    ) -> Result<usize, ApiError> {
        let tree = self.loader.load(house_id).await?;

        let records = entries
            .iter()
            .map(|entry| {
                validate_entry(entry)?;

                let node = tree
                    .find_device(entry.device)
                    .ok_or(ConsumptionError::DeviceNotFound(entry.device))?;

                Ok(ConsumptionRecord {
                    id: 0,
                    device_id: node.device.id,
                    time: entry.timestamp.unwrap_or(now),
                    voltage: entry.voltage,
                    current: entry.current,
                    power: entry.power,
                    energy: entry.energy,
                })
            })
            .collect::<Result<Vec<_>, ConsumptionError>>()?;

        let mut transaction = self.record_repository.get_pool().begin().await?;

        for record in &records {
            self.record_repository.create(record, &mut transaction).await?;
        }

        transaction.commit().await?;

        tracing::info!(house_id, inserted = records.len(), "appended consumption records");

        Ok(records.len())
    }

    /// Records of one device, oldest first.
    pub async fn device_records(
        &self,
        house_id: i32,
        device_id: i32,
    ) -> Result<Vec<ConsumptionRecord>, ApiError> {
        let tree = self.loader.load(house_id).await?;

        let node = tree
            .find_device(device_id)
            .ok_or(ConsumptionError::DeviceNotFound(device_id))?;

        let mut records = node.records.clone();
        records.sort_by_key(|record| (record.time, record.id));

        Ok(records)
    }
}

pub(crate) fn validate_entry(entry: &ConsumptionEntry) -> Result<(), ConsumptionError> {
    let finite = [entry.voltage, entry.current, entry.power, entry.energy]
        .iter()
        .all(|value| value.is_finite());

    if finite && entry.energy >= 0.0 {
        Ok(())
    } else {
        Err(ConsumptionError::InvalidConsumptionRecord(entry.device))
    }
}
