//! # CSV Working Hours Repository
//!
//! One file per barber at `{barber_id}/working_hours.csv`:
//! ```csv
//! id,day_of_week,start_time,end_time,is_active
//! wh::1,MONDAY,09:00,13:00,true
//! wh::2,MONDAY,14:00,19:00,true
//! ```
//!
//! A missing file means the barber has no schedule on file. A row with a
//! malformed time fails the whole read instead of being skipped, so callers
//! never compute availability from a silently truncated schedule.

use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use shared::DayOfWeek;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use tracing::{debug, info};

use super::connection::CsvConnection;
use crate::domain::models::time_slot::SlotError;
use crate::domain::models::working_period::{DomainWorkingHours, WorkingPeriod};
use crate::storage::traits::WorkingHoursStorage;

/// CSV record structure for working hours
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkingHoursRecord {
    id: String,
    day_of_week: DayOfWeek,
    start_time: String,
    end_time: String,
    is_active: bool,
}

impl From<&DomainWorkingHours> for WorkingHoursRecord {
    fn from(hours: &DomainWorkingHours) -> Self {
        WorkingHoursRecord {
            id: hours.id.clone(),
            day_of_week: hours.day_of_week,
            start_time: hours.period.start_time.to_string(),
            end_time: hours.period.end_time.to_string(),
            is_active: hours.period.is_active,
        }
    }
}

impl TryFrom<WorkingHoursRecord> for DomainWorkingHours {
    type Error = SlotError;

    fn try_from(record: WorkingHoursRecord) -> Result<Self, SlotError> {
        Ok(DomainWorkingHours {
            id: record.id,
            day_of_week: record.day_of_week,
            period: WorkingPeriod::parse(&record.start_time, &record.end_time, record.is_active)?,
        })
    }
}

/// File-backed working hours repository
#[derive(Debug, Clone)]
pub struct WorkingHoursRepository {
    connection: CsvConnection,
}

impl WorkingHoursRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl WorkingHoursStorage for WorkingHoursRepository {
    async fn list_working_hours(&self, barber_id: &str) -> Result<Option<Vec<DomainWorkingHours>>> {
        let path = self.connection.working_hours_file_path(barber_id);
        if !path.exists() {
            debug!("No working hours file for barber {}", barber_id);
            return Ok(None);
        }

        let file = File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut hours = Vec::new();
        for (index, result) in csv_reader.deserialize::<WorkingHoursRecord>().enumerate() {
            let record = result.with_context(|| format!("Malformed row {} in {}", index + 1, path.display()))?;
            let id = record.id.clone();
            let domain = DomainWorkingHours::try_from(record).with_context(|| {
                format!("Invalid working hours '{}' for barber {}", id, barber_id)
            })?;
            hours.push(domain);
        }

        debug!("Loaded {} working hours records for barber {}", hours.len(), barber_id);
        Ok(Some(hours))
    }

    async fn store_working_hours(&self, barber_id: &str, hours: &[DomainWorkingHours]) -> Result<()> {
        self.connection.ensure_barber_directory(barber_id)?;
        let path = self.connection.working_hours_file_path(barber_id);
        let temp_path = path.with_extension("csv.tmp");

        // write to a temp file first, then swap it in
        {
            let write_context = || format!("Failed to write {}", temp_path.display());
            let temp_file = File::create(&temp_path).with_context(write_context)?;
            let mut csv_writer = Writer::from_writer(BufWriter::new(temp_file));
            for entry in hours {
                csv_writer
                    .serialize(WorkingHoursRecord::from(entry))
                    .with_context(write_context)?;
            }
            csv_writer.flush().with_context(write_context)?;
        }
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        info!("Stored {} working hours records for barber {}", hours.len(), barber_id);
        Ok(())
    }
}
