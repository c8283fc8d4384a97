//! # CSV Booking Repository
//!
//! Read-only view of `{barber_id}/bookings.csv`, the bookings a barber
//! already carries:
//! ```csv
//! id,start_time,end_time,status,service_id
//! booking::1,2025-06-16T09:30:00-04:00,2025-06-16T10:30:00-04:00,CONFIRMED,svc::haircut
//! ```
//! Creating bookings happens elsewhere; this backend only reads them to
//! block slots.

use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::Reader;
use serde::Deserialize;
use shared::BookingStatus;
use std::fs::File;
use std::io::BufReader;
use tracing::debug;

use super::connection::CsvConnection;
use crate::domain::models::booking::{parse_timestamp, ExistingBooking};
use crate::domain::models::time_slot::SlotError;
use crate::storage::traits::BookingStorage;

#[derive(Debug, Clone, Deserialize)]
struct BookingRecord {
    id: String,
    start_time: String,
    end_time: String,
    status: BookingStatus,
    #[serde(default)]
    service_id: Option<String>,
}

impl TryFrom<BookingRecord> for ExistingBooking {
    type Error = SlotError;

    fn try_from(record: BookingRecord) -> Result<Self, SlotError> {
        Ok(ExistingBooking {
            start: parse_timestamp(&record.start_time)?,
            end: parse_timestamp(&record.end_time)?,
            id: record.id,
            status: record.status,
            service_id: record.service_id.filter(|s| !s.is_empty()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct BookingRepository {
    connection: CsvConnection,
}

impl BookingRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl BookingStorage for BookingRepository {
    async fn list_bookings(&self, barber_id: &str) -> Result<Vec<ExistingBooking>> {
        let path = self.connection.bookings_file_path(barber_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut bookings = Vec::new();
        for (index, result) in csv_reader.deserialize::<BookingRecord>().enumerate() {
            let record = result.with_context(|| format!("Malformed row {} in {}", index + 1, path.display()))?;
            let id = record.id.clone();
            let booking = ExistingBooking::try_from(record)
                .with_context(|| format!("Invalid booking '{}' for barber {}", id, barber_id))?;
            bookings.push(booking);
        }

        debug!("Loaded {} bookings for barber {}", bookings.len(), barber_id);
        Ok(bookings)
    }
}
