use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use super::{BookingRepository, SessionRepository, WorkingHoursRepository};
use crate::storage::traits::Connection;

/// CsvConnection owns the data directory and hands out per-barber paths
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new connection, creating the base directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Directory holding one barber's files
    pub fn barber_directory(&self, barber_id: &str) -> PathBuf {
        self.base_directory.join(Self::generate_safe_directory_name(barber_id))
    }

    pub fn working_hours_file_path(&self, barber_id: &str) -> PathBuf {
        self.barber_directory(barber_id).join("working_hours.csv")
    }

    pub fn bookings_file_path(&self, barber_id: &str) -> PathBuf {
        self.barber_directory(barber_id).join("bookings.csv")
    }

    pub fn session_file_path(&self) -> PathBuf {
        self.base_directory.join("session.yaml")
    }

    /// Ensure a barber directory exists before writing into it
    pub fn ensure_barber_directory(&self, barber_id: &str) -> Result<PathBuf> {
        let dir = self.barber_directory(barber_id);
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create barber directory {}", dir.display()))?;
            info!("Created barber directory: {}", dir.display());
        }
        Ok(dir)
    }

    /// Map an id to a single safe path segment, e.g. `barber::42` -> `barber_42-1a2b3c4d`.
    /// The suffix is a stable hash of the raw id, so ids that sanitize to the
    /// same readable prefix still get their own directory.
    pub fn generate_safe_directory_name(id: &str) -> String {
        let mut name = String::with_capacity(id.len() + 9);
        for c in id.chars() {
            let mapped = if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            };
            // collapse runs of separators
            if !(mapped == '_' && name.ends_with('_')) {
                name.push(mapped);
            }
        }

        let prefix = match name.trim_matches('_') {
            "" => "_unnamed",
            trimmed => trimmed,
        };
        let digest = Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes()).simple().to_string();
        format!("{}-{}", prefix, &digest[..8])
    }
}

impl Connection for CsvConnection {
    type WorkingHoursRepository = WorkingHoursRepository;
    type BookingRepository = BookingRepository;
    type SessionRepository = SessionRepository;

    fn create_working_hours_repository(&self) -> Self::WorkingHoursRepository {
        WorkingHoursRepository::new(self.clone())
    }

    fn create_booking_repository(&self) -> Self::BookingRepository {
        BookingRepository::new(self.clone())
    }

    fn create_session_repository(&self) -> Self::SessionRepository {
        SessionRepository::new(self.clone())
    }
}
