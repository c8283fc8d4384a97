/// Test utilities: an RAII data directory plus fixture writers.
///
/// The directory is removed when the environment is dropped, even if the
/// test panics.
use anyhow::Result;
use shared::{AuthSession, Role, User};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::connection::CsvConnection;

pub struct TestEnvironment {
    /// Kept alive so the directory outlives the test body
    _temp_dir: TempDir,
    pub connection: CsvConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("barber_booking_test")?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Write a raw working_hours.csv for a barber
    pub fn write_working_hours_csv(&self, barber_id: &str, content: &str) {
        self.connection
            .ensure_barber_directory(barber_id)
            .expect("create barber directory");
        fs::write(self.connection.working_hours_file_path(barber_id), content).expect("write working hours");
    }

    /// Write a raw bookings.csv for a barber
    pub fn write_bookings_csv(&self, barber_id: &str, content: &str) {
        self.connection
            .ensure_barber_directory(barber_id)
            .expect("create barber directory");
        fs::write(self.connection.bookings_file_path(barber_id), content).expect("write bookings");
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("BARBER_BOOKING_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

pub fn test_user() -> User {
    User {
        id: "user::1".to_string(),
        email: "sam@example.com".to_string(),
        first_name: "Sam".to_string(),
        last_name: "Fade".to_string(),
        phone: Some("+1 555 0100".to_string()),
        role: Role::Customer,
    }
}

pub fn test_session() -> AuthSession {
    AuthSession {
        token: "access-token".to_string(),
        refresh_token: "refresh-token".to_string(),
        user: test_user(),
    }
}
