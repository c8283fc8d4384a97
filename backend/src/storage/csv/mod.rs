//! # File Storage
//!
//! ```text
//! {data_dir}/
//! ├── session.yaml
//! └── {barber_id}/
//!     ├── working_hours.csv
//!     └── bookings.csv
//! ```

pub mod connection;
pub mod working_hours_repository;
pub mod booking_repository;
pub mod session_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use working_hours_repository::WorkingHoursRepository;
pub use booking_repository::BookingRepository;
pub use session_repository::SessionRepository;
