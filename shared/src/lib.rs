use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role as reported by the booking API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Barber,
    Owner,
    Admin,
}

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    /// Wire representation, e.g. `NO_SHOW`
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::InProgress => "IN_PROGRESS",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::NoShow => "NO_SHOW",
        }
    }

    /// Whether a booking in this state still blocks the barber's time.
    /// Cancelled and no-show bookings free their slot.
    pub fn occupies_time(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::NoShow)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "IN_PROGRESS" => Ok(BookingStatus::InProgress),
            "COMPLETED" => Ok(BookingStatus::Completed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            "NO_SHOW" => Ok(BookingStatus::NoShow),
            _ => Err(UnknownValueError::new("booking status", s)),
        }
    }
}

/// Day of the week a working-hours record applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Build from a 0-based index where 0 = Sunday, 1 = Monday, ..., 6 = Saturday
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(DayOfWeek::Sunday),
            1 => Some(DayOfWeek::Monday),
            2 => Some(DayOfWeek::Tuesday),
            3 => Some(DayOfWeek::Wednesday),
            4 => Some(DayOfWeek::Thursday),
            5 => Some(DayOfWeek::Friday),
            6 => Some(DayOfWeek::Saturday),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }

    /// Human-readable day name
    pub fn day_name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MONDAY" => Ok(DayOfWeek::Monday),
            "TUESDAY" => Ok(DayOfWeek::Tuesday),
            "WEDNESDAY" => Ok(DayOfWeek::Wednesday),
            "THURSDAY" => Ok(DayOfWeek::Thursday),
            "FRIDAY" => Ok(DayOfWeek::Friday),
            "SATURDAY" => Ok(DayOfWeek::Saturday),
            "SUNDAY" => Ok(DayOfWeek::Sunday),
            _ => Err(UnknownValueError::new("day of week", s)),
        }
    }
}

/// A barber's or shop's opening interval on one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub id: String,
    pub day_of_week: DayOfWeek,
    /// Clock time "HH:MM"
    pub start_time: String,
    /// Clock time "HH:MM"
    pub end_time: String,
    pub is_active: bool,
}

/// Weekday-independent opening interval, as sent to the stateless slot generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingPeriod {
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// RFC 3339 timestamp, or naive "YYYY-MM-DDTHH:MM:SS" in shop-local time
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    pub service_id: Option<String>,
}

/// One candidate appointment window offered to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotsResponse {
    pub barber_id: Option<String>,
    /// ISO date "YYYY-MM-DD"
    pub date: String,
    pub duration_minutes: i64,
    /// True when no schedule was on file and the 09:00-20:00 default was used
    pub used_default_hours: bool,
    pub slots: Vec<TimeSlot>,
}

/// Slot generation from caller-supplied data, no storage involved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateTimeSlotsRequest {
    pub periods: Vec<WorkingPeriod>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    pub date: String,
    pub duration_minutes: Option<i64>,
    /// Overrides the server clock, "YYYY-MM-DDTHH:MM:SS"
    pub now: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedService {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration_minutes: i64,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingCart {
    pub barber_shop_id: String,
    pub barber_id: Option<String>,
    pub services: Vec<SelectedService>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanBookingRequest {
    pub user_id: String,
    pub cart: BookingCart,
    /// ISO date "YYYY-MM-DD"
    pub date: String,
    /// Chosen slot start "HH:MM"
    pub start_time: String,
    pub notes: Option<String>,
    /// Used when the cart has no barber selected (booking with the shop)
    pub fallback_barber_id: Option<String>,
}

/// Input for one booking-creation call, produced by the booking plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingInput {
    pub user_id: String,
    pub barber_id: String,
    pub barber_shop_id: String,
    pub management_service_id: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanBookingResponse {
    /// Shared by every booking of the plan so they can be handled as one unit
    pub group_id: String,
    pub bookings: Vec<CreateBookingInput>,
    pub total_price: f64,
    pub total_duration_minutes: i64,
}

/// Current date information from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32,
    pub year: i32,
    pub day: u32,
    pub day_of_week: DayOfWeek,
    pub formatted_date: String, // e.g., "Monday, June 16, 2025"
    pub iso_date: String,       // e.g., "2025-06-16"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStep {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSelectedDateRequest {
    pub current: String,
    pub step: DateStep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSelectedDateResponse {
    pub date: String,
    pub formatted_date: String,
    /// False when the step would have gone before today
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Persisted sign-in state of the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: Option<AuthSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownValueError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValueError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownValueError {}
