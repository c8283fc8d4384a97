use shared::Booking;

use crate::domain::models::booking::{format_timestamp, parse_timestamp, ExistingBooking};
use crate::domain::models::time_slot::SlotError;

pub struct BookingMapper;

impl BookingMapper {
    pub fn to_domain(dto: Booking) -> Result<ExistingBooking, SlotError> {
        Ok(ExistingBooking {
            start: parse_timestamp(&dto.start_time)?,
            end: parse_timestamp(&dto.end_time)?,
            id: dto.id,
            status: dto.status,
            service_id: dto.service_id,
        })
    }

    pub fn to_dto(domain: ExistingBooking) -> Booking {
        Booking {
            start_time: format_timestamp(&domain.start),
            end_time: format_timestamp(&domain.end),
            id: domain.id,
            status: domain.status,
            service_id: domain.service_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BookingStatus;

    #[test]
    fn test_offset_timestamp_keeps_wall_clock() {
        let dto = Booking {
            id: "booking::1".to_string(),
            start_time: "2025-06-16T09:30:00+02:00".to_string(),
            end_time: "2025-06-16T10:15:00+02:00".to_string(),
            status: BookingStatus::Confirmed,
            service_id: None,
        };
        let domain = BookingMapper::to_domain(dto).unwrap();
        let back = BookingMapper::to_dto(domain);
        assert_eq!(back.start_time, "2025-06-16T09:30:00");
        assert_eq!(back.end_time, "2025-06-16T10:15:00");
    }

    #[test]
    fn test_garbage_timestamp_is_rejected() {
        let dto = Booking {
            id: "booking::2".to_string(),
            start_time: "yesterday".to_string(),
            end_time: "2025-06-16T10:15:00".to_string(),
            status: BookingStatus::Pending,
            service_id: None,
        };
        assert_eq!(
            BookingMapper::to_domain(dto),
            Err(SlotError::InvalidTimestamp("yesterday".to_string()))
        );
    }
}
