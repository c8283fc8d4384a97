use shared::TimeSlot;

use crate::domain::models::time_slot::DomainTimeSlot;

pub struct TimeSlotMapper;

impl TimeSlotMapper {
    pub fn to_dto(domain: &DomainTimeSlot) -> TimeSlot {
        TimeSlot {
            start_time: domain.start_time.to_string(),
            end_time: domain.end_time.to_string(),
            is_available: domain.is_available,
        }
    }

    pub fn to_dtos(slots: &[DomainTimeSlot]) -> Vec<TimeSlot> {
        slots.iter().map(Self::to_dto).collect()
    }
}
