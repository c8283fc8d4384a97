use shared::{WorkingHours, WorkingPeriod as SharedWorkingPeriod};

use crate::domain::models::time_slot::SlotError;
use crate::domain::models::working_period::{DomainWorkingHours, WorkingPeriod};

pub struct WorkingHoursMapper;

impl WorkingHoursMapper {
    /// Validate the raw clock times of a weekday-independent period
    pub fn period_to_domain(dto: &SharedWorkingPeriod) -> Result<WorkingPeriod, SlotError> {
        WorkingPeriod::parse(&dto.start_time, &dto.end_time, dto.is_active)
    }

    pub fn to_domain(dto: WorkingHours) -> Result<DomainWorkingHours, SlotError> {
        Ok(DomainWorkingHours {
            period: WorkingPeriod::parse(&dto.start_time, &dto.end_time, dto.is_active)?,
            id: dto.id,
            day_of_week: dto.day_of_week,
        })
    }

    pub fn to_dto(domain: DomainWorkingHours) -> WorkingHours {
        WorkingHours {
            id: domain.id,
            day_of_week: domain.day_of_week,
            start_time: domain.period.start_time.to_string(),
            end_time: domain.period.end_time.to_string(),
            is_active: domain.period.is_active,
        }
    }
}
