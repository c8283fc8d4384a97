use shared::{BookingCart, CreateBookingInput, PlanBookingResponse, SelectedService};

use crate::domain::commands::booking_plan::{BookingPlan, PlannedBooking};
use crate::domain::models::booking::format_timestamp;
use crate::domain::models::cart::{CartService, DomainCart};

pub struct CartMapper;

impl CartMapper {
    /// Category details are display-only and are dropped
    pub fn service_to_domain(dto: SelectedService) -> CartService {
        CartService {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            duration_minutes: dto.duration_minutes,
        }
    }

    pub fn to_domain(dto: BookingCart) -> DomainCart {
        let mut cart = DomainCart::new(dto.barber_shop_id, dto.barber_id);
        for service in dto.services {
            cart.add_service(Self::service_to_domain(service));
        }
        cart
    }

    pub fn planned_booking_to_dto(domain: PlannedBooking) -> CreateBookingInput {
        CreateBookingInput {
            start_time: format_timestamp(&domain.start),
            end_time: format_timestamp(&domain.end),
            user_id: domain.user_id,
            barber_id: domain.barber_id,
            barber_shop_id: domain.barber_shop_id,
            management_service_id: domain.service_id,
            notes: domain.notes,
        }
    }

    pub fn plan_to_dto(domain: BookingPlan) -> PlanBookingResponse {
        PlanBookingResponse {
            group_id: domain.group_id,
            bookings: domain.bookings.into_iter().map(Self::planned_booking_to_dto).collect(),
            total_price: domain.total_price,
            total_duration_minutes: domain.total_duration_minutes,
        }
    }
}
