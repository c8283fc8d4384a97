//! Conversions between the public DTOs of the `shared` crate and domain types.

pub mod booking_mapper;
pub mod cart_mapper;
pub mod time_slot_mapper;
pub mod working_hours_mapper;

pub use booking_mapper::BookingMapper;
pub use cart_mapper::CartMapper;
pub use time_slot_mapper::TimeSlotMapper;
pub use working_hours_mapper::WorkingHoursMapper;
