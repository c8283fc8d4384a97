pub mod working_period;
pub mod booking;
pub mod time_slot;
pub mod cart;
