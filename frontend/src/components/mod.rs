pub mod available_slots;
pub mod booking_controls;
pub mod slider;
