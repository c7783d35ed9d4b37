//! Data models for Termas

pub mod availability;
pub mod booking;
pub mod capacity;
pub mod client;
pub mod constraint;
pub mod gift_voucher;
pub mod product;
pub mod schedule;

// Re-export commonly used types
pub use availability::{Availability, AvailabilityKind, AvailabilityRange};
pub use booking::{Booking, BookingDetail, BookingLog};
pub use capacity::Capacity;
pub use client::Client;
pub use constraint::{Constraint, ConstraintRange};
pub use gift_voucher::GiftVoucher;
pub use product::{BathType, MassageType, Product, ProductBath};
pub use schedule::{DaySchedule, ScheduleSlotSummary};
