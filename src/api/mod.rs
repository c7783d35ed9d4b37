//! API handlers for Termas REST endpoints

pub mod availability;
pub mod bookings;
pub mod capacity;
pub mod clients;
pub mod constraints;
pub mod gift_vouchers;
pub mod health;
pub mod openapi;
pub mod products;
pub mod schedule;
