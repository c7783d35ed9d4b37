//! Repository layer for database operations

pub mod availability;
pub mod bookings;
pub mod capacity;
pub mod clients;
pub mod constraints;
pub mod gift_vouchers;
pub mod products;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub clients: clients::ClientsRepository,
    pub products: products::ProductsRepository,
    pub bookings: bookings::BookingsRepository,
    pub gift_vouchers: gift_vouchers::GiftVouchersRepository,
    pub availability: availability::AvailabilityRepository,
    pub constraints: constraints::ConstraintsRepository,
    pub capacity: capacity::CapacityRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            clients: clients::ClientsRepository::new(pool.clone()),
            products: products::ProductsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            gift_vouchers: gift_vouchers::GiftVouchersRepository::new(pool.clone()),
            availability: availability::AvailabilityRepository::new(pool.clone()),
            constraints: constraints::ConstraintsRepository::new(pool.clone()),
            capacity: capacity::CapacityRepository::new(pool.clone()),
            pool,
        }
    }
}
