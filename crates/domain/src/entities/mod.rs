//! Domain entities.

mod customer;
mod vehicle;

pub use customer::{Customer, MIN_CREDIT_SCORE_FOR_LEASING};
pub use vehicle::{Vehicle, VehicleStatus};
