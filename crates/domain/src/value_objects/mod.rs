//! Value objects - immutable, validated-by-construction values.

mod money;
mod vin;

pub use money::{Currency, Money};
pub use vin::VehicleIdentificationNumber;
