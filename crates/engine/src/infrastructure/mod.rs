//! External dependency implementations: port traits and their adapters.

pub mod clock;
pub mod credit;
pub mod memory;
pub mod payment;
pub mod ports;
