//! Customer use cases.

mod error;
mod register_customer;

pub use error::CustomerError;
pub use register_customer::{RegisterCustomer, RegisterCustomerRequest};
