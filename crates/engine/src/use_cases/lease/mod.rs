//! Lease use cases.

mod collect_payment;
mod create_lease;
mod error;
mod expire_due_leases;
mod terminate_lease;

pub use collect_payment::CollectMonthlyPayment;
pub use create_lease::{CreateLease, CreateLeaseRequest};
pub use error::LeaseError;
pub use expire_due_leases::ExpireDueLeases;
pub use terminate_lease::TerminateLease;
