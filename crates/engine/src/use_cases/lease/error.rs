//! Lease operation errors.

use fleetlease_domain::DomainError;

use crate::infrastructure::ports::{PaymentError, RepoError};

/// Errors that can occur during lease operations.
#[derive(Debug, thiserror::Error)]
pub enum LeaseError {
    #[error("Customer not found")]
    CustomerNotFound,
    #[error("Vehicle not found")]
    VehicleNotFound,
    #[error("Lease not found")]
    LeaseNotFound,
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
