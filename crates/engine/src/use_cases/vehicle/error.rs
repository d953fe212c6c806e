//! Vehicle operation errors.

use fleetlease_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during vehicle operations.
#[derive(Debug, thiserror::Error)]
pub enum VehicleError {
    #[error("Vehicle not found")]
    VehicleNotFound,
    #[error("Vehicle with this VIN already exists")]
    VinAlreadyRegistered,
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
