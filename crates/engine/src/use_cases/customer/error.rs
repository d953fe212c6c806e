//! Customer operation errors.

use crate::infrastructure::ports::{CreditCheckError, RepoError};

/// Errors that can occur during customer operations.
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer with this email already exists")]
    EmailAlreadyRegistered,
    #[error("Credit check failed: {0}")]
    CreditCheck(#[from] CreditCheckError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
