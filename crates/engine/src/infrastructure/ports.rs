//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Ports exist for:
//! - Persistence (in-memory today, a database tomorrow)
//! - Credit checks (bureau API)
//! - Payment processing (payment provider API)
//! - Clock (for testing the expiry sweep)
//!
//! Repositories return fully-reconstructed domain values (Money, VIN, and
//! statuses already parsed) or `Ok(None)`; partial objects never cross this
//! boundary.

use async_trait::async_trait;
use chrono::NaiveDate;

use fleetlease_domain::{
    Customer, CustomerId, Lease, LeaseId, Money, Vehicle, VehicleId,
    VehicleIdentificationNumber,
};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found")]
    NotFound,
    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CreditCheckError {
    #[error("Credit bureau unavailable: {0}")]
    Unavailable(String),
    #[error("No credit record for customer")]
    NoRecord,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment declined: {reason}")]
    Declined { reason: String },
    #[error("Payment provider unavailable")]
    Unavailable,
}

// =============================================================================
// Infrastructure Types
// =============================================================================

/// Proof of a processed payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub transaction_id: String,
}

// =============================================================================
// Repository Ports (one per aggregate)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepo: Send + Sync {
    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepoError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepoError>;
    async fn save(&self, customer: &Customer) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepo: Send + Sync {
    async fn get(&self, id: VehicleId) -> Result<Option<Vehicle>, RepoError>;
    async fn find_by_vin(
        &self,
        vin: &VehicleIdentificationNumber,
    ) -> Result<Option<Vehicle>, RepoError>;
    async fn list_available(&self) -> Result<Vec<Vehicle>, RepoError>;
    async fn save(&self, vehicle: &Vehicle) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaseRepo: Send + Sync {
    async fn get(&self, id: LeaseId) -> Result<Option<Lease>, RepoError>;
    async fn list_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Lease>, RepoError>;
    async fn list_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<Lease>, RepoError>;
    async fn list_active(&self) -> Result<Vec<Lease>, RepoError>;
    async fn save(&self, lease: &Lease) -> Result<(), RepoError>;
}

// =============================================================================
// External Collaborator Ports
// =============================================================================

/// Credit bureau lookup. The engine only consumes the returned score
/// through `Customer::is_eligible_for_leasing`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreditCheckPort: Send + Sync {
    async fn check_credit_score(&self, customer_id: CustomerId) -> Result<u16, CreditCheckError>;
}

/// Payment provider. Consumes Money values produced by the lease; the
/// domain core never calls this itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    async fn process_payment(
        &self,
        customer_id: CustomerId,
        amount: &Money,
        description: &str,
    ) -> Result<PaymentReceipt, PaymentError>;
}

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        assert_eq!(RepoError::NotFound.to_string(), "Not found");
        assert_eq!(
            RepoError::Storage("timeout".to_string()).to_string(),
            "Storage error: timeout"
        );
        assert_eq!(
            CreditCheckError::Unavailable("503".to_string()).to_string(),
            "Credit bureau unavailable: 503"
        );
        assert_eq!(
            CreditCheckError::NoRecord.to_string(),
            "No credit record for customer"
        );
        assert_eq!(
            PaymentError::Declined {
                reason: "insufficient funds".to_string()
            }
            .to_string(),
            "Payment declined: insufficient funds"
        );
        assert_eq!(
            PaymentError::Unavailable.to_string(),
            "Payment provider unavailable"
        );
    }
}
