//! Register customer use case.
//!
//! Enforces email uniqueness (an application-layer rule, deliberately not
//! part of the domain core) and fetches a credit score from the bureau when
//! the request does not carry one.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use fleetlease_domain::{Customer, CustomerId};

use crate::infrastructure::ports::{CreditCheckPort, CustomerRepo};

use super::error::CustomerError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    /// Known credit score; when absent the bureau is consulted.
    pub credit_score: Option<u16>,
}

/// Register customer use case.
///
/// Orchestrates: email uniqueness check, credit score lookup, persistence.
pub struct RegisterCustomer {
    customer_repo: Arc<dyn CustomerRepo>,
    credit_check: Arc<dyn CreditCheckPort>,
}

impl RegisterCustomer {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepo>,
        credit_check: Arc<dyn CreditCheckPort>,
    ) -> Self {
        Self {
            customer_repo,
            credit_check,
        }
    }

    /// Execute the registration.
    ///
    /// # Returns
    /// * `Ok(CustomerId)` - id of the newly registered customer
    /// * `Err(CustomerError)` - duplicate email, bureau failure, or storage failure
    pub async fn execute(
        &self,
        request: RegisterCustomerRequest,
    ) -> Result<CustomerId, CustomerError> {
        if self
            .customer_repo
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(CustomerError::EmailAlreadyRegistered);
        }

        let customer_id = CustomerId::new();
        let credit_score = match request.credit_score {
            Some(score) => score,
            None => self.credit_check.check_credit_score(customer_id).await?,
        };

        let customer = Customer::new(
            customer_id,
            request.first_name,
            request.last_name,
            request.email,
            request.phone_number,
            credit_score,
        );
        self.customer_repo.save(&customer).await?;

        tracing::info!(%customer_id, credit_score, "customer registered");
        Ok(customer_id)
    }
}
