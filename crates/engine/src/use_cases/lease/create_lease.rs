//! Create lease use case.
//!
//! Fetches the customer and vehicle, runs the aggregate constructor (which
//! enforces eligibility, the date range, and the vehicle transition), and
//! persists both the new lease and the now-leased vehicle.
//!
//! The engine provides no locking: callers must ensure at most one lease
//! creation or termination is in flight per vehicle id, or two creations
//! may both observe an available vehicle and double-lease it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fleetlease_domain::{Currency, CustomerId, Lease, LeaseId, Money, VehicleId};

use crate::infrastructure::ports::{CustomerRepo, LeaseRepo, VehicleRepo};

use super::error::LeaseError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaseRequest {
    pub customer_id: CustomerId,
    pub vehicle_id: VehicleId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub security_deposit: Decimal,
    /// Currency code for the deposit; USD when absent.
    pub deposit_currency: Option<String>,
}

/// Create lease use case.
///
/// The monthly payment is taken from the vehicle's lease rate; the request
/// only supplies the deposit.
pub struct CreateLease {
    customer_repo: Arc<dyn CustomerRepo>,
    vehicle_repo: Arc<dyn VehicleRepo>,
    lease_repo: Arc<dyn LeaseRepo>,
}

impl CreateLease {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepo>,
        vehicle_repo: Arc<dyn VehicleRepo>,
        lease_repo: Arc<dyn LeaseRepo>,
    ) -> Self {
        Self {
            customer_repo,
            vehicle_repo,
            lease_repo,
        }
    }

    /// Execute the lease creation.
    ///
    /// # Returns
    /// * `Ok(LeaseId)` - id of the new active lease; the vehicle is now leased
    /// * `Err(LeaseError)` - missing entities, domain rejection, or storage failure
    pub async fn execute(&self, request: CreateLeaseRequest) -> Result<LeaseId, LeaseError> {
        let customer = self
            .customer_repo
            .get(request.customer_id)
            .await?
            .ok_or(LeaseError::CustomerNotFound)?;
        let mut vehicle = self
            .vehicle_repo
            .get(request.vehicle_id)
            .await?
            .ok_or(LeaseError::VehicleNotFound)?;

        let deposit_currency = match request.deposit_currency {
            Some(code) => Currency::new(code)?,
            None => Currency::usd(),
        };
        let security_deposit = Money::new(request.security_deposit, deposit_currency)?;
        let monthly_payment = vehicle.monthly_lease_rate().clone();

        let lease = Lease::new(
            LeaseId::new(),
            &customer,
            &mut vehicle,
            request.start_date,
            request.end_date,
            monthly_payment,
            security_deposit,
        )?;

        self.lease_repo.save(&lease).await?;
        self.vehicle_repo.save(&vehicle).await?;

        tracing::info!(
            lease_id = %lease.id(),
            customer_id = %customer.id(),
            vehicle_id = %vehicle.id(),
            "lease created"
        );
        Ok(lease.id())
    }
}
