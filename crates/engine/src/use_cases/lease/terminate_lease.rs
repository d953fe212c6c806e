//! Terminate lease use case.

use std::sync::Arc;

use chrono::NaiveDate;

use fleetlease_domain::LeaseId;

use crate::infrastructure::ports::{LeaseRepo, VehicleRepo};

use super::error::LeaseError;

/// Terminate lease use case.
///
/// Orchestrates: lease and vehicle fetch, the aggregate's terminate
/// transition, and persistence of both. The same per-vehicle serialization
/// caveat as lease creation applies.
pub struct TerminateLease {
    lease_repo: Arc<dyn LeaseRepo>,
    vehicle_repo: Arc<dyn VehicleRepo>,
}

impl TerminateLease {
    pub fn new(lease_repo: Arc<dyn LeaseRepo>, vehicle_repo: Arc<dyn VehicleRepo>) -> Self {
        Self {
            lease_repo,
            vehicle_repo,
        }
    }

    /// Execute the termination.
    ///
    /// # Returns
    /// * `Ok(())` - lease terminated, vehicle released to available
    /// * `Err(LeaseError)` - missing entities, domain rejection, or storage failure
    pub async fn execute(
        &self,
        lease_id: LeaseId,
        termination_date: NaiveDate,
    ) -> Result<(), LeaseError> {
        let mut lease = self
            .lease_repo
            .get(lease_id)
            .await?
            .ok_or(LeaseError::LeaseNotFound)?;
        let mut vehicle = self
            .vehicle_repo
            .get(lease.vehicle_id())
            .await?
            .ok_or(LeaseError::VehicleNotFound)?;

        lease.terminate(termination_date, &mut vehicle)?;

        self.lease_repo.save(&lease).await?;
        self.vehicle_repo.save(&vehicle).await?;

        tracing::info!(%lease_id, %termination_date, "lease terminated");
        Ok(())
    }
}
