//! Find available vehicles use case.

use std::sync::Arc;

use fleetlease_domain::Vehicle;

use crate::infrastructure::ports::VehicleRepo;

use super::error::VehicleError;

/// Lists every vehicle currently available for leasing.
pub struct FindAvailableVehicles {
    vehicle_repo: Arc<dyn VehicleRepo>,
}

impl FindAvailableVehicles {
    pub fn new(vehicle_repo: Arc<dyn VehicleRepo>) -> Self {
        Self { vehicle_repo }
    }

    pub async fn execute(&self) -> Result<Vec<Vehicle>, VehicleError> {
        Ok(self.vehicle_repo.list_available().await?)
    }
}
