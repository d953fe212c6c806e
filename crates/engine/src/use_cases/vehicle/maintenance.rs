//! Vehicle maintenance use cases.
//!
//! Maintenance transitions are unconditional in the domain (any state can
//! enter maintenance, completion always returns to available), so the only
//! orchestration here is fetch-transition-save.

use std::sync::Arc;

use fleetlease_domain::VehicleId;

use crate::infrastructure::ports::VehicleRepo;

use super::error::VehicleError;

/// Send a vehicle to maintenance / return it to service.
pub struct VehicleMaintenance {
    vehicle_repo: Arc<dyn VehicleRepo>,
}

impl VehicleMaintenance {
    pub fn new(vehicle_repo: Arc<dyn VehicleRepo>) -> Self {
        Self { vehicle_repo }
    }

    /// Move the vehicle into maintenance, regardless of current state.
    pub async fn send_to_maintenance(&self, vehicle_id: VehicleId) -> Result<(), VehicleError> {
        let mut vehicle = self
            .vehicle_repo
            .get(vehicle_id)
            .await?
            .ok_or(VehicleError::VehicleNotFound)?;

        vehicle.mark_as_in_maintenance();
        self.vehicle_repo.save(&vehicle).await?;

        tracing::info!(%vehicle_id, "vehicle sent to maintenance");
        Ok(())
    }

    /// Complete maintenance and make the vehicle leasable again.
    pub async fn return_to_service(&self, vehicle_id: VehicleId) -> Result<(), VehicleError> {
        let mut vehicle = self
            .vehicle_repo
            .get(vehicle_id)
            .await?
            .ok_or(VehicleError::VehicleNotFound)?;

        vehicle.mark_as_available();
        self.vehicle_repo.save(&vehicle).await?;

        tracing::info!(%vehicle_id, "vehicle returned to service");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockVehicleRepo;
    use fleetlease_domain::{Money, Vehicle, VehicleIdentificationNumber, VehicleStatus};
    use mockall::predicate::*;
    use rust_decimal::Decimal;

    fn test_vehicle(id: VehicleId) -> Vehicle {
        Vehicle::new(
            id,
            VehicleIdentificationNumber::new("1HGCM82633A123456").expect("valid VIN"),
            "Toyota",
            "Camry",
            2024,
            Money::usd(Decimal::new(45000, 2)).expect("non-negative rate"),
        )
    }

    #[tokio::test]
    async fn sends_vehicle_to_maintenance() {
        let mut vehicle_repo = MockVehicleRepo::new();
        let vehicle_id = VehicleId::new();

        vehicle_repo
            .expect_get()
            .with(eq(vehicle_id))
            .returning(move |id| Ok(Some(test_vehicle(id))));
        vehicle_repo
            .expect_save()
            .withf(|vehicle: &Vehicle| vehicle.status() == VehicleStatus::Maintenance)
            .returning(|_| Ok(()));

        let use_case = VehicleMaintenance::new(Arc::new(vehicle_repo));
        assert!(use_case.send_to_maintenance(vehicle_id).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_vehicle_is_reported() {
        let mut vehicle_repo = MockVehicleRepo::new();
        vehicle_repo.expect_get().returning(|_| Ok(None));

        let use_case = VehicleMaintenance::new(Arc::new(vehicle_repo));
        let err = use_case
            .send_to_maintenance(VehicleId::new())
            .await
            .expect_err("missing vehicle");

        assert!(matches!(err, VehicleError::VehicleNotFound));
    }
}
