//! Add vehicle use case.
//!
//! Validates the VIN, enforces VIN uniqueness across the fleet, and stores
//! the new vehicle as available.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use rust_decimal::Decimal;

use fleetlease_domain::{Currency, Money, Vehicle, VehicleId, VehicleIdentificationNumber};

use crate::infrastructure::ports::VehicleRepo;

use super::error::VehicleError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddVehicleRequest {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub monthly_lease_rate: Decimal,
    /// Currency code for the rate; USD when absent.
    pub currency: Option<String>,
}

/// Add vehicle use case.
pub struct AddVehicle {
    vehicle_repo: Arc<dyn VehicleRepo>,
}

impl AddVehicle {
    pub fn new(vehicle_repo: Arc<dyn VehicleRepo>) -> Self {
        Self { vehicle_repo }
    }

    /// Execute the registration of a new fleet vehicle.
    ///
    /// # Returns
    /// * `Ok(VehicleId)` - id of the stored vehicle, created available
    /// * `Err(VehicleError)` - invalid VIN or rate, duplicate VIN, or storage failure
    pub async fn execute(&self, request: AddVehicleRequest) -> Result<VehicleId, VehicleError> {
        let vin = VehicleIdentificationNumber::new(request.vin)?;

        if self.vehicle_repo.find_by_vin(&vin).await?.is_some() {
            return Err(VehicleError::VinAlreadyRegistered);
        }

        let currency = match request.currency {
            Some(code) => Currency::new(code)?,
            None => Currency::usd(),
        };
        let monthly_lease_rate = Money::new(request.monthly_lease_rate, currency)?;

        let vehicle = Vehicle::new(
            VehicleId::new(),
            vin,
            request.make,
            request.model,
            request.year,
            monthly_lease_rate,
        );
        self.vehicle_repo.save(&vehicle).await?;

        tracing::info!(vehicle_id = %vehicle.id(), vin = %vehicle.vin(), "vehicle added to fleet");
        Ok(vehicle.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockVehicleRepo;
    use fleetlease_domain::{DomainError, VehicleStatus};

    fn request(vin: &str) -> AddVehicleRequest {
        AddVehicleRequest {
            vin: vin.to_string(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2024,
            monthly_lease_rate: Decimal::new(45000, 2),
            currency: None,
        }
    }

    #[tokio::test]
    async fn adds_vehicle_as_available() {
        let mut vehicle_repo = MockVehicleRepo::new();
        vehicle_repo.expect_find_by_vin().returning(|_| Ok(None));
        vehicle_repo
            .expect_save()
            .withf(|vehicle: &Vehicle| {
                vehicle.status() == VehicleStatus::Available
                    && vehicle.monthly_lease_rate().currency().as_str() == "USD"
            })
            .returning(|_| Ok(()));

        let use_case = AddVehicle::new(Arc::new(vehicle_repo));
        let result = use_case.execute(request("1HGCM82633A123456")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_invalid_vin_before_touching_the_repo() {
        let vehicle_repo = MockVehicleRepo::new();

        let use_case = AddVehicle::new(Arc::new(vehicle_repo));
        let err = use_case
            .execute(request("123"))
            .await
            .expect_err("invalid VIN");

        assert!(matches!(
            err,
            VehicleError::Domain(DomainError::InvalidVinLength { actual: 3 })
        ));
    }

    #[tokio::test]
    async fn rejects_duplicate_vin() {
        let mut vehicle_repo = MockVehicleRepo::new();
        vehicle_repo.expect_find_by_vin().returning(|vin| {
            Ok(Some(Vehicle::new(
                VehicleId::new(),
                vin.clone(),
                "Toyota",
                "Camry",
                2024,
                Money::usd(Decimal::new(45000, 2)).expect("non-negative rate"),
            )))
        });

        let use_case = AddVehicle::new(Arc::new(vehicle_repo));
        let err = use_case
            .execute(request("1HGCM82633A123456"))
            .await
            .expect_err("duplicate VIN");

        assert!(matches!(err, VehicleError::VinAlreadyRegistered));
    }

    #[tokio::test]
    async fn rejects_negative_rate() {
        let mut vehicle_repo = MockVehicleRepo::new();
        vehicle_repo.expect_find_by_vin().returning(|_| Ok(None));

        let mut bad_rate = request("1HGCM82633A123456");
        bad_rate.monthly_lease_rate = Decimal::new(-45000, 2);

        let use_case = AddVehicle::new(Arc::new(vehicle_repo));
        let err = use_case.execute(bad_rate).await.expect_err("negative rate");

        assert!(matches!(
            err,
            VehicleError::Domain(DomainError::InvalidAmount { .. })
        ));
    }
}
