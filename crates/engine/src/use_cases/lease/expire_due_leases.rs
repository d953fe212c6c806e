//! Expire due leases use case.
//!
//! Periodic sweep: every active lease whose end date has passed is expired
//! and its vehicle released. A lease whose vehicle record is missing is
//! logged and skipped rather than aborting the whole sweep.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, LeaseRepo, VehicleRepo};

use super::error::LeaseError;

pub struct ExpireDueLeases {
    lease_repo: Arc<dyn LeaseRepo>,
    vehicle_repo: Arc<dyn VehicleRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ExpireDueLeases {
    pub fn new(
        lease_repo: Arc<dyn LeaseRepo>,
        vehicle_repo: Arc<dyn VehicleRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            lease_repo,
            vehicle_repo,
            clock,
        }
    }

    /// Expire every active lease that has reached its end date.
    ///
    /// # Returns
    /// * `Ok(count)` - number of leases expired in this sweep
    pub async fn execute(&self) -> Result<usize, LeaseError> {
        let today = self.clock.today();
        let mut expired = 0;

        for mut lease in self.lease_repo.list_active().await? {
            if lease.end_date() > today {
                continue;
            }

            let Some(mut vehicle) = self.vehicle_repo.get(lease.vehicle_id()).await? else {
                tracing::warn!(
                    lease_id = %lease.id(),
                    vehicle_id = %lease.vehicle_id(),
                    "skipping expiry: vehicle record missing"
                );
                continue;
            };

            lease.expire(&mut vehicle)?;
            self.lease_repo.save(&lease).await?;
            self.vehicle_repo.save(&vehicle).await?;

            tracing::info!(lease_id = %lease.id(), "lease expired");
            expired += 1;
        }

        Ok(expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockClockPort, MockLeaseRepo, MockVehicleRepo};
    use chrono::NaiveDate;
    use fleetlease_domain::{
        CustomerId, Lease, LeaseId, LeaseStatus, Money, Vehicle, VehicleId,
        VehicleIdentificationNumber, VehicleStatus,
    };
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn usd(cents: i64) -> Money {
        Money::usd(Decimal::new(cents, 2)).expect("non-negative amount")
    }

    fn active_lease(vehicle_id: VehicleId, end: NaiveDate) -> Lease {
        Lease::rehydrate(
            LeaseId::new(),
            CustomerId::new(),
            vehicle_id,
            date(2023, 1, 1),
            end,
            usd(49900),
            usd(100000),
            LeaseStatus::Active,
            None,
        )
    }

    fn leased_vehicle(id: VehicleId) -> Vehicle {
        let mut vehicle = Vehicle::new(
            id,
            VehicleIdentificationNumber::new("1HGCM82633A123456").expect("valid VIN"),
            "Honda",
            "Accord",
            2023,
            usd(49900),
        );
        vehicle.mark_as_leased().expect("available vehicle");
        vehicle
    }

    #[tokio::test]
    async fn expires_only_leases_past_their_end_date() {
        let mut lease_repo = MockLeaseRepo::new();
        let mut vehicle_repo = MockVehicleRepo::new();
        let mut clock = MockClockPort::new();

        let due_vehicle = VehicleId::new();
        let current_vehicle = VehicleId::new();

        clock.expect_today().returning(|| date(2024, 2, 1));
        lease_repo.expect_list_active().returning(move || {
            Ok(vec![
                active_lease(due_vehicle, date(2024, 1, 1)),
                active_lease(current_vehicle, date(2025, 1, 1)),
            ])
        });
        vehicle_repo
            .expect_get()
            .returning(|id| Ok(Some(leased_vehicle(id))));
        lease_repo
            .expect_save()
            .withf(|lease: &Lease| lease.status() == LeaseStatus::Expired)
            .times(1)
            .returning(|_| Ok(()));
        vehicle_repo
            .expect_save()
            .withf(|vehicle: &Vehicle| vehicle.status() == VehicleStatus::Available)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ExpireDueLeases::new(
            Arc::new(lease_repo),
            Arc::new(vehicle_repo),
            Arc::new(clock),
        );
        let expired = use_case.execute().await.expect("sweep succeeds");

        assert_eq!(expired, 1);
    }

    #[tokio::test]
    async fn missing_vehicle_is_skipped_not_fatal() {
        let mut lease_repo = MockLeaseRepo::new();
        let mut vehicle_repo = MockVehicleRepo::new();
        let mut clock = MockClockPort::new();

        clock.expect_today().returning(|| date(2024, 2, 1));
        lease_repo
            .expect_list_active()
            .returning(|| Ok(vec![active_lease(VehicleId::new(), date(2024, 1, 1))]));
        vehicle_repo.expect_get().returning(|_| Ok(None));

        let use_case = ExpireDueLeases::new(
            Arc::new(lease_repo),
            Arc::new(vehicle_repo),
            Arc::new(clock),
        );
        let expired = use_case.execute().await.expect("sweep succeeds");

        assert_eq!(expired, 0);
    }

    #[tokio::test]
    async fn nothing_due_means_no_writes() {
        let mut lease_repo = MockLeaseRepo::new();
        let vehicle_repo = MockVehicleRepo::new();
        let mut clock = MockClockPort::new();

        clock.expect_today().returning(|| date(2023, 6, 1));
        lease_repo
            .expect_list_active()
            .returning(|| Ok(vec![active_lease(VehicleId::new(), date(2024, 1, 1))]));

        let use_case = ExpireDueLeases::new(
            Arc::new(lease_repo),
            Arc::new(vehicle_repo),
            Arc::new(clock),
        );
        let expired = use_case.execute().await.expect("sweep succeeds");

        assert_eq!(expired, 0);
    }
}
