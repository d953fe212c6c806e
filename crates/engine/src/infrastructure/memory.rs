//! In-memory repository adapters.
//!
//! DashMap-backed implementations of the repository ports. The maps are the
//! shared arena of the domain design: leases hold ids, and use cases check
//! entities out of here, run the aggregate transition, and save the results
//! back. Values are cloned on read; saving an id overwrites the stored
//! value wholesale.
//!
//! The maps make individual calls safe from `&self`, nothing more. The
//! at-most-one in-flight lease operation per vehicle that the domain
//! requires is still the caller's responsibility.

use async_trait::async_trait;
use dashmap::DashMap;

use fleetlease_domain::{
    Customer, CustomerId, Lease, LeaseId, Vehicle, VehicleId, VehicleIdentificationNumber,
};

use super::ports::{CustomerRepo, LeaseRepo, RepoError, VehicleRepo};

#[derive(Default)]
pub struct InMemoryCustomerRepo {
    customers: DashMap<CustomerId, Customer>,
}

impl InMemoryCustomerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepo for InMemoryCustomerRepo {
    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepoError> {
        Ok(self.customers.get(&id).map(|entry| entry.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepoError> {
        Ok(self
            .customers
            .iter()
            .find(|entry| entry.email().eq_ignore_ascii_case(email))
            .map(|entry| entry.clone()))
    }

    async fn save(&self, customer: &Customer) -> Result<(), RepoError> {
        self.customers.insert(customer.id(), customer.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryVehicleRepo {
    vehicles: DashMap<VehicleId, Vehicle>,
}

impl InMemoryVehicleRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepo for InMemoryVehicleRepo {
    async fn get(&self, id: VehicleId) -> Result<Option<Vehicle>, RepoError> {
        Ok(self.vehicles.get(&id).map(|entry| entry.clone()))
    }

    async fn find_by_vin(
        &self,
        vin: &VehicleIdentificationNumber,
    ) -> Result<Option<Vehicle>, RepoError> {
        Ok(self
            .vehicles
            .iter()
            .find(|entry| entry.vin() == vin)
            .map(|entry| entry.clone()))
    }

    async fn list_available(&self) -> Result<Vec<Vehicle>, RepoError> {
        Ok(self
            .vehicles
            .iter()
            .filter(|entry| entry.is_available())
            .map(|entry| entry.clone())
            .collect())
    }

    async fn save(&self, vehicle: &Vehicle) -> Result<(), RepoError> {
        self.vehicles.insert(vehicle.id(), vehicle.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryLeaseRepo {
    leases: DashMap<LeaseId, Lease>,
}

impl InMemoryLeaseRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeaseRepo for InMemoryLeaseRepo {
    async fn get(&self, id: LeaseId) -> Result<Option<Lease>, RepoError> {
        Ok(self.leases.get(&id).map(|entry| entry.clone()))
    }

    async fn list_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Lease>, RepoError> {
        Ok(self
            .leases
            .iter()
            .filter(|entry| entry.customer_id() == customer_id)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn list_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<Lease>, RepoError> {
        Ok(self
            .leases
            .iter()
            .filter(|entry| entry.vehicle_id() == vehicle_id)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn list_active(&self) -> Result<Vec<Lease>, RepoError> {
        Ok(self
            .leases
            .iter()
            .filter(|entry| entry.is_active())
            .map(|entry| entry.clone())
            .collect())
    }

    async fn save(&self, lease: &Lease) -> Result<(), RepoError> {
        self.leases.insert(lease.id(), lease.clone());
        Ok(())
    }
}
