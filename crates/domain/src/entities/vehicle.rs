//! Vehicle entity and its availability state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::VehicleId;
use crate::value_objects::{Money, VehicleIdentificationNumber};

/// Availability of a vehicle in the fleet.
///
/// The machine is fully cyclic; no state is terminal:
///
/// ```text
/// Available -> Leased -> Available
/// Available | Leased -> Maintenance -> Available
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    Leased,
    Maintenance,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "AVAILABLE"),
            Self::Leased => write!(f, "LEASED"),
            Self::Maintenance => write!(f, "MAINTENANCE"),
        }
    }
}

/// A vehicle in the leasing fleet.
///
/// The vehicle owns its status: every transition goes through one of the
/// `mark_as_*` methods, even when a [`Lease`](crate::Lease) initiates it.
/// A lease holds the vehicle's id and borrows the vehicle for the duration
/// of a transition; it never flips the status field itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    vin: VehicleIdentificationNumber,
    make: String,
    model: String,
    year: u16,
    monthly_lease_rate: Money,
    status: VehicleStatus,
}

impl Vehicle {
    /// Create a new vehicle, available for leasing.
    pub fn new(
        id: VehicleId,
        vin: VehicleIdentificationNumber,
        make: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        monthly_lease_rate: Money,
    ) -> Self {
        Self::with_status(
            id,
            vin,
            make,
            model,
            year,
            monthly_lease_rate,
            VehicleStatus::Available,
        )
    }

    /// Reconstruct a vehicle with an explicit status (e.g., from storage).
    #[allow(clippy::too_many_arguments)]
    pub fn with_status(
        id: VehicleId,
        vin: VehicleIdentificationNumber,
        make: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        monthly_lease_rate: Money,
        status: VehicleStatus,
    ) -> Self {
        Self {
            id,
            vin,
            make: make.into(),
            model: model.into(),
            year,
            monthly_lease_rate,
            status,
        }
    }

    /// Reconstruct a vehicle from a stored availability flag.
    ///
    /// Legacy storage records availability as a boolean; `false` maps to
    /// [`VehicleStatus::Leased`]. Maintenance state cannot be expressed by
    /// the flag and must come through [`Vehicle::with_status`].
    pub fn from_availability(
        id: VehicleId,
        vin: VehicleIdentificationNumber,
        make: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        monthly_lease_rate: Money,
        is_available: bool,
    ) -> Self {
        let status = if is_available {
            VehicleStatus::Available
        } else {
            VehicleStatus::Leased
        };
        Self::with_status(id, vin, make, model, year, monthly_lease_rate, status)
    }

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn vin(&self) -> &VehicleIdentificationNumber {
        &self.vin
    }

    #[inline]
    pub fn make(&self) -> &str {
        &self.make
    }

    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[inline]
    pub fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub fn monthly_lease_rate(&self) -> &Money {
        &self.monthly_lease_rate
    }

    #[inline]
    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    /// Whether the vehicle can currently be leased.
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    /// Transition `Available -> Leased`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::VehicleNotAvailable`] if the vehicle is
    /// already leased or in maintenance; the status is left unchanged.
    pub fn mark_as_leased(&mut self) -> Result<(), DomainError> {
        if self.status != VehicleStatus::Available {
            return Err(DomainError::VehicleNotAvailable {
                status: self.status,
            });
        }
        self.status = VehicleStatus::Leased;
        Ok(())
    }

    /// Transition to `Available` from any state.
    ///
    /// Used both when a lease ends and when maintenance completes.
    pub fn mark_as_available(&mut self) {
        self.status = VehicleStatus::Available;
    }

    /// Transition to `Maintenance` from any state.
    pub fn mark_as_in_maintenance(&mut self) {
        self.status = VehicleStatus::Maintenance;
    }
}
