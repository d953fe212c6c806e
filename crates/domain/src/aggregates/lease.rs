//! Lease aggregate - binds a customer and a vehicle for a date range.
//!
//! # Ownership of the vehicle
//!
//! A lease stores the vehicle's *id*, not the vehicle. The repositories are
//! the shared arena that owns vehicles; callers fetch the vehicle and lend
//! it to the aggregate (`&mut Vehicle`) for exactly the duration of a
//! transition. All status flips go through [`Vehicle`]'s own methods, so
//! "only the vehicle mutates its own status" holds even though the lease
//! initiates the call.
//!
//! # Creation vs. rehydration
//!
//! [`Lease::new`] is the only entry point that flips a vehicle to leased;
//! it is for genuinely new leases. [`Lease::rehydrate`] rebuilds a lease
//! from storage and never touches a vehicle - the stored vehicle status is
//! already correct, and re-running the transition would either fail (the
//! vehicle already shows leased) or force-lease a vehicle for a lease that
//! ended long ago.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entities::{Customer, Vehicle};
use crate::error::DomainError;
use crate::ids::{CustomerId, LeaseId, VehicleId};
use crate::value_objects::Money;

/// Lifecycle status of a lease.
///
/// `Active` is initial; `Terminated` and `Expired` are terminal for the
/// aggregate (the vehicle cycles back to available, the lease does not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaseStatus {
    Active,
    Terminated,
    Expired,
}

impl fmt::Display for LeaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Terminated => write!(f, "TERMINATED"),
            Self::Expired => write!(f, "EXPIRED"),
        }
    }
}

/// The lease aggregate root.
///
/// # Invariants
///
/// - the customer was eligible at creation time
/// - `start_date < end_date` strictly
/// - `termination_date` is present iff status is `Terminated`, and never
///   precedes `start_date`
/// - every lease status transition drives exactly one vehicle status
///   transition, and a rejected transition mutates nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    id: LeaseId,
    customer_id: CustomerId,
    vehicle_id: VehicleId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    monthly_payment: Money,
    security_deposit: Money,
    status: LeaseStatus,
    termination_date: Option<NaiveDate>,
}

impl Lease {
    /// Create a new active lease, flipping the vehicle to leased.
    ///
    /// Validation order matches the failure taxonomy: customer eligibility,
    /// then date range, then the vehicle transition. The vehicle is
    /// untouched unless every check before it passes.
    ///
    /// # Errors
    ///
    /// - [`DomainError::CustomerNotEligible`] if the customer's credit
    ///   score is below the leasing threshold
    /// - [`DomainError::InvalidDateRange`] unless `start_date < end_date`
    /// - [`DomainError::VehicleNotAvailable`] if the vehicle is already
    ///   leased or in maintenance
    pub fn new(
        id: LeaseId,
        customer: &Customer,
        vehicle: &mut Vehicle,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_payment: Money,
        security_deposit: Money,
    ) -> Result<Self, DomainError> {
        if !customer.is_eligible_for_leasing() {
            return Err(DomainError::CustomerNotEligible {
                credit_score: customer.credit_score(),
            });
        }
        if start_date >= end_date {
            return Err(DomainError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        vehicle.mark_as_leased()?;

        Ok(Self {
            id,
            customer_id: customer.id(),
            vehicle_id: vehicle.id(),
            start_date,
            end_date,
            monthly_payment,
            security_deposit,
            status: LeaseStatus::Active,
            termination_date: None,
        })
    }

    /// Rebuild a lease from storage without re-running creation effects.
    ///
    /// No eligibility or date re-validation, and no vehicle transition:
    /// persisted state is taken as-is. Persistence adapters are the only
    /// intended callers.
    #[allow(clippy::too_many_arguments)]
    pub fn rehydrate(
        id: LeaseId,
        customer_id: CustomerId,
        vehicle_id: VehicleId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_payment: Money,
        security_deposit: Money,
        status: LeaseStatus,
        termination_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            customer_id,
            vehicle_id,
            start_date,
            end_date,
            monthly_payment,
            security_deposit,
            status,
            termination_date,
        }
    }

    #[inline]
    pub fn id(&self) -> LeaseId {
        self.id
    }

    #[inline]
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    #[inline]
    pub fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }

    #[inline]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[inline]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    #[inline]
    pub fn monthly_payment(&self) -> &Money {
        &self.monthly_payment
    }

    #[inline]
    pub fn security_deposit(&self) -> &Money {
        &self.security_deposit
    }

    #[inline]
    pub fn status(&self) -> LeaseStatus {
        self.status
    }

    #[inline]
    pub fn termination_date(&self) -> Option<NaiveDate> {
        self.termination_date
    }

    pub fn is_active(&self) -> bool {
        self.status == LeaseStatus::Active
    }

    /// Terminate the lease early and release the vehicle.
    ///
    /// # Errors
    ///
    /// - [`DomainError::LeaseNotActive`] unless the lease is active
    /// - [`DomainError::TerminationBeforeStart`] if `termination_date`
    ///   precedes the lease start
    ///
    /// On error neither the lease nor the vehicle changes.
    pub fn terminate(
        &mut self,
        termination_date: NaiveDate,
        vehicle: &mut Vehicle,
    ) -> Result<(), DomainError> {
        debug_assert_eq!(vehicle.id(), self.vehicle_id, "wrong vehicle for lease");

        if self.status != LeaseStatus::Active {
            return Err(DomainError::LeaseNotActive {
                status: self.status,
            });
        }
        if termination_date < self.start_date {
            return Err(DomainError::TerminationBeforeStart {
                termination: termination_date,
                start: self.start_date,
            });
        }

        self.status = LeaseStatus::Terminated;
        self.termination_date = Some(termination_date);
        vehicle.mark_as_available();
        Ok(())
    }

    /// Expire the lease at its natural end and release the vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::LeaseNotActive`] unless the lease is active.
    pub fn expire(&mut self, vehicle: &mut Vehicle) -> Result<(), DomainError> {
        debug_assert_eq!(vehicle.id(), self.vehicle_id, "wrong vehicle for lease");

        if self.status != LeaseStatus::Active {
            return Err(DomainError::LeaseNotActive {
                status: self.status,
            });
        }

        self.status = LeaseStatus::Expired;
        vehicle.mark_as_available();
        Ok(())
    }

    /// Whole calendar months of payments left as of `current_date`.
    ///
    /// Zero for ended leases. Otherwise the number of fully elapsed months
    /// between `current_date` and the termination date (if recorded) or the
    /// end date, clamped at zero. A partial trailing month does not count:
    /// from 2023-06-15 to 2024-01-01 there are 6 remaining payments, not 7.
    pub fn calculate_remaining_payments(&self, current_date: NaiveDate) -> u32 {
        if self.status != LeaseStatus::Active {
            return 0;
        }
        let until = self.termination_date.unwrap_or(self.end_date);
        let months = months_between(current_date, until);
        months.max(0) as u32
    }
}

/// Signed count of fully elapsed calendar months from `start` to `end`.
/// A trailing partial month (end day-of-month before the start's) is not
/// counted.
fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let raw = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() {
        raw - 1
    } else {
        raw
    }
}
