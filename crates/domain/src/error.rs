//! Unified error type for the domain core.
//!
//! Every rejected operation in the core maps to exactly one variant here.
//! Errors are signalled before any field is mutated, so a failed call never
//! leaves an aggregate half-transitioned.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::aggregates::LeaseStatus;
use crate::entities::VehicleStatus;
use crate::value_objects::Currency;

/// Unified error type for domain operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // === Validation (construction-time) ===
    /// Money amount is negative.
    #[error("money amount cannot be negative (got {amount})")]
    InvalidAmount { amount: Decimal },

    /// Currency code is empty.
    #[error("currency code is required")]
    InvalidCurrency,

    /// VIN is empty or absent.
    #[error("VIN is required")]
    MissingVin,

    /// VIN is present but not exactly 17 characters.
    #[error("VIN must be exactly 17 characters (got {actual})")]
    InvalidVinLength { actual: usize },

    /// Customer's credit score is below the leasing threshold.
    #[error("customer is not eligible for leasing (credit score {credit_score})")]
    CustomerNotEligible { credit_score: u16 },

    /// Lease end date does not fall strictly after its start date.
    #[error("lease end date must be after start date ({start} >= {end})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    // === State transitions ===
    /// Vehicle cannot be leased from its current status.
    #[error("vehicle is not available for leasing (status {status})")]
    VehicleNotAvailable { status: VehicleStatus },

    /// Lease transition attempted on a lease that is not active.
    #[error("only active leases can be terminated or expired (status {status})")]
    LeaseNotActive { status: LeaseStatus },

    /// Termination date falls before the lease started.
    #[error("termination date {termination} cannot be before lease start date {start}")]
    TerminationBeforeStart {
        termination: NaiveDate,
        start: NaiveDate,
    },

    // === Money arithmetic ===
    /// Binary Money operation across two different currencies.
    #[error("cannot combine money in {left} with money in {right}")]
    CurrencyMismatch { left: Currency, right: Currency },

    /// Money subtraction would have produced a negative amount.
    #[error("money subtraction result cannot be negative")]
    NegativeResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vin_length_message_names_actual_length() {
        let err = DomainError::InvalidVinLength { actual: 3 };
        assert_eq!(err.to_string(), "VIN must be exactly 17 characters (got 3)");
    }

    #[test]
    fn eligibility_message_names_score() {
        let err = DomainError::CustomerNotEligible { credit_score: 640 };
        assert!(err.to_string().contains("640"));
    }

    #[test]
    fn currency_mismatch_names_both_currencies() {
        let err = DomainError::CurrencyMismatch {
            left: Currency::usd(),
            right: Currency::new("EUR").expect("valid code"),
        };
        let msg = err.to_string();
        assert!(msg.contains("USD"));
        assert!(msg.contains("EUR"));
    }
}
