//! Vehicle Identification Number value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Required VIN length per the standard 17-character format.
const VIN_LENGTH: usize = 17;

/// A validated Vehicle Identification Number (exactly 17 characters).
///
/// Equality is by value; two VINs with the same characters identify the
/// same physical vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VehicleIdentificationNumber(String);

impl VehicleIdentificationNumber {
    /// Create a validated VIN.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MissingVin`] if the value is empty after trimming
    /// - [`DomainError::InvalidVinLength`] if it is not exactly 17 characters
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingVin);
        }
        if trimmed.chars().count() != VIN_LENGTH {
            return Err(DomainError::InvalidVinLength {
                actual: trimmed.chars().count(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the VIN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleIdentificationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for VehicleIdentificationNumber {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<VehicleIdentificationNumber> for String {
    fn from(vin: VehicleIdentificationNumber) -> String {
        vin.0
    }
}
