//! Customer entity.

use serde::{Deserialize, Serialize};

use crate::ids::CustomerId;

/// Minimum credit score required to lease a vehicle.
///
/// A business rule, not a configuration knob: callers that want a different
/// threshold are modelling a different business.
pub const MIN_CREDIT_SCORE_FOR_LEASING: u16 = 650;

/// A leasing customer.
///
/// Immutable in the core: eligibility is recomputed from `credit_score` on
/// every call, and a refreshed score means a new `Customer` value produced
/// by the surrounding repository, not a mutation here. Email format and
/// uniqueness are enforced by the application layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    credit_score: u16,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        credit_score: u16,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            credit_score,
        }
    }

    #[inline]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    #[inline]
    pub fn credit_score(&self) -> u16 {
        self.credit_score
    }

    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this customer may enter a lease: credit score at or above
    /// [`MIN_CREDIT_SCORE_FOR_LEASING`].
    pub fn is_eligible_for_leasing(&self) -> bool {
        self.credit_score >= MIN_CREDIT_SCORE_FOR_LEASING
    }
}
