//! Money value object.
//!
//! An immutable amount + currency pair. Amounts are `rust_decimal::Decimal`
//! so lease rates and deposits carry exact cents, and every binary operation
//! insists on matching currencies. Operations return new instances; nothing
//! here mutates.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A validated currency code (non-empty, uppercased, trimmed).
///
/// The set of codes is open: the core enforces only that a code is present,
/// not that it appears in ISO 4217. Multi-currency conversion is out of
/// scope; codes exist so that mixed-currency arithmetic can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Create a validated currency code.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCurrency`] if the code is empty after
    /// trimming.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCurrency);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// The default currency for the leasing business.
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> String {
        currency.0
    }
}

/// An immutable monetary value.
///
/// # Invariants
///
/// - `amount` is never negative
/// - `add` / `subtract` require equal currencies and return new instances
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use fleetlease_domain::Money;
///
/// let rate = Money::usd(Decimal::new(50000, 2)).expect("non-negative");
/// let deposit = Money::usd(Decimal::new(100000, 2)).expect("non-negative");
/// let due = rate.add(&deposit).expect("same currency");
/// assert_eq!(due, Money::usd(Decimal::new(150000, 2)).expect("non-negative"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a monetary value in the given currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `amount` is negative.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::InvalidAmount { amount });
        }
        Ok(Self { amount, currency })
    }

    /// Create a USD monetary value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if `amount` is negative.
    pub fn usd(amount: Decimal) -> Result<Self, DomainError> {
        Self::new(amount, Currency::usd())
    }

    /// Returns the amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Add another monetary value, producing a new instance.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CurrencyMismatch`] if the currencies differ.
    pub fn add(&self, other: &Money) -> Result<Money, DomainError> {
        self.require_same_currency(other)?;
        Ok(Self {
            amount: self.amount + other.amount,
            currency: self.currency.clone(),
        })
    }

    /// Subtract another monetary value, producing a new instance.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CurrencyMismatch`] if the currencies differ,
    /// or [`DomainError::NegativeResult`] if the result would drop below
    /// zero. In both cases no new value is produced.
    pub fn subtract(&self, other: &Money) -> Result<Money, DomainError> {
        self.require_same_currency(other)?;
        let result = self.amount - other.amount;
        if result.is_sign_negative() && !result.is_zero() {
            return Err(DomainError::NegativeResult);
        }
        Ok(Self {
            amount: result,
            currency: self.currency.clone(),
        })
    }

    fn require_same_currency(&self, other: &Money) -> Result<(), DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
