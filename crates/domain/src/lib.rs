//! FleetLease domain core.
//!
//! The one place where leasing business rules live: the [`Lease`] aggregate
//! and its lifecycle, the [`Vehicle`] availability state machine, the
//! [`Customer`] eligibility rule, and the supporting value objects
//! ([`Money`], [`VehicleIdentificationNumber`]).
//!
//! The crate is pure and synchronous: no I/O, no logging, no async. Every
//! failure is a typed [`DomainError`] returned before any state is mutated.
//! Fetching and persisting entities, transport, and third-party integrations
//! all live in the engine crate around this core.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Lease, LeaseStatus};
pub use entities::{Customer, Vehicle, VehicleStatus, MIN_CREDIT_SCORE_FOR_LEASING};
pub use error::DomainError;
pub use ids::{CustomerId, LeaseId, VehicleId};
pub use value_objects::{Currency, Money, VehicleIdentificationNumber};
