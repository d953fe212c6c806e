//! FleetLease engine library.
//!
//! Orchestration around the `fleetlease-domain` core:
//!
//! - `use_cases/` - one struct per user story, composing the domain
//!   aggregates with repository and gateway ports
//! - `infrastructure/` - port traits plus the in-memory and simulated
//!   adapters that implement them
//!
//! The engine supplies what the core deliberately omits: fetching and
//! persisting entities, logging, and the external credit-check and payment
//! collaborators. It does not add locking; callers must serialize lease
//! operations per vehicle (one in-flight create/terminate per vehicle id).

pub mod infrastructure;
pub mod use_cases;
