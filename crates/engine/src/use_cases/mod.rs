//! Use cases - user story orchestration.
//!
//! Each module holds the use cases for one aggregate area. Use cases fetch
//! entities through the repository ports, run the domain transitions, and
//! persist the results; they contain no business rules of their own.

pub mod customer;
pub mod lease;
pub mod vehicle;

pub use customer::RegisterCustomer;
pub use lease::{CollectMonthlyPayment, CreateLease, ExpireDueLeases, TerminateLease};
pub use vehicle::{AddVehicle, FindAvailableVehicles, VehicleMaintenance};
