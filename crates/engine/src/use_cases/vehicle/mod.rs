//! Vehicle use cases.

mod add_vehicle;
mod error;
mod find_available;
mod maintenance;

pub use add_vehicle::{AddVehicle, AddVehicleRequest};
pub use error::VehicleError;
pub use find_available::FindAvailableVehicles;
pub use maintenance::VehicleMaintenance;
