//! Aggregate roots.

mod lease;

pub use lease::{Lease, LeaseStatus};
