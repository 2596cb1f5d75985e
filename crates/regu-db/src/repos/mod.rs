//! Repository modules implementing user-scoped operations for all ReguNova entities.
//!
//! Each module adds methods to `ReguService` via `impl ReguService` blocks.
//! Every query filters on the service's user id.

pub mod alert;
pub mod compliance;
pub mod profile;
pub mod report;
pub mod team;
pub mod update;
