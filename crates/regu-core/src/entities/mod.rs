//! Entity structs for all ReguNova domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! generation. Every table except `profiles` is keyed by a prefixed id and
//! scoped to a `user_id`; `profiles` uses the user id itself as its key.

mod alert;
mod compliance;
mod profile;
mod report;
mod team;
mod update;

pub use alert::Alert;
pub use compliance::ComplianceItem;
pub use profile::Profile;
pub use report::Report;
pub use team::TeamMember;
pub use update::RegulatoryUpdate;
