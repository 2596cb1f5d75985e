pub mod alerts;
pub mod auth;
pub mod compliance;
pub mod onboard;
pub mod profile;
pub mod reports;
pub mod team;
pub mod theme;
pub mod updates;

pub use alerts::AlertCommands;
pub use auth::{AuthCommands, CredentialArgs};
pub use compliance::ComplianceCommands;
pub use onboard::{OnboardCommands, OnboardStepCommands};
pub use profile::ProfileCommands;
pub use reports::ReportCommands;
pub use team::TeamCommands;
pub use theme::ThemeCommands;
pub use updates::UpdateCommands;
