pub mod alerts;
pub mod auth;
pub mod compliance;
pub mod dashboard;
pub mod dispatch;
pub mod onboard;
pub mod profile;
pub mod reports;
pub mod shared;
pub mod subscribe;
pub mod team;
pub mod theme;
pub mod updates;
