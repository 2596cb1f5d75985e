//! # regu-core
//!
//! Core types, ID generation, and error types for ReguNova.
//!
//! This crate provides the foundational types shared across all ReguNova crates:
//! - Entity structs for all domain objects (compliance items, alerts, reports, etc.)
//! - Status and category enums with storage string mappings
//! - Onboarding step model, per-step form validation, and completion derivation
//! - ID prefix constants
//! - The domain-level validation error
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod onboarding;
pub mod responses;
