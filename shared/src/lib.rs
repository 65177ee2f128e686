//! Shared types and models for the Long Chau Pharmacy Management System
//!
//! This crate contains types shared between the export engine, the browser
//! bindings (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
