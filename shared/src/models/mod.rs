//! Domain models for the Long Chau Pharmacy Management System

mod branch;
mod export;
mod inventory;

pub use branch::*;
pub use export::*;
pub use inventory::*;
