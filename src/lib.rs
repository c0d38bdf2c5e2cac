//! Museum admissions library
//!
//! Models a venue that matches patron interests against an exhibit
//! catalogue, charges for paid entries, and runs a ticket lottery among
//! eligible contestants.
//!
//! Exposes modules for integration testing and binary reuse.

pub mod domain;
pub mod infra;
pub mod services;
