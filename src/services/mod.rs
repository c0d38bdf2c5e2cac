//! Services - business logic and state management
//!
//! This module contains the core business logic services:
//! - `museum` - Admission engine: catalogue, roster, charging, lottery
//! - `reporting` - End-of-day summary built from museum state

pub mod museum;
pub mod reporting;

// Re-export commonly used types
pub use museum::{AdmissionRecord, Museum};
pub use reporting::DaySummary;
