//! Data models for the cloud atlas
//!
//! This module contains the core data structures:
//! - Altitude band enum and its display metadata
//! - Cloud records and the fixture catalog

pub mod altitude;
pub mod cloud;

// Re-exports for convenient access
pub use altitude::{BAND_COUNT, CloudAltitude};
pub use cloud::{Catalog, Cloud};
