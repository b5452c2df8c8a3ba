//! Task tracking for tasktrack.
//!
//! This module owns the task entity, its status transition rules, and the
//! use-cases that create, update, re-status, delete, and list tasks. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use-case services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
