//! Step definitions for task status update scenarios.

pub mod then;
pub mod when;
