//! Tasktrack: task tracking with a CRUD HTTP API.
//!
//! This crate provides the task entity and its rules, the use-case service
//! that orchestrates them, in-memory and `PostgreSQL` stores, an axum HTTP
//! boundary, and a reqwest client for that boundary.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Task entity, status and title rules with no infrastructure
//!   dependencies
//! - **Ports**: The task repository trait
//! - **Adapters**: In-memory and Diesel-backed repositories
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, stores and use-cases
//! - [`api`]: HTTP routes over the use-cases
//! - [`client`]: HTTP client for the routes
//! - [`config`]: Server configuration

pub mod api;
pub mod client;
pub mod config;
pub mod task;
