//! # Domain Module
//!
//! Business logic for the Budgetnik backend, independent of HTTP and storage.
//!
//! ## Module Organization
//!
//! - **calculator_service**: The savings goal calculator and its clock
//! - **support_service**: FAQ content and support contact requests
//! - **auth_service**: Bearer token verification
//! - **commands**: Internal command/result types used by the services
//! - **models**: Domain entities and error types
//!
//! ## Business Rules
//!
//! - Money is always an exact decimal with two fractional digits
//! - The savings plan never under-funds a goal (monthly amounts round up)
//! - Contact requests need an email address, a message of at least ten
//!   characters, a name and a subject, checked in that order

pub mod auth_service;
pub mod calculator_service;
pub mod commands;
pub mod models;
pub mod support_service;

pub use auth_service::*;
pub use calculator_service::*;
pub use commands::*;
pub use support_service::*;
