//! # Storage Module
//!
//! Data persistence for the backend. SQLite through sqlx holds the bearer
//! tokens used for authentication and the support requests submitted through
//! the contact form. The savings calculator itself is stateless and never
//! touches storage.
//!
//! Domain services depend on the traits in [`traits`], not on the SQLite
//! repositories directly.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{ApiTokenRepository, SupportRequestRepository};
pub use traits::{ApiTokenStorage, SupportRequestStorage};
