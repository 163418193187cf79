//! # IO Module
//!
//! Interface layer between HTTP clients and the domain logic.
//!
//! Handlers translate JSON requests into domain commands, call the services
//! held in [`crate::AppState`], and translate results and domain errors back
//! into JSON bodies with matching HTTP status codes.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: The versioned REST API under `/api/v1`
//! - **Authentication**: Bearer token middleware for protected routes
//! - **Error Translation**: Domain errors become `{ "message", "code" }` bodies
//!   with 400, 401, 404 or 500 status codes

pub mod rest;
