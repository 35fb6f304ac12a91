//! Request middleware.
//!
//! - [`return_to_service::return_to_service_gate`] -- persists the
//!   `returnToService` navigation marker into the caller's session.

pub mod return_to_service;
