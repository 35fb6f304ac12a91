//! Domain logic for the cell move service.
//!
//! This crate has zero internal dependencies so it can be used by the API
//! layer and any future CLI or batch tooling. It holds the date/time
//! normalization seam between the upstream offender API's wire format and
//! the display formats the cell move screens use, plus the shared error
//! taxonomy.

pub mod datetime;
pub mod error;
