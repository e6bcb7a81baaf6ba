//! Domain logic for the storefront backend.
//!
//! Everything here is pure: no database access, no HTTP, no logging. The API
//! crate wires these pieces to request handlers.

pub mod error;
pub mod validation;
