//! Form validation engine.
//!
//! Provides per-field rule sets, a pure-logic evaluator, message formatting,
//! and the registry of named storefront form schemas.

pub mod evaluator;
pub mod messages;
pub mod numeric;
pub mod rules;
pub mod schemas;
