//! Rule-based AWS architecture planner.
//!
//! The [`planner`] module holds the decision engine: requirement normalization,
//! eligibility filtering, weighted scoring, per-category selection, cost
//! estimation, and alternative architectures. The [`catalog`] module owns the
//! immutable service catalog and pricing model the engine reads from.

pub mod catalog;
pub mod config;
pub mod error;
pub mod planner;
pub mod telemetry;
