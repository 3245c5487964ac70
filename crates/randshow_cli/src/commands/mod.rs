//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer; diagnostics go through `tracing`.

pub mod check;
pub mod distr;
pub mod histogram;
pub mod raw;
pub mod sample;
