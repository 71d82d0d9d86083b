//! In-memory daily transaction ledger.
//!
//! Raw records are validated and normalized to exact decimals, stored with
//! per-day running totals, and aggregated into totals, averages, medians and
//! cached per-day statistics.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
