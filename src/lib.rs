//! Shift Wage Engine
//!
//! This crate computes pay for registered work shifts: the holiday wage
//! multiplier, automatic break time, gross wage, statutory deductions and
//! monthly statistics.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
pub mod store;
pub mod workflow;
