//! Payroll and attendance calculation engine.
//!
//! This crate tracks employees and their daily attendance (clock-in/out) and
//! computes payroll for a pay period by applying configurable deduction and
//! tax rules, with explicit evaluation ordering and 2-decimal rounding
//! semantics throughout.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
