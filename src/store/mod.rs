//! Persistence collaborator for the payroll engine.
//!
//! The engine's core calculation is pure; this module supplies the
//! read-then-write side: CRUD access to employees, attendance, periods,
//! configuration and payroll items, date-range queries, and the
//! calculate-and-replace operation with its per-period guard.

mod memory;

pub use memory::MemoryStore;
