//! Payroll configuration loading and management.
//!
//! This module provides the strongly-typed rule configuration (deduction and
//! tax rule lists) and a loader for reading it from a YAML file. Rules are
//! validated and normalized at load time, not at calculation time.
//!
//! # Example
//!
//! ```no_run
//! use nomina_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Currency: {}", loader.config().currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, Rule, RuleBase, RuleKind};
