//! In-memory store.
//!
//! Keeps all records behind a single `RwLock`, with a per-period mutex for
//! the calculate operation so concurrent recalculations of the same period
//! cannot interleave their read-then-write cycles. Item replacement happens
//! in one write-lock critical section: a failed calculation leaves the
//! previous items untouched.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calculation::calculate_period_items;
use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, PayPeriod, PayrollItem, PeriodStatus};

#[derive(Debug, Default)]
struct StoreInner {
    // Vecs keep insertion order; reports rely on it for stable ranking.
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    periods: Vec<PayPeriod>,
    items: HashMap<Uuid, Vec<PayrollItem>>,
    config: Option<PayrollConfig>,
}

/// Thread-safe in-memory persistence store.
///
/// # Example
///
/// ```
/// use nomina_engine::store::MemoryStore;
///
/// let store = MemoryStore::with_default_config();
/// assert!(store.config().is_ok());
/// assert!(store.list_employees().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
    calc_guards: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl MemoryStore {
    /// Creates an empty store with no configuration record.
    ///
    /// Calculation against such a store fails with
    /// [`EngineError::MissingConfiguration`] until a configuration is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the default configuration, matching the
    /// bootstrap behavior of the application (currency "L", no rules).
    pub fn with_default_config() -> Self {
        let store = Self::new();
        store.set_config(PayrollConfig::default());
        store
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    // ---- employees ----

    /// Inserts a new employee after validating its rate fields.
    pub fn insert_employee(&self, employee: Employee) -> EngineResult<()> {
        employee.validate()?;
        self.write().employees.push(employee);
        Ok(())
    }

    /// Replaces an existing employee record.
    pub fn update_employee(&self, employee: Employee) -> EngineResult<()> {
        employee.validate()?;
        let mut inner = self.write();
        match inner.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => {
                *slot = employee;
                Ok(())
            }
            None => Err(EngineError::EmployeeNotFound { id: employee.id }),
        }
    }

    /// Fetches an employee by id.
    pub fn get_employee(&self, id: Uuid) -> EngineResult<Employee> {
        self.read()
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    /// Returns all employees in insertion order.
    pub fn list_employees(&self) -> Vec<Employee> {
        self.read().employees.clone()
    }

    /// Returns employees whose name or position contains the query,
    /// case-insensitively.
    pub fn search_employees(&self, query: &str) -> Vec<Employee> {
        let needle = query.to_lowercase();
        self.read()
            .employees
            .iter()
            .filter(|e| {
                e.first_name.to_lowercase().contains(&needle)
                    || e.last_name.to_lowercase().contains(&needle)
                    || e.position.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Removes an employee and all attendance records they own.
    pub fn remove_employee(&self, id: Uuid) -> EngineResult<()> {
        let mut inner = self.write();
        let before = inner.employees.len();
        inner.employees.retain(|e| e.id != id);
        if inner.employees.len() == before {
            return Err(EngineError::EmployeeNotFound { id });
        }
        inner.attendance.retain(|a| a.employee_id != id);
        Ok(())
    }

    // ---- attendance ----

    /// Inserts an attendance record, verifying the employee exists.
    pub fn insert_attendance(&self, record: AttendanceRecord) -> EngineResult<()> {
        let mut inner = self.write();
        if !inner.employees.iter().any(|e| e.id == record.employee_id) {
            return Err(EngineError::EmployeeNotFound {
                id: record.employee_id,
            });
        }
        inner.attendance.push(record);
        Ok(())
    }

    /// Returns attendance records with date in `[from, to]` inclusive,
    /// optionally filtered to one employee, in insertion order.
    pub fn attendance_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        employee_id: Option<Uuid>,
    ) -> Vec<AttendanceRecord> {
        self.read()
            .attendance
            .iter()
            .filter(|a| a.date >= from && a.date <= to)
            .filter(|a| employee_id.is_none_or(|id| a.employee_id == id))
            .cloned()
            .collect()
    }

    // ---- periods ----

    /// Inserts a new pay period.
    pub fn insert_period(&self, period: PayPeriod) {
        self.write().periods.push(period);
    }

    /// Fetches a period by id.
    pub fn get_period(&self, id: Uuid) -> EngineResult<PayPeriod> {
        self.read()
            .periods
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(EngineError::PeriodNotFound { id })
    }

    /// Returns all periods in insertion order.
    pub fn list_periods(&self) -> Vec<PayPeriod> {
        self.read().periods.clone()
    }

    /// Removes a period and the payroll items it owns.
    pub fn remove_period(&self, id: Uuid) -> EngineResult<()> {
        let mut inner = self.write();
        let before = inner.periods.len();
        inner.periods.retain(|p| p.id != id);
        if inner.periods.len() == before {
            return Err(EngineError::PeriodNotFound { id });
        }
        inner.items.remove(&id);
        Ok(())
    }

    // ---- configuration ----

    /// Sets the single active configuration.
    pub fn set_config(&self, config: PayrollConfig) {
        self.write().config = Some(config);
    }

    /// Returns the active configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingConfiguration`] when none has been set;
    /// calculation treats that as a fatal precondition.
    pub fn config(&self) -> EngineResult<PayrollConfig> {
        self.read()
            .config
            .clone()
            .ok_or(EngineError::MissingConfiguration)
    }

    // ---- payroll items ----

    /// Returns the items of a period (empty if never calculated).
    pub fn items_for_period(&self, period_id: Uuid) -> EngineResult<Vec<PayrollItem>> {
        let inner = self.read();
        if !inner.periods.iter().any(|p| p.id == period_id) {
            return Err(EngineError::PeriodNotFound { id: period_id });
        }
        Ok(inner.items.get(&period_id).cloned().unwrap_or_default())
    }

    /// Calculates the period and atomically replaces its items.
    ///
    /// Holds a per-period mutex for the whole read-compute-replace cycle so
    /// two concurrent recalculations of the same period cannot lose updates.
    /// On any calculation error the previously persisted items remain
    /// untouched; on success the old items are discarded, the new set is
    /// stored, and the period transitions to `calculated` in the same
    /// write-lock critical section.
    pub fn recalculate_period(&self, period_id: Uuid) -> EngineResult<Vec<PayrollItem>> {
        let guard = {
            let mut guards = self
                .calc_guards
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            Arc::clone(guards.entry(period_id).or_default())
        };
        let _held = guard.lock().unwrap_or_else(|e| e.into_inner());

        let (period, employees, attendance, config) = {
            let inner = self.read();
            let period = inner
                .periods
                .iter()
                .find(|p| p.id == period_id)
                .cloned()
                .ok_or(EngineError::PeriodNotFound { id: period_id })?;
            let config = inner
                .config
                .clone()
                .ok_or(EngineError::MissingConfiguration)?;
            (
                period,
                inner.employees.clone(),
                inner.attendance.clone(),
                config,
            )
        };

        let items = calculate_period_items(&period, &employees, &attendance, &config)?;

        let mut inner = self.write();
        inner.items.insert(period_id, items.clone());
        if let Some(p) = inner.periods.iter_mut().find(|p| p.id == period_id) {
            p.status = PeriodStatus::Calculated;
        }
        Ok(items)
    }
}
