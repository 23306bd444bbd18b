//! CSV export of a period's payroll items.

use csv::WriterBuilder;

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollItem;

/// Renders a period's items as CSV.
///
/// One row per item, columns `Employee, Hours, Gross, Net`, then one
/// `Ded: <name>` column per distinct deduction name and one `Tax: <name>`
/// column per distinct tax name, in first-seen order across the items.
/// Items without a given rule leave the cell blank.
///
/// # Example
///
/// ```
/// use nomina_engine::report::period_csv;
///
/// let csv = period_csv(&[]).unwrap();
/// assert_eq!(csv.trim_end(), "Employee,Hours,Gross,Net");
/// ```
pub fn period_csv(items: &[PayrollItem]) -> EngineResult<String> {
    // Distinct rule names in first-seen order.
    let mut deduction_names: Vec<&String> = Vec::new();
    let mut tax_names: Vec<&String> = Vec::new();
    for item in items {
        for name in item.deductions.keys() {
            if !deduction_names.contains(&name) {
                deduction_names.push(name);
            }
        }
        for name in item.taxes.keys() {
            if !tax_names.contains(&name) {
                tax_names.push(name);
            }
        }
    }

    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    let mut header = vec![
        "Employee".to_string(),
        "Hours".to_string(),
        "Gross".to_string(),
        "Net".to_string(),
    ];
    header.extend(deduction_names.iter().map(|n| format!("Ded: {}", n)));
    header.extend(tax_names.iter().map(|n| format!("Tax: {}", n)));
    writer.write_record(&header).map_err(csv_error)?;

    for item in items {
        let mut row = vec![
            item.employee_name.clone(),
            item.hours_worked.to_string(),
            item.gross_pay.to_string(),
            item.net_pay.to_string(),
        ];
        for name in &deduction_names {
            row.push(
                item.deductions
                    .get(*name)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            );
        }
        for name in &tax_names {
            row.push(
                item.taxes
                    .get(*name)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&row).map_err(csv_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| EngineError::CalculationError {
        message: format!("CSV export failed: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::CalculationError {
        message: format!("CSV export produced invalid UTF-8: {}", e),
    })
}

fn csv_error(e: csv::Error) -> EngineError {
    EngineError::CalculationError {
        message: format!("CSV export failed: {}", e),
    }
}
