//! Builds the engine's input population from uploaded data: every account
//! in the master appears in every department's ledger, zero-filled where
//! the trend table had no row, so the structurer and calculator can rely
//! on a complete (account, department) grid.

use crate::error::{Result, StatementError};
use crate::schema::{Cell, Ledger, LedgerRow};
use chrono::NaiveDate;
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the uploaded chart-of-accounts master. The category label
/// drives subtotal grouping in the statement template.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AccountMasterEntry {
    pub code: Option<String>,
    pub account_label: String,
    pub category_label: String,
}

/// One row of an uploaded monthly trend table, already scoped to a
/// department, with one cell per elapsed month.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawLedgerRow {
    pub account_label: String,
    pub department: String,
    pub period_values: Vec<Cell>,
}

impl AccountMasterEntry {
    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = schemars::schema_for!(AccountMasterEntry);
        serde_json::to_string_pretty(&schema)
    }
}

impl RawLedgerRow {
    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = schemars::schema_for!(RawLedgerRow);
        serde_json::to_string_pretty(&schema)
    }
}

/// Departments present in the raw data, first-seen order, deduplicated.
pub fn departments_in(raw_rows: &[RawLedgerRow]) -> Vec<String> {
    let mut seen = Vec::new();
    for row in raw_rows {
        if !seen.contains(&row.department) {
            seen.push(row.department.clone());
        }
    }
    seen
}

/// Cross-joins the account master with the department list and left-joins
/// the raw rows on (account, department), zero-filling the gaps. Emits one
/// ledger per department, rows in master order.
///
/// The first raw row wins when (account, department) occurs twice, keeping
/// downstream label lookups deterministic.
pub fn build_department_ledgers(
    master: &[AccountMasterEntry],
    raw_rows: &[RawLedgerRow],
    departments: &[String],
    periods: &[NaiveDate],
) -> Result<Vec<Ledger>> {
    if master.is_empty() {
        return Err(StatementError::EmptyAccountMaster);
    }
    if periods.is_empty() {
        return Err(StatementError::EmptyPeriodAxis);
    }

    let mut data: BTreeMap<(&str, &str), &RawLedgerRow> = BTreeMap::new();
    for row in raw_rows {
        if row.period_values.len() != periods.len() {
            return Err(StatementError::PeriodLengthMismatch {
                account: row.account_label.clone(),
                department: row.department.clone(),
                expected: periods.len(),
                actual: row.period_values.len(),
            });
        }
        data.entry((row.account_label.as_str(), row.department.as_str()))
            .or_insert(row);
    }

    let mut ledgers = Vec::with_capacity(departments.len());
    for department in departments {
        let mut ledger = Ledger::new(department.clone(), periods.to_vec());
        let mut filled = 0usize;

        for entry in master {
            let period_values = match data.get(&(entry.account_label.as_str(), department.as_str()))
            {
                Some(raw) => raw.period_values.clone(),
                None => {
                    filled += 1;
                    vec![Cell::Number(0.0); periods.len()]
                }
            };

            ledger.push_row(LedgerRow {
                account_label: entry.account_label.clone(),
                category_label: entry.category_label.clone(),
                department: department.clone(),
                period_values,
            });
        }

        debug!(
            "{}: built ledger with {} rows ({} zero-filled)",
            department,
            ledger.rows.len(),
            filled
        );
        ledgers.push(ledger);
    }

    Ok(ledgers)
}
