//! Two-period comparison: runs the structuring/calculation pipeline on a
//! department's current and prior ledgers and joins them into one
//! comparative statement with cumulative totals, the period-over-period
//! change and the prior monthly average, plus the highlight flag a
//! rendering layer keys on.

use crate::calculator::calculate_financials;
use crate::schema::{Cell, Ledger};
use crate::structurer::structure_rows;
use crate::template::is_statement_total;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// The core control flow for one department: raw ledger in, finished
/// statement ledger out. Structuring postconditions feed the calculator;
/// nothing re-verifies row order beyond label lookup.
pub fn run_statement_pipeline(ledger: &mut Ledger) {
    structure_rows(ledger);
    calculate_financials(ledger);
}

/// One row of the finished comparative statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeRow {
    pub account_label: String,
    pub department: String,
    pub prior_total: f64,
    pub current_total: f64,
    pub change: f64,
    pub prior_monthly_average: f64,
    pub period_values: Vec<Cell>,
    pub is_statement_total: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeStatement {
    pub department: String,
    pub periods: Vec<NaiveDate>,
    pub rows: Vec<ComparativeRow>,
}

/// Structures and calculates both periods, then folds the prior period's
/// cumulative totals and monthly averages into the current period's rows.
/// Accounts absent from the prior period default to zero; row order is the
/// current ledger's statement order.
pub fn build_comparative_statement(
    mut current: Ledger,
    mut prior: Ledger,
) -> ComparativeStatement {
    run_statement_pipeline(&mut current);
    run_statement_pipeline(&mut prior);

    // First occurrence wins, mirroring formula operand lookup.
    let mut prior_stats: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for row in &prior.rows {
        prior_stats
            .entry(row.account_label.as_str())
            .or_insert_with(|| (row.total(), row.monthly_average()));
    }

    let rows = current
        .rows
        .iter()
        .map(|row| {
            let (prior_total, prior_monthly_average) = prior_stats
                .get(row.account_label.as_str())
                .copied()
                .unwrap_or((0.0, 0.0));
            let current_total = row.total();

            ComparativeRow {
                account_label: row.account_label.clone(),
                department: row.department.clone(),
                prior_total,
                current_total,
                change: current_total - prior_total,
                prior_monthly_average,
                period_values: row.period_values.clone(),
                is_statement_total: is_statement_total(&row.account_label),
            }
        })
        .collect();

    debug!(
        "{}: comparative statement with {} rows over {} months",
        current.department,
        current.rows.len(),
        current.elapsed_months()
    );

    ComparativeStatement {
        department: current.department,
        periods: current.periods,
        rows,
    }
}
