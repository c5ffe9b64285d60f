//! # Income Statement Builder
//!
//! A library for normalizing departmental account ledgers (one row per
//! account, one column per elapsed month) into standardized two-period
//! comparative income statements.
//!
//! ## Core Concepts
//!
//! - **Ledger**: an ordered account table for one department; row order
//!   encodes statement presentation order.
//! - **Row Structurer**: inserts the structural rows the statement
//!   template requires but the source data omits (net-sales header,
//!   inventory pair, category subtotals, chained totals), tolerating any
//!   subset of them already being present.
//! - **Financial Calculator**: fills the derived rows (cost of goods
//!   sold, gross profit, operating income, ordinary income, pre-tax and
//!   after-tax income) per period column, resolving operands purely by
//!   label.
//! - **Comparative statement**: the structured/calculated current period
//!   joined with the prior period's cumulative totals and monthly
//!   averages.
//!
//! ## Example
//!
//! ```rust,ignore
//! use income_statement_builder::*;
//! use chrono::NaiveDate;
//!
//! let master = vec![
//!     AccountMasterEntry {
//!         code: Some("100".to_string()),
//!         account_label: "Product Sales".to_string(),
//!         category_label: template::SALES.to_string(),
//!     },
//! ];
//!
//! let periods = period_axis(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), 6)?;
//! let departments = departments_in(&raw_rows);
//!
//! let current = build_department_ledgers(&master, &raw_rows, &departments, &periods)?;
//! let prior = build_department_ledgers(&master, &prior_rows, &departments, &periods)?;
//!
//! let statements = build_comparative_statements(current, prior);
//! ```

pub mod calculator;
pub mod error;
pub mod ingestion;
pub mod report;
pub mod schema;
pub mod structurer;
pub mod template;
pub mod utils;

pub use calculator::calculate_financials;
pub use error::{Result, StatementError};
pub use ingestion::{
    build_department_ledgers, departments_in, AccountMasterEntry, RawLedgerRow,
};
pub use report::{
    build_comparative_statement, run_statement_pipeline, ComparativeRow, ComparativeStatement,
};
pub use schema::{Cell, Ledger, LedgerRow};
pub use structurer::structure_rows;
pub use template::{is_statement_total, STATEMENT_TOTALS};
pub use utils::{months_between, period_axis};

use log::{debug, info};
use std::collections::BTreeMap;

pub struct StatementBuilder;

impl StatementBuilder {
    /// Builds one comparative statement per current-period ledger,
    /// pairing each with the prior-period ledger of the same department.
    /// Departments without prior data compare against an empty prior
    /// ledger; each department is processed independently end-to-end.
    pub fn build(current: Vec<Ledger>, prior: Vec<Ledger>) -> Vec<ComparativeStatement> {
        info!(
            "Building comparative statements for {} department(s)",
            current.len()
        );

        let mut prior_by_department: BTreeMap<String, Ledger> = prior
            .into_iter()
            .map(|ledger| (ledger.department.clone(), ledger))
            .collect();

        current
            .into_iter()
            .map(|ledger| {
                let prior_ledger = match prior_by_department.remove(&ledger.department) {
                    Some(found) => found,
                    None => {
                        debug!(
                            "{}: no prior-period ledger, comparing against empty",
                            ledger.department
                        );
                        Ledger::new(ledger.department.clone(), ledger.periods.clone())
                    }
                };
                build_comparative_statement(ledger, prior_ledger)
            })
            .collect()
    }
}

pub fn build_comparative_statements(
    current: Vec<Ledger>,
    prior: Vec<Ledger>,
) -> Vec<ComparativeStatement> {
    StatementBuilder::build(current, prior)
}
