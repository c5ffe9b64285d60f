use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single period cell. Uploaded trend tables mix numbers, formatted
/// number strings ("1,200,000") and blanks, so the distinction between
/// "zero" and "not a number" is preserved rather than collapsed at parse
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Numeric view of the cell. Text is parsed after stripping thousands
    /// separators; unparsable text and blanks yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => s.trim().replace(',', "").parse::<f64>().ok(),
            Cell::Empty => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// One account row of a department-scoped ledger.
///
/// `account_label` is the display name and the key formulas and chain
/// rules resolve against; `category_label` is the classification key used
/// for subtotal grouping. Synthetic rows carry the same label in both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LedgerRow {
    pub account_label: String,
    pub category_label: String,
    pub department: String,
    pub period_values: Vec<Cell>,
}

impl LedgerRow {
    /// Cumulative total over the period columns. Non-numeric cells
    /// contribute nothing, matching a numeric-only column sum.
    pub fn total(&self) -> f64 {
        self.period_values
            .iter()
            .filter_map(Cell::as_number)
            .sum()
    }

    /// Floored mean over the numeric period cells, zero when none are
    /// numeric.
    pub fn monthly_average(&self) -> f64 {
        let numeric: Vec<f64> = self.period_values.iter().filter_map(Cell::as_number).collect();
        if numeric.is_empty() {
            return 0.0;
        }
        (numeric.iter().sum::<f64>() / numeric.len() as f64).floor()
    }
}

/// An ordered account table for one department. Row order is
/// load-bearing: it encodes statement presentation order. Columns are one
/// slot per elapsed month, labeled by chronological month-end dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ledger {
    pub department: String,
    pub periods: Vec<NaiveDate>,
    pub rows: Vec<LedgerRow>,
}

impl Ledger {
    pub fn new(department: impl Into<String>, periods: Vec<NaiveDate>) -> Self {
        Self {
            department: department.into(),
            periods,
            rows: Vec::new(),
        }
    }

    pub fn elapsed_months(&self) -> usize {
        self.periods.len()
    }

    /// A zero-valued row carrying `label` as both account and category
    /// label, stamped with this ledger's department.
    pub fn synthetic_row(&self, label: &str) -> LedgerRow {
        LedgerRow {
            account_label: label.to_string(),
            category_label: label.to_string(),
            department: self.department.clone(),
            period_values: vec![Cell::Number(0.0); self.elapsed_months()],
        }
    }

    /// Inserting is the only structural mutation a ledger ever sees; rows
    /// are never removed or reordered.
    pub fn insert_row(&mut self, index: usize, row: LedgerRow) {
        self.rows.insert(index, row);
    }

    pub fn push_row(&mut self, row: LedgerRow) {
        self.rows.push(row);
    }

    pub fn contains_category(&self, label: &str) -> bool {
        self.rows.iter().any(|r| r.category_label == label)
    }

    pub fn contains_account(&self, label: &str) -> bool {
        self.rows.iter().any(|r| r.account_label == label)
    }

    pub fn first_row_index_by_category(&self, label: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.category_label == label)
    }

    pub fn first_row_index_by_account(&self, label: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.account_label == label)
    }

    pub fn last_row_index_by_account(&self, label: &str) -> Option<usize> {
        self.rows.iter().rposition(|r| r.account_label == label)
    }

    /// First row carrying `label` as its account label, the deterministic
    /// pick when duplicates exist.
    pub fn row_by_account(&self, label: &str) -> Option<&LedgerRow> {
        self.rows.iter().find(|r| r.account_label == label)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = schemars::schema_for!(Ledger);
        serde_json::to_string_pretty(&schema)
    }
}
