//! The fixed income-statement template: canonical row labels, the ordered
//! subtotal rules, the ordered chained-total rules, and the set of labels
//! downstream rendering treats as statement totals.
//!
//! The statement's row ordering is accounting-mandated, not alphabetical,
//! so the rules are plain ordered tables that the structurer folds over.

/// Raw category produced by uploaded sales accounts.
pub const SALES: &str = "Sales";
/// Raw category produced by uploaded current-period purchase accounts.
pub const CURRENT_PURCHASES: &str = "Current Purchases";
pub const PERSONNEL_COST: &str = "Personnel Cost";
pub const SELLING_ADMIN_EXPENSES: &str = "Selling & Admin Expenses";
pub const NON_OPERATING_INCOME: &str = "Non-Operating Income";
pub const NON_OPERATING_EXPENSES: &str = "Non-Operating Expenses";
pub const EXTRAORDINARY_GAINS: &str = "Extraordinary Gains";
pub const EXTRAORDINARY_LOSSES: &str = "Extraordinary Losses";
pub const INCOME_TAXES: &str = "Income Taxes";

pub const NET_SALES: &str = "Net Sales";
pub const OPENING_INVENTORY: &str = "Opening Inventory";
pub const NET_PURCHASES: &str = "Net Purchases";
pub const ENDING_INVENTORY: &str = "Ending Inventory";
pub const COST_OF_GOODS_SOLD: &str = "Cost of Goods Sold";
pub const GROSS_PROFIT: &str = "Gross Profit";
pub const TOTAL_PERSONNEL_COST: &str = "Total Personnel Cost";
pub const SGA_EXPENSES: &str = "Selling, General & Administrative Expenses";
pub const OPERATING_INCOME: &str = "Operating Income";
pub const TOTAL_NON_OPERATING_INCOME: &str = "Total Non-Operating Income";
pub const TOTAL_NON_OPERATING_EXPENSES: &str = "Total Non-Operating Expenses";
pub const ORDINARY_INCOME: &str = "Ordinary Income";
pub const TOTAL_EXTRAORDINARY_GAINS: &str = "Total Extraordinary Gains";
pub const TOTAL_EXTRAORDINARY_LOSSES: &str = "Total Extraordinary Losses";
pub const PRE_TAX_INCOME: &str = "Pre-Tax Income";
pub const TOTAL_INCOME_TAXES: &str = "Total Income Taxes";
pub const AFTER_TAX_INCOME: &str = "After-Tax Income";

/// Subtotal rules, applied in this exact order: for each pair, rows whose
/// category is in the target set are summed element-wise into a subtotal
/// row inserted after the last match.
pub const SUBTOTAL_RULES: &[(&[&str], &str)] = &[
    (&[SALES], NET_SALES),
    (&[CURRENT_PURCHASES], NET_PURCHASES),
    (&[PERSONNEL_COST], TOTAL_PERSONNEL_COST),
    (&[PERSONNEL_COST, SELLING_ADMIN_EXPENSES], SGA_EXPENSES),
    (&[NON_OPERATING_INCOME], TOTAL_NON_OPERATING_INCOME),
    (&[NON_OPERATING_EXPENSES], TOTAL_NON_OPERATING_EXPENSES),
    (&[EXTRAORDINARY_GAINS], TOTAL_EXTRAORDINARY_GAINS),
    (&[EXTRAORDINARY_LOSSES], TOTAL_EXTRAORDINARY_LOSSES),
    (&[INCOME_TAXES], TOTAL_INCOME_TAXES),
];

/// Chained-total rules, applied in this exact order: when the anchor label
/// exists as an account and the successor does not, a zero-valued
/// successor row is inserted after the last anchor occurrence.
pub const CHAIN_RULES: &[(&str, &str)] = &[
    (NET_PURCHASES, ENDING_INVENTORY),
    (NET_SALES, OPENING_INVENTORY),
    (ENDING_INVENTORY, COST_OF_GOODS_SOLD),
    (COST_OF_GOODS_SOLD, GROSS_PROFIT),
    (SGA_EXPENSES, OPERATING_INCOME),
    (OPERATING_INCOME, TOTAL_NON_OPERATING_INCOME),
    (TOTAL_NON_OPERATING_INCOME, TOTAL_NON_OPERATING_EXPENSES),
    (TOTAL_NON_OPERATING_EXPENSES, ORDINARY_INCOME),
    (ORDINARY_INCOME, TOTAL_EXTRAORDINARY_GAINS),
    (TOTAL_EXTRAORDINARY_GAINS, TOTAL_EXTRAORDINARY_LOSSES),
    (TOTAL_EXTRAORDINARY_LOSSES, PRE_TAX_INCOME),
    (PRE_TAX_INCOME, TOTAL_INCOME_TAXES),
    (TOTAL_INCOME_TAXES, AFTER_TAX_INCOME),
];

/// The fifteen rows a rendering layer highlights as statement totals.
pub const STATEMENT_TOTALS: &[&str] = &[
    NET_SALES,
    NET_PURCHASES,
    COST_OF_GOODS_SOLD,
    GROSS_PROFIT,
    TOTAL_PERSONNEL_COST,
    SGA_EXPENSES,
    OPERATING_INCOME,
    TOTAL_NON_OPERATING_INCOME,
    TOTAL_NON_OPERATING_EXPENSES,
    ORDINARY_INCOME,
    TOTAL_EXTRAORDINARY_GAINS,
    TOTAL_EXTRAORDINARY_LOSSES,
    PRE_TAX_INCOME,
    TOTAL_INCOME_TAXES,
    AFTER_TAX_INCOME,
];

pub fn is_statement_total(label: &str) -> bool {
    STATEMENT_TOTALS.contains(&label)
}
