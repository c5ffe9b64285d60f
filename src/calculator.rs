//! Financial Calculator: fills the derived statement rows, per period
//! column, from other rows' values. Rows are resolved by account label at
//! evaluation time (insertions have shifted positions by now), and the
//! structurer is assumed to have guaranteed presence; a missing operand
//! label skips that formula entirely, leaving a valid partial statement.

use crate::schema::{Cell, Ledger};
use crate::template::{
    AFTER_TAX_INCOME, COST_OF_GOODS_SOLD, GROSS_PROFIT, NET_PURCHASES, NET_SALES,
    OPENING_INVENTORY, OPERATING_INCOME, ORDINARY_INCOME, PRE_TAX_INCOME, SGA_EXPENSES,
    TOTAL_EXTRAORDINARY_GAINS, TOTAL_EXTRAORDINARY_LOSSES, TOTAL_INCOME_TAXES,
    TOTAL_NON_OPERATING_EXPENSES, TOTAL_NON_OPERATING_INCOME,
};
use log::debug;

/// Computes the six derived rows in statement order. Later formulas read
/// the results earlier formulas just wrote, so evaluation order matters
/// and matches the statement's top-to-bottom flow.
pub fn calculate_financials(ledger: &mut Ledger) {
    // The cost-of-goods-sold cell doubles as the ending-inventory
    // placeholder: its current value is the third operand before the
    // result overwrites it.
    apply_formula(
        ledger,
        &[OPENING_INVENTORY, NET_PURCHASES, COST_OF_GOODS_SOLD],
        COST_OF_GOODS_SOLD,
        |v| v[0] + v[1] - v[2],
    );

    apply_formula(ledger, &[NET_SALES, COST_OF_GOODS_SOLD], GROSS_PROFIT, |v| {
        v[0] - v[1]
    });

    apply_formula(ledger, &[GROSS_PROFIT, SGA_EXPENSES], OPERATING_INCOME, |v| {
        v[0] - v[1]
    });

    apply_formula(
        ledger,
        &[
            OPERATING_INCOME,
            TOTAL_NON_OPERATING_INCOME,
            TOTAL_NON_OPERATING_EXPENSES,
        ],
        ORDINARY_INCOME,
        |v| v[0] + v[1] - v[2],
    );

    apply_formula(
        ledger,
        &[
            ORDINARY_INCOME,
            TOTAL_EXTRAORDINARY_GAINS,
            TOTAL_EXTRAORDINARY_LOSSES,
        ],
        PRE_TAX_INCOME,
        |v| v[0] + v[1] - v[2],
    );

    apply_formula(
        ledger,
        &[PRE_TAX_INCOME, TOTAL_INCOME_TAXES],
        AFTER_TAX_INCOME,
        |v| v[0] - v[1],
    );
}

/// Evaluates one formula for every period column. Operands resolve to the
/// first row carrying each label; the result lands in the first `target`
/// row. A column with any non-numeric operand yields an undefined cell
/// for that column only.
fn apply_formula(
    ledger: &mut Ledger,
    operands: &[&str],
    target: &str,
    formula: impl Fn(&[f64]) -> f64,
) {
    let resolved: Option<Vec<usize>> = operands
        .iter()
        .map(|label| ledger.first_row_index_by_account(label))
        .collect();

    let (Some(operand_rows), Some(target_row)) =
        (resolved, ledger.first_row_index_by_account(target))
    else {
        debug!(
            "{}: skipping '{}' formula, required row missing",
            ledger.department, target
        );
        return;
    };

    for column in 0..ledger.elapsed_months() {
        let values: Option<Vec<f64>> = operand_rows
            .iter()
            .map(|&row| ledger.rows[row].period_values[column].as_number())
            .collect();

        ledger.rows[target_row].period_values[column] = match values {
            Some(values) => Cell::Number(formula(&values)),
            None => Cell::Empty,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LedgerRow;
    use chrono::NaiveDate;

    fn ledger_with(rows: &[(&str, &[Cell])]) -> Ledger {
        let months = rows.first().map(|(_, v)| v.len()).unwrap_or(1);
        let periods =
            crate::utils::period_axis(NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(), months)
                .unwrap();
        let mut ledger = Ledger::new("Retail", periods);
        for (label, values) in rows {
            ledger.push_row(LedgerRow {
                account_label: label.to_string(),
                category_label: label.to_string(),
                department: "Retail".to_string(),
                period_values: values.to_vec(),
            });
        }
        ledger
    }

    fn number_cells(values: &[f64]) -> Vec<Cell> {
        values.iter().copied().map(Cell::Number).collect()
    }

    fn value_of(ledger: &Ledger, label: &str, column: usize) -> Cell {
        ledger.row_by_account(label).unwrap().period_values[column].clone()
    }

    #[test]
    fn test_cogs_and_gross_profit() {
        let mut ledger = ledger_with(&[
            (NET_SALES, &number_cells(&[500.0])),
            (OPENING_INVENTORY, &number_cells(&[100.0])),
            (NET_PURCHASES, &number_cells(&[50.0])),
            (COST_OF_GOODS_SOLD, &number_cells(&[30.0])),
            (GROSS_PROFIT, &number_cells(&[0.0])),
        ]);
        calculate_financials(&mut ledger);

        // 100 + 50 - 30: the pre-existing COGS value acts as the
        // ending-inventory placeholder.
        assert_eq!(value_of(&ledger, COST_OF_GOODS_SOLD, 0), Cell::Number(120.0));
        assert_eq!(value_of(&ledger, GROSS_PROFIT, 0), Cell::Number(380.0));
    }

    #[test]
    fn test_full_cascade_to_after_tax_income() {
        let mut ledger = ledger_with(&[
            (NET_SALES, &number_cells(&[1000.0])),
            (OPENING_INVENTORY, &number_cells(&[100.0])),
            (NET_PURCHASES, &number_cells(&[400.0])),
            (COST_OF_GOODS_SOLD, &number_cells(&[0.0])),
            (GROSS_PROFIT, &number_cells(&[0.0])),
            (SGA_EXPENSES, &number_cells(&[200.0])),
            (OPERATING_INCOME, &number_cells(&[0.0])),
            (TOTAL_NON_OPERATING_INCOME, &number_cells(&[50.0])),
            (TOTAL_NON_OPERATING_EXPENSES, &number_cells(&[20.0])),
            (ORDINARY_INCOME, &number_cells(&[0.0])),
            (TOTAL_EXTRAORDINARY_GAINS, &number_cells(&[10.0])),
            (TOTAL_EXTRAORDINARY_LOSSES, &number_cells(&[5.0])),
            (PRE_TAX_INCOME, &number_cells(&[0.0])),
            (TOTAL_INCOME_TAXES, &number_cells(&[100.0])),
            (AFTER_TAX_INCOME, &number_cells(&[0.0])),
        ]);
        calculate_financials(&mut ledger);

        assert_eq!(value_of(&ledger, COST_OF_GOODS_SOLD, 0), Cell::Number(500.0));
        assert_eq!(value_of(&ledger, GROSS_PROFIT, 0), Cell::Number(500.0));
        assert_eq!(value_of(&ledger, OPERATING_INCOME, 0), Cell::Number(300.0));
        assert_eq!(value_of(&ledger, ORDINARY_INCOME, 0), Cell::Number(330.0));
        assert_eq!(value_of(&ledger, PRE_TAX_INCOME, 0), Cell::Number(335.0));
        assert_eq!(value_of(&ledger, AFTER_TAX_INCOME, 0), Cell::Number(235.0));
    }

    #[test]
    fn test_missing_label_skips_formula() {
        // No non-operating income total: ordinary income must stay
        // untouched rather than being partially summed.
        let mut ledger = ledger_with(&[
            (OPERATING_INCOME, &number_cells(&[300.0])),
            (TOTAL_NON_OPERATING_EXPENSES, &number_cells(&[20.0])),
            (ORDINARY_INCOME, &number_cells(&[7.0])),
        ]);
        calculate_financials(&mut ledger);

        assert_eq!(value_of(&ledger, ORDINARY_INCOME, 0), Cell::Number(7.0));
    }

    #[test]
    fn test_non_numeric_operand_yields_undefined_cell_only() {
        let mut ledger = ledger_with(&[
            (NET_SALES, &[Cell::Number(500.0), Cell::Text("n/a".to_string())]),
            (COST_OF_GOODS_SOLD, &number_cells(&[120.0, 130.0])),
            (GROSS_PROFIT, &number_cells(&[0.0, 0.0])),
            (OPENING_INVENTORY, &number_cells(&[100.0, 100.0])),
            (NET_PURCHASES, &number_cells(&[20.0, 30.0])),
        ]);
        calculate_financials(&mut ledger);

        // Column 0 computes normally (COGS was rewritten to 0 first);
        // column 1 has a non-numeric net sales operand and must be
        // undefined, not zero.
        assert_eq!(value_of(&ledger, GROSS_PROFIT, 0), Cell::Number(500.0));
        assert_eq!(value_of(&ledger, GROSS_PROFIT, 1), Cell::Empty);
    }

    #[test]
    fn test_duplicate_operand_uses_first_occurrence() {
        let mut ledger = ledger_with(&[
            (NET_SALES, &number_cells(&[500.0])),
            (NET_SALES, &number_cells(&[900.0])),
            (COST_OF_GOODS_SOLD, &number_cells(&[120.0])),
            (GROSS_PROFIT, &number_cells(&[0.0])),
        ]);
        calculate_financials(&mut ledger);

        assert_eq!(value_of(&ledger, GROSS_PROFIT, 0), Cell::Number(380.0));
    }
}
