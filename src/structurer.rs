//! Row Structurer: brings an arbitrary, incompletely-labeled ledger to the
//! canonical statement shape by inserting the structural rows the template
//! requires but the source data omits.
//!
//! Rules run in a fixed sequence and each rule's anchor lookup runs
//! against the ledger as mutated by all prior rules, so insertion points
//! are resolved by label at application time, never by cached index.

use crate::schema::{Cell, Ledger};
use crate::template::{
    CHAIN_RULES, CURRENT_PURCHASES, NET_PURCHASES, NET_SALES, OPENING_INVENTORY, SALES,
    SUBTOTAL_RULES,
};
use log::debug;

/// Inserts every missing structural row: the net-sales header, the
/// opening-inventory/net-purchases pair, the nine category subtotals and
/// the chained totals through after-tax income.
///
/// Existing rows are never removed or reordered, and re-running is
/// idempotent: every rule skips when its output label is already present.
pub fn structure_rows(ledger: &mut Ledger) {
    ensure_net_sales_header(ledger);
    ensure_inventory_pair(ledger);

    for (targets, label) in SUBTOTAL_RULES {
        insert_subtotal(ledger, targets, label);
    }

    for (existing, new) in CHAIN_RULES {
        ensure_chained_total(ledger, existing, new);
    }
}

/// The statement must open with a sales row. When the raw data carries no
/// sales category at all, a zero-valued net-sales header is prepended.
fn ensure_net_sales_header(ledger: &mut Ledger) {
    if ledger.contains_category(SALES) || ledger.contains_category(NET_SALES) {
        return;
    }

    let row = ledger.synthetic_row(NET_SALES);
    ledger.insert_row(0, row);
    debug!(
        "{}: no sales category, prepended '{}' header",
        ledger.department, NET_SALES
    );
}

/// Ledgers without current-period purchases still need the inventory side
/// of the cost-of-goods-sold block: opening inventory and net purchases
/// are inserted, in that order, directly under the sales header.
fn ensure_inventory_pair(ledger: &mut Ledger) {
    if ledger.contains_category(CURRENT_PURCHASES)
        || ledger.contains_category(OPENING_INVENTORY)
        || ledger.contains_category(NET_PURCHASES)
    {
        return;
    }

    let anchor = ledger
        .first_row_index_by_category(NET_SALES)
        .or_else(|| ledger.first_row_index_by_category(SALES));

    let Some(index) = anchor else {
        debug!(
            "{}: no sales anchor, skipping inventory pair",
            ledger.department
        );
        return;
    };

    let opening = ledger.synthetic_row(OPENING_INVENTORY);
    let purchases = ledger.synthetic_row(NET_PURCHASES);
    ledger.insert_row(index + 1, opening);
    ledger.insert_row(index + 2, purchases);
}

/// Sums every row whose category is in `targets` element-wise and inserts
/// the subtotal row directly after the last match. Non-numeric cells
/// contribute nothing to the sum. Skips when no row matches or the
/// subtotal label already exists.
fn insert_subtotal(ledger: &mut Ledger, targets: &[&str], label: &str) {
    if ledger.contains_category(label) {
        return;
    }

    let matching: Vec<usize> = ledger
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| targets.contains(&row.category_label.as_str()))
        .map(|(index, _)| index)
        .collect();

    let Some(&last) = matching.last() else {
        return;
    };

    let mut sums = vec![0.0; ledger.elapsed_months()];
    for &index in &matching {
        for (sum, cell) in sums.iter_mut().zip(&ledger.rows[index].period_values) {
            *sum += cell.as_number().unwrap_or(0.0);
        }
    }

    let mut row = ledger.synthetic_row(label);
    row.period_values = sums.into_iter().map(Cell::Number).collect();
    ledger.insert_row(last + 1, row);
    debug!(
        "{}: inserted subtotal '{}' over {} rows",
        ledger.department,
        label,
        matching.len()
    );
}

/// When the anchor account exists and its successor does not, a
/// zero-valued successor row is inserted after the anchor's last
/// occurrence. A missing anchor skips silently; the chain never cascades
/// backward past it.
fn ensure_chained_total(ledger: &mut Ledger, existing: &str, new: &str) {
    if ledger.contains_account(new) {
        return;
    }

    let Some(index) = ledger.last_row_index_by_account(existing) else {
        return;
    };

    let row = ledger.synthetic_row(new);
    ledger.insert_row(index + 1, row);
}
