//! Expense display formatting
//!
//! Formats recorded expenses as an aligned table with a total row.

use crate::models::{Expense, Money};

/// Format expenses as a table
///
/// A total that does not fit in an amount is shown as "overflow".
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses yet.\n".to_string();
    }

    let amounts: Vec<String> = expenses
        .iter()
        .map(|e| e.amount.format_with_symbol(symbol))
        .collect();
    let total_text = expenses
        .iter()
        .try_fold(Money::zero(), |total, e| total.checked_add(e.amount))
        .map(|total| total.format_with_symbol(symbol))
        .unwrap_or_else(|| "overflow".to_string());

    let payer_width = column_width(expenses.iter().map(|e| e.paid_by.as_str()), "Paid By");
    let desc_width = column_width(expenses.iter().map(|e| e.description.as_str()), "Description");
    let amount_width = column_width(
        amounts.iter().map(String::as_str).chain([total_text.as_str()]),
        "Amount",
    );

    let separator = format!(
        "{:-<payer_width$}  {:-<desc_width$}  {:->amount_width$}\n",
        "",
        "",
        "",
    );

    let mut output = String::new();
    output.push_str(&format!(
        "{:<payer_width$}  {:<desc_width$}  {:>amount_width$}\n",
        "Paid By", "Description", "Amount",
    ));
    output.push_str(&separator);

    for (expense, amount) in expenses.iter().zip(&amounts) {
        output.push_str(&format!(
            "{:<payer_width$}  {:<desc_width$}  {:>amount_width$}\n",
            expense.paid_by, expense.description, amount,
        ));
    }

    output.push_str(&separator);
    output.push_str(&format!(
        "{:<payer_width$}  {:<desc_width$}  {:>amount_width$}\n",
        "TOTAL", "", total_text,
    ));

    output
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count())
}
