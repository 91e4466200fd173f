use crate::{
    currency::{symbol_for, Currency},
    ledger::{ExpenseEntry, Totals},
};

/// Glyph followed by the amount's plain text form (`₹100`, `$12.5`).
pub fn money(amount: f64, currency: Currency) -> String {
    format!("{}{}", symbol_for(currency), amount)
}

pub fn income_lines(incomes: &[f64], currency: Currency) -> Vec<String> {
    incomes
        .iter()
        .map(|amount| money(*amount, currency))
        .collect()
}

pub fn expense_lines(expenses: &[ExpenseEntry], currency: Currency) -> Vec<String> {
    expenses
        .iter()
        .map(|entry| {
            format!(
                "Date: {}, Reason: {}, Amount: {}",
                entry.date,
                entry.reason,
                money(entry.amount, currency)
            )
        })
        .collect()
}

pub fn goal_status_line(totals: &Totals, goal: f64, currency: Currency) -> String {
    format!(
        "Savings: {} / Goal: {}",
        money(totals.savings, currency),
        money(goal, currency)
    )
}
