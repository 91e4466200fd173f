//! Presentation surfaces: income list, expense list, goal status, and the
//! income-versus-expenses chart.
//!
//! Every call is a full replace of its surface; renderers keep no diff state.

pub mod chart;
pub mod recording;
pub mod terminal;
pub mod view;

use crate::{
    currency::Currency,
    ledger::{ExpenseEntry, Totals},
};

pub use chart::{PieChart, Rgb, Slice, EXPENSES_COLOR, INCOME_COLOR};
pub use recording::{RecordingRenderer, Screen};
pub use terminal::TerminalRenderer;

/// Display capability the controller drives after each transition.
pub trait Renderer {
    fn render_incomes(&mut self, incomes: &[f64], currency: Currency);
    fn render_expenses(&mut self, expenses: &[ExpenseEntry], currency: Currency);
    fn render_goal_status(&mut self, totals: &Totals, goal: f64, currency: Currency);
    /// Blanks the goal status line (used after a full clear).
    fn clear_goal_status(&mut self);
    fn render_chart(&mut self, total_income: f64, total_expense: f64);
}
