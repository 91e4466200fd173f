use crate::{
    currency::Currency,
    ledger::{ExpenseEntry, Totals},
};

use super::{chart::PieChart, view, Renderer};

/// Snapshot of what is currently displayed on each surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub incomes: Vec<String>,
    pub expenses: Vec<String>,
    pub goal_status: String,
    pub chart: Option<PieChart>,
}

/// Renderer that keeps the current screen in memory instead of drawing it.
/// Used to exercise the controller without a terminal.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    screen: Screen,
    chart_draws: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Number of times the chart was destroyed and recreated.
    pub fn chart_draws(&self) -> usize {
        self.chart_draws
    }
}

impl Renderer for RecordingRenderer {
    fn render_incomes(&mut self, incomes: &[f64], currency: Currency) {
        self.screen.incomes = view::income_lines(incomes, currency);
    }

    fn render_expenses(&mut self, expenses: &[ExpenseEntry], currency: Currency) {
        self.screen.expenses = view::expense_lines(expenses, currency);
    }

    fn render_goal_status(&mut self, totals: &Totals, goal: f64, currency: Currency) {
        self.screen.goal_status = view::goal_status_line(totals, goal, currency);
    }

    fn clear_goal_status(&mut self) {
        self.screen.goal_status.clear();
    }

    fn render_chart(&mut self, total_income: f64, total_expense: f64) {
        self.screen.chart = Some(PieChart::income_vs_expenses(total_income, total_expense));
        self.chart_draws += 1;
    }
}
