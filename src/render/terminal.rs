use std::io::{self, Write};

use colored::Colorize;
use tracing::warn;

use crate::{
    currency::Currency,
    ledger::{ExpenseEntry, Totals},
};

use super::{
    chart::{PieChart, Rgb},
    view, Renderer,
};

const DEFAULT_BAR_WIDTH: usize = 30;

/// Writes each surface as a titled block to a terminal (or any writer).
pub struct TerminalRenderer<W: Write> {
    out: W,
    bar_width: usize,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit_section(&mut self, title: &str, lines: &[String]) {
        let mut block = format!("\n{}\n", format!("=== {} ===", title).bold());
        for line in lines {
            block.push_str("  ");
            block.push_str(line);
            block.push('\n');
        }
        if let Err(err) = self.out.write_all(block.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(section = title, error = %err, "failed to render section");
        }
    }

    fn chart_lines(&self, chart: &PieChart) -> Vec<String> {
        if chart.is_empty() {
            return vec![
                format!("[{}]", "░".repeat(self.bar_width)),
                "(no data)".to_string(),
            ];
        }
        let widths = chart.segment_widths(self.bar_width);
        let bar: String = chart
            .slices
            .iter()
            .zip(widths)
            .map(|(slice, width)| paint(&"█".repeat(width), slice.color))
            .collect();
        let mut lines = vec![format!("[{}]", bar)];
        for slice in &chart.slices {
            lines.push(format!(
                "{} {}: {} ({:.1}%)",
                paint("■", slice.color),
                slice.label,
                slice.value,
                slice.share * 100.0
            ));
        }
        lines
    }
}

fn paint(text: &str, color: Rgb) -> String {
    text.truecolor(color.r, color.g, color.b).to_string()
}

fn or_placeholder(lines: Vec<String>) -> Vec<String> {
    if lines.is_empty() {
        vec!["(none)".to_string()]
    } else {
        lines
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_incomes(&mut self, incomes: &[f64], currency: Currency) {
        let lines = or_placeholder(view::income_lines(incomes, currency));
        self.emit_section("Incomes", &lines);
    }

    fn render_expenses(&mut self, expenses: &[ExpenseEntry], currency: Currency) {
        let lines = or_placeholder(view::expense_lines(expenses, currency));
        self.emit_section("Expenses", &lines);
    }

    fn render_goal_status(&mut self, totals: &Totals, goal: f64, currency: Currency) {
        let line = view::goal_status_line(totals, goal, currency);
        self.emit_section("Savings Goal", &[line]);
    }

    fn clear_goal_status(&mut self) {
        self.emit_section("Savings Goal", &[]);
    }

    fn render_chart(&mut self, total_income: f64, total_expense: f64) {
        let chart = PieChart::income_vs_expenses(total_income, total_expense);
        let lines = self.chart_lines(&chart);
        self.emit_section(chart.title, &lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(render: impl FnOnce(&mut TerminalRenderer<Vec<u8>>)) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new()).with_bar_width(10);
        render(&mut renderer);
        String::from_utf8(renderer.into_inner()).expect("utf8 output")
    }

    #[test]
    fn empty_lists_show_placeholder() {
        let output = rendered(|r| r.render_incomes(&[], Currency::Usd));
        assert!(output.contains("Incomes"));
        assert!(output.contains("(none)"));
    }

    #[test]
    fn expense_section_lists_entries() {
        let expenses = vec![ExpenseEntry::new(12.0, "bus", "2024-05-05")];
        let output = rendered(|r| r.render_expenses(&expenses, Currency::Eur));
        assert!(output.contains("Date: 2024-05-05, Reason: bus, Amount: €12"));
    }

    #[test]
    fn chart_legend_reports_shares() {
        let output = rendered(|r| r.render_chart(100.0, 40.0));
        assert!(output.contains("Income: 100 (71.4%)"));
        assert!(output.contains("Expenses: 40 (28.6%)"));
    }

    #[test]
    fn empty_chart_says_so() {
        let output = rendered(|r| r.render_chart(0.0, 0.0));
        assert!(output.contains("(no data)"));
    }

    #[test]
    fn repeated_renders_are_identical() {
        let first = rendered(|r| r.render_chart(3.0, 1.0));
        let second = rendered(|r| r.render_chart(3.0, 1.0));
        assert_eq!(first, second);
    }
}
