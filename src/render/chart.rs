use std::fmt;

pub const CHART_TITLE: &str = "Income vs Expenses";
pub const INCOME_LABEL: &str = "Income";
pub const EXPENSES_LABEL: &str = "Expenses";

pub const INCOME_COLOR: Rgb = Rgb::new(0x28, 0xa7, 0x45);
pub const EXPENSES_COLOR: Rgb = Rgb::new(0xdc, 0x35, 0x45);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    /// Fraction of the chart total in `0.0..=1.0`; zero when the total is zero.
    pub share: f64,
    pub color: Rgb,
}

/// Two-slice pie with fixed labels and colours.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: [Slice; 2],
}

impl PieChart {
    pub fn income_vs_expenses(total_income: f64, total_expense: f64) -> Self {
        let total = total_income + total_expense;
        let share = |value: f64| if total > 0.0 { value / total } else { 0.0 };
        Self {
            title: CHART_TITLE,
            slices: [
                Slice {
                    label: INCOME_LABEL,
                    value: total_income,
                    share: share(total_income),
                    color: INCOME_COLOR,
                },
                Slice {
                    label: EXPENSES_LABEL,
                    value: total_expense,
                    share: share(total_expense),
                    color: EXPENSES_COLOR,
                },
            ],
        }
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }

    /// Splits `width` cells between the slices in proportion to their share.
    /// Both widths are zero for an empty chart.
    pub fn segment_widths(&self, width: usize) -> [usize; 2] {
        if self.is_empty() {
            return [0, 0];
        }
        let income = ((self.slices[0].share * width as f64).round() as usize).min(width);
        [income, width - income]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_colours_are_fixed() {
        let chart = PieChart::income_vs_expenses(1.0, 2.0);
        assert_eq!(chart.slices[0].label, "Income");
        assert_eq!(chart.slices[1].label, "Expenses");
        assert_eq!(chart.slices[0].color.to_string(), "#28a745");
        assert_eq!(chart.slices[1].color.to_string(), "#dc3545");
    }

    #[test]
    fn shares_are_proportional() {
        let chart = PieChart::income_vs_expenses(75.0, 25.0);
        assert_eq!(chart.slices[0].share, 0.75);
        assert_eq!(chart.slices[1].share, 0.25);
        assert_eq!(chart.segment_widths(20), [15, 5]);
    }

    #[test]
    fn zero_totals_give_an_empty_chart() {
        let chart = PieChart::income_vs_expenses(0.0, 0.0);
        assert!(chart.is_empty());
        assert_eq!(chart.slices[0].share, 0.0);
        assert_eq!(chart.segment_widths(20), [0, 0]);
    }

    #[test]
    fn segment_widths_fill_the_bar() {
        let chart = PieChart::income_vs_expenses(1.0, 2.0);
        let [income, expense] = chart.segment_widths(10);
        assert_eq!(income + expense, 10);
    }
}
