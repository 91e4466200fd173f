//! Binds user actions to validation, ledger mutation, and re-rendering.
//!
//! Each handler runs to completion: it either applies and persists the change
//! or reports a validation notice and leaves state untouched.

use tracing::{info, warn};

use crate::{
    currency::Currency,
    errors::ValidationError,
    ledger::Ledger,
    prompt::UserPrompt,
    render::Renderer,
};

pub const CLEAR_CONFIRMATION: &str = "Are you sure you want to clear all your saved data?";
pub const CLEAR_DONE: &str = "All saved data has been cleared!";
pub const EXIT_PROMPT: &str = "Do you want to save your data before leaving?";

/// Raw text fields of the interaction surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputForm {
    pub income: String,
    pub expense_amount: String,
    pub expense_reason: String,
    pub expense_date: String,
    pub goal: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(ValidationError),
    /// The user declined a confirmation; nothing changed.
    Declined,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Parses numeric input. Unparseable text and infinities become NaN.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(f64::NAN)
}

pub struct Controller<R: Renderer, P: UserPrompt> {
    ledger: Ledger,
    renderer: R,
    prompt: P,
    form: InputForm,
}

impl<R: Renderer, P: UserPrompt> Controller<R, P> {
    pub fn new(ledger: Ledger, renderer: R, prompt: P) -> Self {
        Self {
            ledger,
            renderer,
            prompt,
            form: InputForm::default(),
        }
    }

    /// Builds the controller and draws the initial view from hydrated state.
    pub fn start(ledger: Ledger, renderer: R, prompt: P) -> Self {
        let mut controller = Self::new(ledger, renderer, prompt);
        controller.render_all();
        controller
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    pub fn submit_income(&mut self) -> Outcome {
        let amount = parse_number(&self.form.income);
        if let Err(err) = self.ledger.add_income(amount) {
            return self.reject(err);
        }
        self.form.income.clear();
        self.render_all();
        Outcome::Applied
    }

    pub fn submit_expense(&mut self) -> Outcome {
        let amount = parse_number(&self.form.expense_amount);
        let result =
            self.ledger
                .add_expense(amount, &self.form.expense_reason, &self.form.expense_date);
        if let Err(err) = result {
            return self.reject(err);
        }
        self.form.expense_amount.clear();
        self.form.expense_reason.clear();
        self.form.expense_date.clear();
        self.render_all();
        Outcome::Applied
    }

    /// Non-numeric goals are stored as NaN rather than rejected.
    pub fn submit_goal(&mut self) -> Outcome {
        let value = parse_number(&self.form.goal);
        if value.is_nan() {
            warn!(raw = %self.form.goal, "goal input is not numeric; storing NaN");
        }
        self.ledger.set_goal(value);
        self.form.goal.clear();
        self.render_all();
        Outcome::Applied
    }

    pub fn select_currency(&mut self, currency: Currency) -> Outcome {
        self.ledger.set_currency(currency);
        self.render_all();
        Outcome::Applied
    }

    pub fn clear_all(&mut self) -> Outcome {
        if !self.prompt.confirm(CLEAR_CONFIRMATION) {
            info!("clear declined");
            return Outcome::Declined;
        }
        self.ledger.clear_all();
        self.form = InputForm::default();
        let currency = self.ledger.currency();
        self.renderer.render_incomes(&[], currency);
        self.renderer.render_expenses(&[], currency);
        self.renderer.clear_goal_status();
        self.renderer.render_chart(0.0, 0.0);
        self.prompt.notify(CLEAR_DONE);
        Outcome::Applied
    }

    /// Advisory only: the answer is logged and exit proceeds either way.
    pub fn confirm_exit(&mut self) {
        let answer = self.prompt.confirm(EXIT_PROMPT);
        info!(answer, "exit prompt answered");
    }

    pub fn render_all(&mut self) {
        let currency = self.ledger.currency();
        let totals = self.ledger.totals();
        self.renderer.render_incomes(self.ledger.incomes(), currency);
        self.renderer
            .render_expenses(self.ledger.expenses(), currency);
        self.renderer
            .render_goal_status(&totals, self.ledger.goal(), currency);
        self.renderer.render_chart(totals.income, totals.expense);
    }

    fn reject(&mut self, err: ValidationError) -> Outcome {
        warn!(error = %err, "input rejected");
        self.prompt.notify(&err.to_string());
        Outcome::Rejected(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prompt::ScriptedPrompt, render::RecordingRenderer, storage::MemoryStore};

    fn controller(answers: &[bool]) -> Controller<RecordingRenderer, ScriptedPrompt> {
        let ledger = Ledger::hydrate(Box::new(MemoryStore::new()));
        Controller::start(
            ledger,
            RecordingRenderer::new(),
            ScriptedPrompt::with_answers(answers.iter().copied()),
        )
    }

    #[test]
    fn parse_number_yields_nan_for_garbage() {
        assert_eq!(parse_number(" 12.5 "), 12.5);
        assert!(parse_number("twelve").is_nan());
        assert!(parse_number("").is_nan());
    }

    #[test]
    fn parse_number_rejects_infinities() {
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("-Infinity").is_nan());
        assert!(parse_number("1e999").is_nan());
    }

    #[test]
    fn start_renders_every_surface() {
        let controller = controller(&[]);
        let screen = controller.renderer().screen();
        assert!(screen.incomes.is_empty());
        assert_eq!(screen.goal_status, "Savings: ₹0 / Goal: ₹0");
        assert_eq!(controller.renderer().chart_draws(), 1);
    }

    #[test]
    fn successful_income_clears_the_field() {
        let mut controller = controller(&[]);
        controller.form_mut().income = "100".into();
        assert_eq!(controller.submit_income(), Outcome::Applied);
        assert!(controller.form().income.is_empty());
        assert_eq!(controller.renderer().screen().incomes, vec!["₹100"]);
    }

    #[test]
    fn rejected_income_keeps_the_field_and_notifies() {
        let mut controller = controller(&[]);
        controller.form_mut().income = "-5".into();
        assert_eq!(
            controller.submit_income(),
            Outcome::Rejected(ValidationError::InvalidIncome)
        );
        assert_eq!(controller.form().income, "-5");
        assert_eq!(
            controller.prompt().notices(),
            ["Please enter a valid income amount."]
        );
    }

    #[test]
    fn expense_fields_clear_together() {
        let mut controller = controller(&[]);
        let form = controller.form_mut();
        form.expense_amount = "40".into();
        form.expense_reason = "food".into();
        form.expense_date = "2024-01-01".into();
        assert!(controller.submit_expense().is_applied());
        assert_eq!(controller.form(), &InputForm::default());
    }

    #[test]
    fn clear_declined_leaves_state() {
        let mut controller = controller(&[false]);
        controller.form_mut().income = "10".into();
        controller.submit_income();
        assert_eq!(controller.clear_all(), Outcome::Declined);
        assert_eq!(controller.ledger().incomes(), &[10.0]);
        assert!(controller.prompt().notices().is_empty());
    }

    #[test]
    fn exit_prompt_is_advisory() {
        let mut controller = controller(&[false]);
        controller.confirm_exit();
        assert_eq!(controller.prompt().questions(), [EXIT_PROMPT]);
    }
}
