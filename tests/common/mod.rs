#![allow(dead_code)]

use finance_tracker::{
    controller::Controller,
    ledger::Ledger,
    prompt::ScriptedPrompt,
    render::RecordingRenderer,
    storage::{KeyValueStore, MemoryStore},
};

pub type TestController = Controller<RecordingRenderer, ScriptedPrompt>;

/// Controller over an empty in-memory store, answering confirmations from `answers`.
pub fn memory_controller(answers: &[bool]) -> TestController {
    controller_over(Box::new(MemoryStore::new()), answers)
}

pub fn controller_over(store: Box<dyn KeyValueStore>, answers: &[bool]) -> TestController {
    Controller::start(
        Ledger::hydrate(store),
        RecordingRenderer::new(),
        ScriptedPrompt::with_answers(answers.iter().copied()),
    )
}

pub fn add_income(controller: &mut TestController, raw: &str) {
    controller.form_mut().income = raw.to_string();
    controller.submit_income();
}

pub fn add_expense(controller: &mut TestController, amount: &str, reason: &str, date: &str) {
    let form = controller.form_mut();
    form.expense_amount = amount.to_string();
    form.expense_reason = reason.to_string();
    form.expense_date = date.to_string();
    controller.submit_expense();
}

pub fn set_goal(controller: &mut TestController, raw: &str) {
    controller.form_mut().goal = raw.to_string();
    controller.submit_goal();
}
