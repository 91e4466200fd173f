#![doc(test(attr(deny(warnings))))]

//! Finance Tracker records incomes and dated expenses, tracks a savings goal,
//! and renders an income-versus-expenses summary. All state is persisted to a
//! string-keyed store after every change.

pub mod cli;
pub mod config;
pub mod controller;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod prompt;
pub mod render;
pub mod storage;
pub mod utils;

/// Initializes global tracing. Safe to call more than once.
pub fn init() {
    utils::init_tracing();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
