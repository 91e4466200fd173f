use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use tracing::warn;

use crate::{cli::output, currency::Currency, prompt::UserPrompt};

/// Terminal dialogs backed by `dialoguer`.
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPrompt for DialoguerPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        match Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "confirmation prompt failed; treating as no");
                false
            }
        }
    }

    fn notify(&mut self, message: &str) {
        output::notice(message);
    }
}

/// Lets the user pick one of the enumerated currencies. `None` when dismissed.
pub fn select_currency(
    theme: &ColorfulTheme,
    current: Currency,
) -> Result<Option<Currency>, dialoguer::Error> {
    let items: Vec<String> = Currency::ALL
        .iter()
        .map(|currency| format!("{} ({})", currency.code(), currency.symbol()))
        .collect();
    let default = Currency::ALL
        .iter()
        .position(|currency| *currency == current)
        .unwrap_or(0);
    let selection = Select::with_theme(theme)
        .with_prompt("Display currency")
        .items(&items)
        .default(default)
        .interact_opt()?;
    Ok(selection.and_then(|index| Currency::ALL.get(index).copied()))
}
