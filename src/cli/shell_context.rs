use std::{io::Stdout, path::PathBuf};

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use tracing::info;

use crate::{
    cli::{commands, output, prompts::DialoguerPrompt, registry::CommandRegistry},
    config::{Config, ConfigManager},
    controller::Controller,
    errors::{CliError, CommandError},
    ledger::Ledger,
    prompt::{AutoPrompt, UserPrompt},
    render::TerminalRenderer,
    storage::JsonFileStore,
};

pub type CommandResult = Result<(), CommandError>;

pub type ShellController = Controller<TerminalRenderer<Stdout>, Box<dyn UserPrompt>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub store_path: PathBuf,
    pub controller: ShellController,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?.with_env_overrides();
        output::apply_config(&config);

        let store_path = config_manager.store_path(&config);
        let ledger = Ledger::hydrate(Box::new(JsonFileStore::open(&store_path)));
        let prompt: Box<dyn UserPrompt> = match mode {
            CliMode::Interactive => Box::new(DialoguerPrompt::new()),
            CliMode::Script => Box::new(AutoPrompt::new(config.assume_yes)),
        };
        info!(store = %store_path.display(), ?mode, "starting shell");
        let controller = Controller::start(ledger, TerminalRenderer::stdout(), prompt);

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            store_path,
            controller,
            running: true,
        })
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        format!("finance [{}]> ", self.controller.ledger().currency())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &lowered), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    /// Persists one setting and applies it to the running shell.
    ///
    /// Starts from the file contents so environment overrides are never saved.
    pub(crate) fn set_config_value(&mut self, key: &str, value: &str) -> CommandResult {
        let mut persisted = self.config_manager.load()?;
        persisted.set(key, value)?;
        self.config_manager.save(&persisted)?;
        info!(key, value, "configuration updated");
        self.config = persisted.with_env_overrides();
        output::apply_config(&self.config);
        Ok(())
    }

    /// Runs the exit transition before the shell goes away.
    pub(crate) fn shutdown(&mut self) {
        if self.config.confirm_on_exit {
            self.controller.confirm_exit();
        }
        self.running = false;
        output::info("Goodbye.");
    }
}
