use crate::{
    cli::{
        output,
        registry::CommandEntry,
        shell_context::{CommandResult, ShellContext},
    },
    errors::CommandError,
};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change preferences",
            "config [show|set <color|confirm-exit|assume-yes|store> <value>]",
            cmd_config,
        ),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
        CommandEntry::new("quit", "Exit the shell", "quit", cmd_exit),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    if !args[0].eq_ignore_ascii_case("set") {
        return Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}`",
            args[0]
        )));
    }
    if args.len() < 3 {
        return Err(CommandError::InvalidArguments(
            "usage: config set <color|confirm-exit|assume-yes|store> <value>".into(),
        ));
    }
    let key = args[1];
    let value = args[2..].join(" ");
    context.set_config_value(key, value.trim())?;
    if key.eq_ignore_ascii_case("store") {
        output::success("Store location saved; it takes effect on the next start.");
    } else {
        output::success(format!("Setting `{}` updated.", key));
    }
    Ok(())
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output::section("Configuration");
    output::info(format!("  Config file     : {}", context.config_manager.path().display()));
    output::info(format!("  Store file      : {}", context.store_path.display()));
    output::info(format!("  Colour output   : {}", config.ui_color_enabled));
    output::info(format!("  Confirm on exit : {}", config.confirm_on_exit));
    output::info(format!("  Assume yes      : {}", config.assume_yes));
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        match context.registry.get(&name) {
            Some(entry) => {
                output::section(entry.name);
                output::info(format!("  {}", entry.description));
                output::info(format!("  Usage: {}", entry.usage));
            }
            None => context.suggest_command(args[0]),
        }
        return Ok(());
    }

    output::section("Commands");
    for entry in context.registry.list() {
        output::info(format!("  {:<40} {}", entry.usage, entry.description));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
