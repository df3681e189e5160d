use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = &cli.command
    {
        // ---- INIT CONFIG ----
        if *init {
            let path = cli
                .config
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(Config::config_file);

            if path.exists() && !*force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            Config::default().save(&path)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            print!("{}", serde_yaml::to_string(cfg)?);
        }
    }

    Ok(())
}
