use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{missing_keys, run_config_migration};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !path.exists() {
                info(format!("No config file at {}; defaults are in use.", path.display()));
            } else {
                let missing = missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields: {} (run `timevault config --migrate`)",
                        missing.join(", ")
                    ));
                }
            }
        }

        if *migrate {
            run_config_migration()?;
        }

        if *edit_config {
            edit(&path, editor.clone());
        }
    }

    Ok(())
}

fn edit(path: &std::path::Path, requested: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor_to_use}'"));
            return;
        }
        _ => warning(format!(
            "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => success(format!(
            "Configuration file edited using fallback '{default_editor}'"
        )),
        _ => error(format!(
            "Failed to edit configuration file using fallback '{default_editor}'"
        )),
    }
}
