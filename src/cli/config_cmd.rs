//! Config commands

use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;

use super::output::Output;
use crate::config::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cmd: ConfigCommands, output: &Output, explicit: Option<&Path>, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(output, explicit, config),
        ConfigCommands::Path => path(output, explicit),
        ConfigCommands::Init { force } => init(output, explicit, force),
    }
}

fn show(output: &Output, explicit: Option<&Path>, config: &Config) -> Result<()> {
    let path = Config::resolve_path(explicit);

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.as_ref().map(|p| p.display().to_string()),
            "exists": path.as_ref().is_some_and(|p| p.exists()),
            "config": config,
        }));
    } else {
        match &path {
            Some(path) if path.exists() => println!("# {}", path.display()),
            _ => println!("# defaults (no config file)"),
        }
        print!("{}", config.to_toml()?);
    }

    Ok(())
}

fn path(output: &Output, explicit: Option<&Path>) -> Result<()> {
    let Some(path) = Config::resolve_path(explicit) else {
        bail!("Could not determine config directory");
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        }));
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

fn init(output: &Output, explicit: Option<&Path>, force: bool) -> Result<()> {
    let Some(path) = Config::resolve_path(explicit) else {
        bail!("Could not determine config directory");
    };

    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    output.verbose_ctx("config", &format!("Writing default config to {}", path.display()));
    Config::default().save(&path)?;
    output.success(&format!("Wrote default config to {}", path.display()));

    Ok(())
}
