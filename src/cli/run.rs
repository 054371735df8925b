//! Command dispatch.

use std::{fs, path::Path};

use anyhow::Result;

use super::{
    ExitStatus,
    args::{Arguments, Command},
    commands::{build::build, check::check, sync::sync},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
