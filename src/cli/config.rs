use crate::cli::ConfigCommands;
use azcred::config::Settings;
use azcred::error::Result;

pub fn run(cmd: &ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(),
    }
}

fn show() -> Result<()> {
    let settings = Settings::load();
    println!("{}", settings.to_toml()?);
    Ok(())
}
