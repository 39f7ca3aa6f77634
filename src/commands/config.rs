//! Config subcommands handler

use anyhow::Result;

use phrasesync::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print where the configuration file lives.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("{}", path.display());
    } else {
        println!("{} (not created, using defaults)", path.display());
    }
    Ok(())
}
