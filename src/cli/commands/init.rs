use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and a configuration file with
/// default values. An existing file is never overwritten.
pub fn handle(config_path: &Path) -> AppResult<()> {
    println!("⚙️  Initializing rbreakcheck…");

    if Config::init_at(config_path)? {
        success(format!("Config file created: {}", config_path.display()));
    } else {
        info(format!(
            "Config file already exists, left untouched: {}",
            config_path.display()
        ));
    }

    println!("🎉 rbreakcheck initialization completed!");
    Ok(())
}
