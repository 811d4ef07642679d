use anyhow::Result;
use marquee_form::{config, Config};

/// Show the effective configuration.
pub fn show_config(config: &Config) {
    println!("Current Configuration");
    println!("=====================\n");

    let path = config::config_file_path();
    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  api_base_url: {}", config.api_base_url);
    println!("  request_timeout_secs: {}", config.request_timeout_secs);
    println!("  logging.level: {:?}", config.logging.level());
    println!("  logging.coloured: {}", config.logging.coloured());

    println!("\nPriority: CLI args > ENV vars (MARQUEE_*) > Config file > Defaults");
}

/// Print the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Print an example config file.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Create the config file with defaults if it doesn't exist.
pub fn init_config() -> Result<()> {
    let path = config::config_file_path();
    if config::ensure_config_file()? {
        println!("Created config file: {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}
