use anyhow::Result;

use taskpad::config::Config;
use taskpad::constants::CONFIG_GENERATED;
use taskpad::logger::Logger;
use taskpad::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--init-config" => {
                let path = Config::get_default_config_path()?;
                Config::generate_default_config(&path)?;
                println!("{}: {}", CONFIG_GENERATED, path.display());
                return Ok(());
            }
            "--version" | "-V" => {
                println!("taskpad {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("taskpad - a keyboard-driven to-do list in your terminal");
                println!();
                println!("Usage: taskpad [--init-config | --version | --help]");
                println!();
                println!("  --init-config  Write a default config file and exit");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: taskpad [--init-config | --version | --help]");
                std::process::exit(2);
            }
        }
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install();
    log::info!("taskpad starting");

    ui::run_app(config, logger).await
}
