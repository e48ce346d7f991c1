//! Build a logger from the DSN in a config file and log a couple of entries
//!
//! Run with: `cargo run --example dsn_logging -- --env testing --config-dir demos/config`
//!
//! The config file is `<config-dir>/config.toml`:
//!
//! ```toml
//! [log]
//! dsn = "stdout://?level=debug"
//! ```

use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::process;
use syslog_logstash_logger::{Field, LoggerConfig};

const APP_NAME: &str = "appTestName";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Application environment
    #[arg(long, default_value = "testing")]
    env: String,

    /// Directory holding config.toml
    #[arg(long, default_value = "demos/config")]
    config_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct AppConfig {
    log: LoggerConfig,
}

fn load_config(cli: &Cli) -> Result<LoggerConfig, String> {
    let path = cli.config_dir.join(CONFIG_FILE_NAME);
    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Unable to load config from {}: {}", path.display(), e))?;
    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| format!("Invalid config in {}: {}", path.display(), e))?;

    Ok(config
        .log
        .with_application(APP_NAME)
        .with_environment(cli.env.as_str()))
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let logger = match config.build() {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error creating new logger: {}", e);
            process::exit(1);
        }
    };

    logger.info(
        "Running...",
        [Field::new("newField1", "value1"), Field::new("newField2", 2)],
    );
    logger.debug(
        "Debugging Running...",
        [Field::new("newField1", "value1"), Field::new("newField2", 2)],
    );
}
