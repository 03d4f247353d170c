mod core;
mod export;
mod submit;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config::{self, FactFinderConfig};
use crate::core::draft;

#[derive(Parser)]
#[command(name = "factfinder", about = "Clare & Ben online checklist and fact finder")]
struct Args {
    /// Webhook URL submissions POST to (overrides config file and env var)
    #[arg(long)]
    webhook: Option<String>,

    /// Delete the saved draft and start with a blank form
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to factfinder.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("factfinder.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            log::warn!("Config unusable ({e}); continuing with defaults");
            FactFinderConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.webhook.as_deref());

    if args.reset {
        draft::delete();
    }

    log::info!(
        "Fact finder starting up (webhook: {}, exports: {})",
        resolved.webhook_url.as_deref().unwrap_or("none"),
        resolved.export_dir.display()
    );

    tui::run(resolved)
}
