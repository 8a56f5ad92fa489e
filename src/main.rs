use clap::Parser;
use paneboard::core::config::{self, DEFAULT_LOG_FILE};
use paneboard::core::feed::Feed;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paneboard", about = "Three-pane terminal feed dashboard")]
struct Args {
    /// Feed file to display (.toml or .json); defaults to the built-in demo feed
    #[arg(short, long)]
    feed: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::PaneboardConfig::default(), Some(e)),
    };
    let resolved = config::resolve(&file_config, args.feed.as_deref());

    // Initialize file logger - the terminal belongs to the dashboard
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Paneboard starting up");
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    let feed = match &resolved.feed_file {
        Some(path) => Feed::load(path).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("{}: {e}", path.display()),
            )
        })?,
        None => Feed::demo(),
    };

    paneboard::tui::run(&resolved, feed)
}
