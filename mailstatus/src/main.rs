use std::{
    path::PathBuf,
    time::{Duration, SystemTime},
};

use clap::Parser;
use mailstatus::{render, MailCollector, MailConfig};
use status::ConfigFile;
use tracing_subscriber::EnvFilter;

/// Print the number of unread emails for a status bar.
#[derive(Debug, Parser)]
#[command(name = "mailstatus", version, about)]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(short, long, env = "STATUS_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep polling, waiting for the configured interval between
    /// two polls.
    #[arg(short, long)]
    watch: bool,

    /// Print the text only, instead of the JSON record.
    #[arg(short, long)]
    text: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(ConfigFile::default_path);
    let file = ConfigFile::from_path(&path)?;
    let config = MailConfig::from_config_file(&file)?;
    let mut collector = MailCollector::from_config(&config)?;

    loop {
        let unread = collector.unread_count()?;
        let res = render(&config.collector, unread, SystemTime::now());

        if cli.text {
            println!("{}", res.text);
        } else {
            println!("{}", res.to_json()?);
        }

        if !cli.watch {
            return Ok(());
        }

        tokio::time::sleep(Duration::from_secs(config.collector.interval.max(1))).await;
    }
}
