use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use hanser_fetch::cli::Cli;
use hanser_fetch::utils::display_elapsed_time;
use hanser_fetch::{Config, HanserCrawler, logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The log file lives in the output directory.
    tokio::fs::create_dir_all(&cli.dir).await?;
    let dispatch = logger::build(cli.debug, &cli.dir)?;
    let _log = tracing::dispatcher::set_default(&dispatch);
    debug!("{:?}", cli);

    let config = Config::load(cli.config.as_deref())?;
    let crawler = HanserCrawler::new(config, cli.dir, dispatch)?;

    let start = Instant::now();
    let summary = crawler.download_book(cli.url.as_str()).await?;
    display_elapsed_time(summary.files.len(), start.elapsed());

    Ok(())
}
