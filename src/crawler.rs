pub mod downloader;
pub mod parser;
pub mod processor;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{Dispatch, info, instrument};

pub use downloader::Downloader;
pub use parser::{Pairing, Parser};
pub use processor::Processor;

use crate::config::Config;
use crate::logger;

/// Files written by one run, in chapter order.
#[derive(Debug, Default)]
pub struct DownloadSummary {
    pub files: Vec<PathBuf>,
}

pub struct HanserCrawler {
    config: Config,
    downloader: Downloader,
    processor: Processor,
    dispatch: Dispatch,
}

impl HanserCrawler {
    /// All logging of the run goes to `dispatch`.
    pub fn new(config: Config, output_dir: PathBuf, dispatch: Dispatch) -> Result<Self> {
        let downloader = Downloader::new(&config.http, dispatch.clone())?;
        Ok(Self {
            config,
            downloader,
            processor: Processor::new(output_dir),
            dispatch,
        })
    }

    /// Fetches the catalog page and stores every chapter PDF it links to.
    ///
    /// The first failed request or write stops the run; files already
    /// written stay on disk.
    pub async fn download_book(&self, url: &str) -> Result<DownloadSummary> {
        logger::scoped(&self.dispatch, || self.run(url)).await
    }

    #[instrument(name = "download_book", skip(self))]
    async fn run(&self, url: &str) -> Result<DownloadSummary> {
        // The binary already made it for the log file; library callers may not have.
        self.processor.ensure_output_dir().await?;

        let catalog_html = self.downloader.page(url).await?;
        let chapters = Parser::new(&self.config.site).parse_chapters(&catalog_html)?;

        let total = chapters.len();
        let mut summary = DownloadSummary::default();
        for chapter in &chapters {
            info!("Downloading file {}/{}: {}", chapter.index, total, chapter.link);
            let pdf_bytes = self.downloader.pdf(&chapter.link).await?;
            let path = self.processor.write_pdf(pdf_bytes, chapter).await?;
            summary.files.push(path);
        }

        info!(
            "All PDF files downloaded to {}",
            self.processor.output_dir().display()
        );
        Ok(summary)
    }
}
