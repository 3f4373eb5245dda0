pub mod chapter;
pub mod cli;
pub mod config;
pub mod crawler;
pub mod error;
pub mod logger;
pub mod utils;

pub use chapter::{ChapterEntry, build_filename};
pub use config::Config;
pub use crawler::{DownloadSummary, HanserCrawler};
pub use error::{ExtractError, FetchError};
