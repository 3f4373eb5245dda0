use std::path::PathBuf;

use clap::Parser;
use url::Url;

pub static DEFAULT_DIR: &str = "Hanser";
pub static DEFAULT_URL: &str = "https://www.hanser-elibrary.com/doi/book/10.3139/9783446456013";

/// Download every chapter PDF of a book from the Hanser eLibrary.
#[derive(Parser, Debug)]
#[command(name = "hanser-fetch", version, about)]
pub struct Cli {
    /// Enable debug output, written to download.log in the target directory.
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// Directory that the downloaded files should be saved to.
    #[arg(long, default_value = DEFAULT_DIR)]
    pub dir: PathBuf,

    /// Url to the book to download.
    #[arg(short, long, default_value = DEFAULT_URL, value_parser = parse_url)]
    pub url: Url,

    /// Configuration file (TOML); defaults to ./hanser_fetch.toml when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn parse_url(s: &str) -> Result<Url, String> {
    Url::parse(s).map_err(|e| format!("invalid url '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["hanser-fetch"]).unwrap();
        assert!(!cli.debug);
        assert_eq!(cli.dir, PathBuf::from(DEFAULT_DIR));
        assert_eq!(cli.url.as_str(), DEFAULT_URL);
        assert!(cli.config.is_none());
    }

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::try_parse_from([
            "hanser-fetch",
            "-d",
            "--dir",
            "out",
            "-u",
            "https://www.hanser-elibrary.com/doi/book/10.3139/9783446450004",
        ])
        .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.dir, PathBuf::from("out"));
        assert_eq!(
            cli.url.as_str(),
            "https://www.hanser-elibrary.com/doi/book/10.3139/9783446450004"
        );
    }

    #[test]
    fn relative_url_is_rejected() {
        assert!(Cli::try_parse_from(["hanser-fetch", "--url", "/doi/book/1"]).is_err());
    }
}
