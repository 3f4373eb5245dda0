use scraper::{ElementRef, Html};
use tracing::{debug, info, instrument};

use crate::chapter::ChapterEntry;
use crate::config::SiteConfig;
use crate::error::ExtractError;

/// Outcome of matching chapter titles against PDF links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pairing {
    /// One title per link, in document order.
    Paired(Vec<String>),
    /// Counts differ; every entry goes unnamed.
    NamesDiscarded { names: usize, links: usize },
}

impl Pairing {
    pub fn select(names: Vec<String>, link_count: usize) -> Self {
        if names.len() == link_count {
            Pairing::Paired(names)
        } else {
            Pairing::NamesDiscarded {
                names: names.len(),
                links: link_count,
            }
        }
    }

    pub fn into_entries(self, links: Vec<String>) -> Vec<ChapterEntry> {
        let names: Vec<String> = match self {
            Pairing::Paired(names) => names,
            Pairing::NamesDiscarded { .. } => vec![String::new(); links.len()],
        };

        names
            .into_iter()
            .zip(links)
            .enumerate()
            .map(|(i, (name, link))| ChapterEntry::new(i + 1, name, link))
            .collect()
    }
}

#[derive(Clone, Copy)]
pub struct Parser<'a> {
    config: &'a SiteConfig,
}

impl<'a> Parser<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Titles of headings that carry no CSS classes, in document order.
    pub fn chapter_names(&self, document: &Html) -> Vec<String> {
        document
            .select(&self.config.chapter_name)
            .filter(|heading| heading.value().classes().next().is_none())
            .map(format_chapter_name)
            .collect()
    }

    pub fn chapter_links(&self, document: &Html) -> Result<Vec<String>, ExtractError> {
        document
            .select(&self.config.chapter_link)
            .enumerate()
            .map(|(i, anchor)| format_chapter_link(&self.config.origin, anchor, i + 1))
            .collect()
    }

    #[instrument(skip_all)]
    pub fn chapters(&self, document: &Html) -> Result<Vec<ChapterEntry>, ExtractError> {
        let links = self.chapter_links(document)?;
        let names = self.chapter_names(document);
        debug!("Found {} chapter names and {} PDF links", names.len(), links.len());

        let pairing = Pairing::select(names, links.len());
        if let Pairing::NamesDiscarded { names: found, links: expected } = pairing {
            info!(
                "Found {} chapter names for {} PDF links, files will be numbered only",
                found, expected
            );
        }

        let entries = pairing.into_entries(links);
        info!("Found {} chapters", entries.len());
        Ok(entries)
    }

    pub fn parse_chapters(&self, html: &str) -> Result<Vec<ChapterEntry>, ExtractError> {
        let document = Html::parse_document(html);
        self.chapters(&document)
    }
}

pub fn format_chapter_name(heading: ElementRef) -> String {
    heading.text().collect::<String>().trim().to_string()
}

/// Prefixes `origin` and swaps every `epdf` (reader view) for `pdf` (the file).
pub fn format_chapter_link(
    origin: &str,
    anchor: ElementRef,
    position: usize,
) -> Result<String, ExtractError> {
    let Some(href) = anchor.value().attr("href") else {
        return Err(ExtractError::MalformedLink {
            position,
            html: anchor.html(),
        });
    };
    Ok(format!("{}{}", origin, href).replace("epdf", "pdf"))
}
