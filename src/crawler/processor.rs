use std::path::{Path, PathBuf};

use anyhow::Result;
use bytes::Bytes;
use tokio::fs;
use tracing::{info, instrument};

use crate::chapter::ChapterEntry;

#[derive(Clone)]
pub struct Processor {
    output_dir: PathBuf,
}

impl Processor {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub async fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).await?;
        Ok(())
    }

    /// Overwrites whatever already sits at the target path.
    #[instrument(skip_all, fields(index = chapter.index))]
    pub async fn write_pdf(&self, pdf_bytes: Bytes, chapter: &ChapterEntry) -> Result<PathBuf> {
        let pdf_path = self.output_dir.join(chapter.filename());
        info!("Saving file to {}", pdf_path.display());
        fs::write(&pdf_path, &pdf_bytes)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", pdf_path.display(), e))?;
        info!("File {} downloaded", chapter.index);
        Ok(pdf_path)
    }
}
