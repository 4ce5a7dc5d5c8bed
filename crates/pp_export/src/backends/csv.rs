use async_trait::async_trait;
use pp_core::{Error, ExportOptions, PressRelease, ReleaseExporter, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
    options: ExportOptions,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>, options: ExportOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    fn write(&self, releases: &[PressRelease]) -> std::result::Result<(), ::csv::Error> {
        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(self.options.headers())?;
        for release in releases {
            writer.write_record(self.options.row(release))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl ReleaseExporter for CsvExporter {
    async fn export(&self, releases: &[PressRelease]) -> Result<()> {
        self.write(releases)
            .map_err(|e| Error::Export(format!("Failed to write {}: {}", self.path.display(), e)))?;
        info!(path = %self.path.display(), rows = releases.len(), "💾 Wrote CSV");
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}
