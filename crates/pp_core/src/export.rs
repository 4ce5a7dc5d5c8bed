use async_trait::async_trait;
use crate::types::PressRelease;
use crate::Result;

/// Spreadsheet header, in column order. `Tags` is optional per export.
pub const COLUMNS: [&str; 6] = ["Date", "Company", "Title", "URL", "Tags", "Category"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub include_tags: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { include_tags: true }
    }
}

impl ExportOptions {
    pub fn headers(&self) -> Vec<&'static str> {
        COLUMNS
            .iter()
            .copied()
            .filter(|c| self.include_tags || *c != "Tags")
            .collect()
    }

    /// One spreadsheet row for `release`, aligned with [`ExportOptions::headers`].
    pub fn row(&self, release: &PressRelease) -> Vec<String> {
        let mut row = vec![
            crate::date::format_iso(release.date),
            release.company.clone(),
            release.title.clone(),
            release.url.clone(),
        ];
        if self.include_tags {
            row.push(release.tags_joined());
        }
        row.push(release.category.label().to_string());
        row
    }
}

#[async_trait]
pub trait ReleaseExporter: Send + Sync {
    /// Writes every release in one pass, replacing any previous output.
    async fn export(&self, releases: &[PressRelease]) -> Result<()>;

    /// Human readable destination, used in console output.
    fn destination(&self) -> String;
}
