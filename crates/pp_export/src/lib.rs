//! Spreadsheet output for aggregated press releases.
//!
//! Every backend buffers the full result set and writes it in one pass,
//! overwriting whatever was at the destination before.

use pp_core::{ExportOptions, ReleaseExporter};
use std::path::{Path, PathBuf};

pub mod backends;

pub use backends::*;

pub const DEFAULT_OUTPUT: &str = "combined_press_releases.xlsx";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// Picks the format from the file extension; anything unknown is XLSX.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => ExportFormat::Csv,
            _ => ExportFormat::Xlsx,
        }
    }
}

pub fn create_exporter(
    format: ExportFormat,
    path: impl Into<PathBuf>,
    options: ExportOptions,
) -> Box<dyn ReleaseExporter> {
    let path = path.into();
    match format {
        ExportFormat::Xlsx => Box::new(XlsxExporter::new(path, options)),
        ExportFormat::Csv => Box::new(CsvExporter::new(path, options)),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_exporter, ExportFormat};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("OUT.CSV")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out.xlsx")), ExportFormat::Xlsx);
        assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Xlsx);
    }

    #[test]
    fn test_create_exporter_destination() {
        let exporter = create_exporter(ExportFormat::Csv, "releases.csv", ExportOptions::default());
        assert_eq!(exporter.destination(), "releases.csv");
    }
}
