use async_trait::async_trait;
use pp_core::{Error, ExportOptions, PressRelease, ReleaseExporter, Result};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::PathBuf;
use tracing::info;

const SHEET_NAME: &str = "Press Releases";

#[derive(Debug, Clone)]
pub struct XlsxExporter {
    path: PathBuf,
    options: ExportOptions,
}

impl XlsxExporter {
    pub fn new(path: impl Into<PathBuf>, options: ExportOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    fn build(&self, releases: &[PressRelease]) -> std::result::Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let bold = Format::new().set_bold();
        for (col, header) in self.options.headers().into_iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &bold)?;
        }

        for (i, release) in releases.iter().enumerate() {
            let row = (i + 1) as u32;
            for (col, value) in self.options.row(release).into_iter().enumerate() {
                worksheet.write_string(row, col as u16, value)?;
            }
        }

        worksheet.autofit();
        Ok(workbook)
    }
}

#[async_trait]
impl ReleaseExporter for XlsxExporter {
    async fn export(&self, releases: &[PressRelease]) -> Result<()> {
        let mut workbook = self.build(releases).map_err(xlsx_error)?;
        workbook.save(&self.path).map_err(xlsx_error)?;
        info!(path = %self.path.display(), rows = releases.len(), "💾 Wrote spreadsheet");
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

fn xlsx_error(e: XlsxError) -> Error {
    Error::Export(e.to_string())
}
