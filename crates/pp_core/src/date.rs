use chrono::NaiveDate;
use tracing::trace;

pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Tries an ordered list of strftime patterns against raw listing text.
#[derive(Debug, Clone)]
pub struct DateParser {
    formats: Vec<&'static str>,
}

impl DateParser {
    pub fn new(formats: &[&'static str]) -> Self {
        Self {
            formats: formats.to_vec(),
        }
    }

    /// Returns the first successful parse, or `None` once every pattern failed.
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let text = raw.trim();
        let parsed = self
            .formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok());
        if parsed.is_none() {
            trace!(raw = %text, "No date format matched");
        }
        parsed
    }
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}
