pub mod csv;
pub mod memory;
pub mod xlsx;

pub use self::csv::CsvExporter;
pub use memory::MemoryExporter;
pub use xlsx::XlsxExporter;
