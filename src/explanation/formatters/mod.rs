pub mod markdown;
pub mod json;
pub mod csv_table;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
pub use csv_table::CsvFormatter;
