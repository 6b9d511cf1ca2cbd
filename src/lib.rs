// Informes C3 - Core Library
// Shared between the c3 and mensajes binaries and the tests

pub mod dates;
pub mod entry;
pub mod export;
pub mod report;
pub mod transcript;
pub mod validate;

// Re-export commonly used items
pub use entry::{extract_code, EventEntry, HEADERS};
pub use export::parse_export;
pub use report::ReportWriter;
pub use transcript::{folder_files, parse_transcript};
pub use validate::{folder_exists, input_exists, output_free};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
