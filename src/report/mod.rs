/*!
 * Report Module
 * Statistics, progress and error output on stdout
 */

pub mod error;
pub mod format;
pub mod printer;

// Re-export for convenience
pub use error::{colored_error, render_error};
pub use format::{format_mebibytes, format_seconds, group_thousands, to_mebibytes};
pub use printer::ReportWriter;
