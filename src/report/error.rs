/*!
 * Error Report
 * Red, fully rendered diagnostic for the top-level handler
 */

use crate::core::errors::StressError;
use miette::{GraphicalReportHandler, GraphicalTheme};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Render an error with its code, cause chain and help text
pub fn render_error(error: &StressError) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut rendered = String::new();

    if handler.render_report(&mut rendered, error).is_err() {
        rendered = error.to_string();
    }

    rendered
}

/// `ERROR: <diagnostic>` wrapped in red
pub fn colored_error(error: &StressError) -> String {
    format!("{RED}ERROR: {}{RESET}", render_error(error).trim_end())
}
