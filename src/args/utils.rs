//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level`.
/// - One-shot modes default to `warn` so stderr stays quiet unless asked.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if args.is_one_shot() && args.log_level == "info" {
        "warn".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Flatten rendered lines to plain text.
///
/// Details:
/// - Span styling is dropped; one string per line.
#[must_use]
pub fn plain_lines(lines: &[ratatui::text::Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}
