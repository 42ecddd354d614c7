//! Formatting utilities for CLI output.
//!
//! Builds the one-line track summary and styles error messages for the
//! terminal.

use std::io::{self, Write};

use super::CliError;
use crate::services::mpris::{Metadata, PlaybackStatus, format_track_length, position_micros};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Writes the user-facing message for a failed invocation to `out`
///
/// The message goes to the same stream as normal command output; stderr
/// carries only log diagnostics. `styled` adds the red highlight.
///
/// # Errors
/// Returns the write error from `out`
pub fn write_error(out: &mut dyn Write, error: &CliError, styled: bool) -> io::Result<()> {
    let message = error.to_string();
    if styled {
        writeln!(out, "{}", format_error(&message))
    } else {
        writeln!(out, "{message}")
    }
}

/// Formats the `STATUS: "TITLE" by ARTIST (ELAPSED/TOTAL)` summary line.
///
/// The elapsed/total part is left out when the track has no known length,
/// which is the usual case for live streams.
///
/// # Examples
///
/// ```
/// use mprisctl::cli::formatting::format_status_line;
/// use mprisctl::services::mpris::{Metadata, MetadataValue, PlaybackStatus};
///
/// let metadata: Metadata = [
///     ("xesam:title".to_string(), MetadataValue::Text("Song".into())),
///     ("mpris:length".to_string(), MetadataValue::Integer(61_000_000)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(
///     format_status_line(&PlaybackStatus::Paused, &metadata, 1_000_000),
///     "Paused: \"Song\" by [Unknown] (0:01/1:01)"
/// );
/// ```
pub fn format_status_line(status: &PlaybackStatus, metadata: &Metadata, position: i64) -> String {
    let title = metadata.display_title();
    let artist = metadata.display_artist();

    match metadata.known_length() {
        Some(length) => format!(
            "{status}: \"{title}\" by {artist} ({}/{})",
            format_track_length(position_micros(position)),
            format_track_length(length),
        ),
        None => format!("{status}: \"{title}\" by {artist}"),
    }
}
