/// Formats a track length given in microseconds as `M:SS[.mmm[uuu]]`.
///
/// Milliseconds are only shown when non-zero, and the microsecond remainder
/// is appended directly after the zero-padded milliseconds when it is
/// non-zero. Each stage truncates, nothing is rounded.
///
/// ```
/// use mprisctl::services::mpris::format_track_length;
///
/// assert_eq!(format_track_length(0), "0:00");
/// assert_eq!(format_track_length(61_000_000), "1:01");
/// assert_eq!(format_track_length(1_500), "0:00.001500");
/// ```
pub fn format_track_length(length: u64) -> String {
    let micros = length % 1000;
    let millis = (length / 1000) % 1000;
    let total_seconds = length / 1_000_000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds - minutes * 60;

    if micros != 0 {
        format!("{minutes}:{seconds:02}.{millis:03}{micros:03}")
    } else if millis != 0 {
        format!("{minutes}:{seconds:02}.{millis:03}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Converts a D-Bus position (signed microseconds) into a formatter input.
///
/// Some players report small negative positions right after a seek; those
/// render as zero.
pub fn position_micros(position: i64) -> u64 {
    u64::try_from(position).unwrap_or(0)
}
