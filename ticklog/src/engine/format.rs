//! Duration formatting shared by the stopwatch display and the session log.

/// Format whole seconds as `HH:MM:SS`.
///
/// Every field is zero-padded to two digits. Hours keep growing past 99
/// instead of wrapping.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
