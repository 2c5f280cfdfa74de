/// `HH:MM:SS` for an elapsed duration in milliseconds. Hours keep counting
/// past 99 rather than wrapping.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let hours = elapsed_ms / 3_600_000;
    let minutes = (elapsed_ms % 3_600_000) / 60_000;
    let seconds = (elapsed_ms % 60_000) / 1_000;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
