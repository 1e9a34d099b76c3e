/// Renders an expiration in whole hours, rounding down.
pub fn format_time_remaining(seconds: u64) -> String {
    let hours = seconds / 3600;
    let unit = if hours == 1 { "hour" } else { "hours" };
    format!("{hours} {unit}")
}
