/// Format a play time in seconds as human-readable hours/minutes/seconds.
///
/// Shows the two most significant units: "2h 30m", "15m 4s", "42s".
pub fn human_readable_time(total_sec: u64) -> String {
    let hours = total_sec / 3600;
    let minutes = (total_sec % 3600) / 60;
    let seconds = total_sec % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_only() {
        assert_eq!(human_readable_time(0), "0s");
        assert_eq!(human_readable_time(59), "59s");
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(human_readable_time(60), "1m 0s");
        assert_eq!(human_readable_time(904), "15m 4s");
    }

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(human_readable_time(3600), "1h 0m");
        assert_eq!(human_readable_time(3661), "1h 1m");
        assert_eq!(human_readable_time(9000), "2h 30m");
    }
}
