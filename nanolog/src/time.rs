//! Wall-clock capture for record timestamps.

use chrono::{DateTime, Local};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats `time` the way records embed it, at second resolution.
fn format_timestamp(time: DateTime<Local>) -> String {
    time.format(FORMAT).to_string()
}

/// The current local wall-clock time, formatted for a record.
pub(crate) fn now_timestamp() -> String {
    format_timestamp(Local::now())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::format_timestamp;

    #[test]
    fn second_resolution_civil_format() {
        let time = chrono::Local
            .with_ymd_and_hms(2025, 4, 30, 13, 5, 9)
            .unwrap();

        assert_eq!(format_timestamp(time), "2025-04-30 13:05:09");
    }
}
