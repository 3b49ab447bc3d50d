use chrono::{DateTime, Utc};

/// Short clock-time label for a chat turn ("14:05").
#[must_use]
pub fn format_clock_time(value: DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecobot_core::time::fixed_now;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_clock_time(fixed_now()), "22:13");
    }
}
