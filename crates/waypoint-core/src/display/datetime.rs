//! Local-time rendering of roadmap timestamps.
//!
//! Roadmaps store `created_at`/`updated_at` as UTC [`Timestamp`]s; the
//! metadata block of a rendered roadmap shows them in the system
//! timezone instead.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a stored timestamp as `YYYY-MM-DD HH:MM:SS TZ` in local time.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_has_date_and_zone() {
        let created_at = Timestamp::now();
        let rendered = LocalDateTime(&created_at).to_string();
        // YYYY-MM-DD prefix plus a trailing zone abbreviation.
        assert_eq!(rendered.as_bytes()[4], b'-');
        assert_eq!(rendered.as_bytes()[7], b'-');
        assert!(rendered.len() > "2026-01-01 00:00:00".len());
    }
}
