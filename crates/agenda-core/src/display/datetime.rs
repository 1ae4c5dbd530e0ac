//! Timestamp display in the reader's timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Shows a stored UTC timestamp in the system timezone, e.g.
/// `05 Mar 2024, 14:30 IST`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    /// Formats in an explicit timezone instead of the system one.
    pub fn in_zone(&self, tz: TimeZone) -> String {
        self.0.to_zoned(tz).strftime("%d %b %Y, %H:%M %Z").to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.in_zone(TimeZone::system()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_rendering() {
        let at: Timestamp = "2024-03-05T14:30:00Z".parse().unwrap();
        assert_eq!(LocalDateTime(&at).in_zone(TimeZone::UTC), "05 Mar 2024, 14:30 UTC");
    }
}
