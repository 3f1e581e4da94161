use time::macros::format_description;
use time::OffsetDateTime;

/// One timestamped block appended per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub language: String,
    pub timestamp: OffsetDateTime,
}

impl LogEntry {
    pub fn new<S: Into<String>>(language: S, timestamp: OffsetDateTime) -> LogEntry {
        LogEntry { language: language.into(), timestamp }
    }

    /// Captures the current local time. Falls back to UTC when the local
    /// offset cannot be determined.
    pub fn now<S: Into<String>>(language: S) -> LogEntry {
        let timestamp = match OffsetDateTime::now_local() {
            Ok(t) => t,
            Err(e) => {
                warn!("cannot determine local time offset ({}), using UTC", e);
                OffsetDateTime::now_utc()
            }
        };

        LogEntry::new(language, timestamp)
    }

    pub fn render(&self) -> Result<String, time::error::Format> {
        Ok(format!(
            "This program is written in {}.\nCurrent Time = {}\n",
            self.language,
            format_timestamp(self.timestamp)?
        ))
    }
}

/// Renders `YYYY/MM/DD HH:MM:SS` in the timestamp's own offset.
pub fn format_timestamp(t: OffsetDateTime) -> Result<String, time::error::Format> {
    t.format(format_description!("[year]/[month]/[day] [hour]:[minute]:[second]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn timestamp_is_zero_padded() {
        assert_eq!(format_timestamp(datetime!(2024-01-01 0:00:00 UTC)).unwrap(), "2024/01/01 00:00:00");
        assert_eq!(format_timestamp(datetime!(1999-12-31 23:59:59 UTC)).unwrap(), "1999/12/31 23:59:59");
    }

    #[test]
    fn timestamp_keeps_the_entry_offset() {
        // wall clock of the recorded offset, not UTC
        let t = datetime!(2024-03-05 7:08:09 +9);
        assert_eq!(format_timestamp(t).unwrap(), "2024/03/05 07:08:09");
    }

    #[test]
    fn render_matches_template() {
        let entry = LogEntry::new("Rust", datetime!(2024-01-01 0:00:00 UTC));
        assert_eq!(
            entry.render().unwrap(),
            "This program is written in Rust.\nCurrent Time = 2024/01/01 00:00:00\n"
        );
    }

    #[test]
    fn render_is_fixed_length_for_a_language() {
        let a = LogEntry::new("Rust", datetime!(2024-01-01 0:00:00 UTC)).render().unwrap();
        let b = LogEntry::new("Rust", datetime!(2031-11-22 13:44:55 UTC)).render().unwrap();
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn now_uses_given_language() {
        let entry = LogEntry::now("Go");
        assert!(entry.render().unwrap().starts_with("This program is written in Go.\nCurrent Time = "));
    }
}
