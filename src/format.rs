use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const CLOCK_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Formats `datetime` as a two-digit clock reading in the given offset.
pub fn format_clock_in(datetime: OffsetDateTime, offset: UtcOffset) -> String {
    datetime
        .to_offset(offset)
        .format(CLOCK_FORMAT)
        .unwrap_or_default()
}

pub fn format_clock(datetime: OffsetDateTime) -> String {
    format_clock_in(datetime, local_offset())
}

pub fn clock_now() -> String {
    format_clock(OffsetDateTime::now_utc())
}

/// Renders an ISO-8601 answer timestamp. Unparsable input yields an empty string.
pub fn answer_time_in(iso: &str, offset: UtcOffset) -> String {
    match OffsetDateTime::parse(iso.trim(), &Rfc3339) {
        Ok(datetime) => format_clock_in(datetime, offset),
        Err(err) => {
            tracing::debug!("unparsable answer timestamp {iso:?}: {err}");
            String::new()
        }
    }
}

pub fn answer_time(iso: &str) -> String {
    answer_time_in(iso, local_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn formats_two_digit_clock() {
        assert_eq!(
            format_clock_in(datetime!(2024-01-01 09:05 UTC), UtcOffset::UTC),
            "09:05 AM"
        );
        assert_eq!(
            format_clock_in(datetime!(2024-01-01 21:30 UTC), UtcOffset::UTC),
            "09:30 PM"
        );
    }

    #[test]
    fn answer_time_converts_offset() {
        assert_eq!(answer_time_in("2024-01-01T10:00:00Z", UtcOffset::UTC), "10:00 AM");
        assert_eq!(answer_time_in("2024-01-01T10:00:00Z", offset!(+5:30)), "03:30 PM");
        assert_eq!(
            answer_time_in("2024-01-01T10:00:00.123456Z", UtcOffset::UTC),
            "10:00 AM"
        );
    }

    #[test]
    fn unparsable_timestamp_is_empty() {
        assert_eq!(answer_time_in("yesterday-ish", UtcOffset::UTC), "");
        assert_eq!(answer_time_in("", UtcOffset::UTC), "");
    }
}
