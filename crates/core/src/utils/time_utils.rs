use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};

fn local_millis(datetime: NaiveDateTime) -> Option<i64> {
    Local
        .from_local_datetime(&datetime)
        .earliest()
        .map(|local| local.timestamp_millis())
}

/// Unix milliseconds of 00:00:00.000 local time on `date`.
pub fn local_day_start_ms(date: NaiveDate) -> Option<i64> {
    local_millis(date.and_hms_milli_opt(0, 0, 0, 0)?)
}

/// Unix milliseconds of 23:59:59.999 local time on `date`.
pub fn local_day_end_ms(date: NaiveDate) -> Option<i64> {
    local_millis(date.and_hms_milli_opt(23, 59, 59, 999)?)
}

/// Parse a `YYYY-MM-DD` date input. Anything else is treated as unset.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
