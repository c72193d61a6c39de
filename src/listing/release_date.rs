use crate::error::DateError;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

static MONTH_DAY: OnceLock<Regex> = OnceLock::new();

fn month_day() -> &'static Regex {
    MONTH_DAY.get_or_init(|| Regex::new(r"^([0-9]{1,2})月([0-9]{1,2})日$").expect("valid regex"))
}

/// Parses `"1月4日"` style text into a date in the same year as `reference`.
///
/// Text that isn't exactly `<month>月<day>日` gives `Ok(None)`. A month/day pair that
/// does not exist in that year (`13月1日`, `2月30日`) is an error rather than being
/// clamped into range.
pub fn parse_release_date(
    text: &str,
    reference: NaiveDate,
) -> Result<Option<NaiveDate>, DateError> {
    let Some(caps) = month_day().captures(text) else {
        return Ok(None);
    };
    // At most two ASCII digits, so these always fit.
    let month: u32 = caps[1].parse().unwrap_or_default();
    let day: u32 = caps[2].parse().unwrap_or_default();
    let year = reference.year();

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or(DateError::InvalidDate { year, month, day })
}
