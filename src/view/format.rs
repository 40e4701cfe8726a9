use chrono::{NaiveDate, NaiveTime, Timelike};

/// `13:05` → `1:05 PM`, `00:30` → `12:30 AM`.
pub fn format_time(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), suffix)
}

/// `2025-12-31` → `Dec 31, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
