/// Date/time formatting used across the views (Brazilian DD/MM/YYYY).
use chrono::{DateTime, Local, Utc};

pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

pub fn format_time(dt: DateTime<Utc>) -> String {
    dt.format("%H:%M").to_string()
}

/// Wall-clock time shown in the checklist header.
pub fn local_time_now() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn brazilian_date_and_time_format() {
        let dt = Utc.with_ymd_and_hms(2023, 10, 12, 9, 5, 0).unwrap();
        assert_eq!(format_date(dt), "12/10/2023");
        assert_eq!(format_time(dt), "09:05");
    }
}
