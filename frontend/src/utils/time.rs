use chrono::{DateTime, Utc};

/// Short human date used on plan cards, e.g. `Feb 14, 2025`.
pub fn format_plan_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_month_day_year_without_padding() {
        let at = Utc.with_ymd_and_hms(2025, 2, 4, 23, 30, 0).unwrap();
        assert_eq!(format_plan_date(&at), "Feb 4, 2025");
        let at = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(format_plan_date(&at), "Dec 25, 2024");
    }
}
