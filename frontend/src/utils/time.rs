use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// The calendar day in the browser's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Worked time between clock-in and clock-out.
///
/// Returns `None` when there is no clock-in, when the record is still open, or
/// when the clock-out precedes the clock-in.
pub fn work_duration(
    clock_in: Option<NaiveDateTime>,
    clock_out: Option<NaiveDateTime>,
) -> Option<Duration> {
    let (start, end) = (clock_in?, clock_out?);
    let worked = end - start;
    (worked >= Duration::zero()).then_some(worked)
}

pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

pub fn format_clock_time(value: Option<NaiveDateTime>) -> String {
    value
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

pub fn duration_label(clock_in: Option<NaiveDateTime>, clock_out: Option<NaiveDateTime>) -> String {
    work_duration(clock_in, clock_out)
        .map(format_duration)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn today_uses_the_local_calendar_day() {
        let before = Local::now().date_naive();
        let day = today();
        let after = Local::now().date_naive();
        assert!(day == before || day == after);
    }

    #[test]
    fn work_duration_covers_closed_records() {
        assert_eq!(
            work_duration(Some(at(9, 0)), Some(at(17, 45))),
            Some(Duration::minutes(8 * 60 + 45))
        );
        assert_eq!(work_duration(Some(at(9, 0)), Some(at(9, 0))), Some(Duration::zero()));
    }

    #[test]
    fn work_duration_is_absent_for_open_or_inverted_records() {
        assert_eq!(work_duration(None, Some(at(17, 0))), None);
        assert_eq!(work_duration(Some(at(9, 0)), None), None);
        assert_eq!(work_duration(Some(at(18, 0)), Some(at(9, 0))), None);
    }

    #[test]
    fn format_duration_pads_minutes() {
        assert_eq!(format_duration(Duration::minutes(8 * 60 + 5)), "8h 05m");
        assert_eq!(format_duration(Duration::minutes(0)), "0h 00m");
        assert_eq!(format_duration(Duration::minutes(-30)), "0h 00m");
    }

    #[test]
    fn labels_fall_back_to_placeholders() {
        assert_eq!(format_clock_time(Some(at(7, 3))), "07:03");
        assert_eq!(format_clock_time(None), "--:--");
        assert_eq!(duration_label(Some(at(9, 0)), None), "-");
        assert_eq!(duration_label(Some(at(9, 0)), Some(at(10, 30))), "1h 30m");
    }
}
