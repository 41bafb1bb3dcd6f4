use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the next working day (Monday to Friday) after `date`.
pub fn next_work_day(date: NaiveDate) -> NaiveDate {
    let mut current = date.succ_opt().unwrap_or(date);
    while matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    current
}

/// Calendar dates for `days` projection slots.
///
/// Slot 0 is `today` whatever weekday it falls on; every following slot is
/// the next working day.
pub fn projection_dates(today: NaiveDate, days: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(days);
    let mut current = today;

    for idx in 0..days {
        if idx > 0 {
            current = next_work_day(current);
        }
        dates.push(current);
    }

    dates
}
