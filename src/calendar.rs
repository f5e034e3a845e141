use time::{Date, Month};

/// Proleptic Gregorian month and day arithmetic.
pub trait CalendarExt: Sized {
    /// Shifts the date by whole calendar months, rolling the year as needed.
    /// The day of month is clamped to the length of the target month,
    /// so Jan 31 + 1 month is the last day of February.
    fn checked_add_months(self, months: i32) -> Option<Self>;

    fn checked_add_days(self, days: i32) -> Option<Self>;
}

impl CalendarExt for Date {
    fn checked_add_months(self, months: i32) -> Option<Self> {
        let index = i64::from(self.year()) * 12 + i64::from(self.month() as u8 - 1)
            + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        // rem_euclid keeps this in 0..12 even for negative offsets
        let month = Month::try_from(index.rem_euclid(12) as u8 + 1).ok()?;
        let day = self.day().min(month.length(year));
        Date::from_calendar_date(year, month, day).ok()
    }

    fn checked_add_days(self, days: i32) -> Option<Self> {
        let julian_day = self.to_julian_day().checked_add(days)?;
        Date::from_julian_day(julian_day).ok()
    }
}
