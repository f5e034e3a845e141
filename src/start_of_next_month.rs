use time::Date;

use crate::{CalendarExt, Error};

pub trait StartOfNextMonthExt: Sized {
    /// `None` only when next month is past [`Date::MAX`].
    fn start_of_next_month(self) -> Option<Self>;
}

impl StartOfNextMonthExt for Date {
    fn start_of_next_month(self) -> Option<Self> {
        // Day 1 exists in every month, so the clamp in add_months never matters here
        self.replace_day(1).ok()?.checked_add_months(1)
    }
}

/// The first day of the month after `today`.
pub fn next_month_first_day(today: Date) -> Result<Date, Error> {
    today.start_of_next_month().ok_or(Error::OutOfRange)
}
