use time::{Date, Weekday};

use crate::{CalendarExt, Error};

/// Days from `from` until the next `to`, in `1..=7`.
/// When both are the same weekday the answer is a full week, never zero.
pub fn days_until(from: Weekday, to: Weekday) -> u8 {
    let offset =
        i16::from(to.number_days_from_monday()) - i16::from(from.number_days_from_monday());
    if offset <= 0 {
        (offset + 7) as u8
    } else {
        offset as u8
    }
}

pub trait NextWeekdayExt: Sized {
    /// The first `weekday` strictly after `self`.
    fn next_weekday_after(self, weekday: Weekday) -> Option<Self>;

    fn next_saturday(self) -> Option<Self> {
        self.next_weekday_after(Weekday::Saturday)
    }
}

impl NextWeekdayExt for Date {
    fn next_weekday_after(self, weekday: Weekday) -> Option<Self> {
        self.checked_add_days(days_until(self.weekday(), weekday).into())
    }
}

/// The upcoming Saturday. A Saturday `today` gives the one a week later.
pub fn next_saturday(today: Date) -> Result<Date, Error> {
    today.next_saturday().ok_or(Error::OutOfRange)
}
