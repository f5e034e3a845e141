use time::{Date, OffsetDateTime};
use tracing::warn;

/// Where "today" comes from.
pub trait Clock {
    fn today(&self) -> Date;
}

/// Today in the local time zone.
/// Falls back to UTC when the local offset can't be determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        match OffsetDateTime::now_local() {
            Ok(now) => now.date(),
            Err(e) => {
                warn!("Could not determine local time zone, using UTC: {e}");
                OffsetDateTime::now_utc().date()
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, Month, OffsetDateTime};

    use crate::{Clock, FixedClock, SystemClock};

    #[test]
    fn fixed() {
        let date = Date::from_calendar_date(2025, Month::October, 2).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn system_is_within_a_day_of_utc() {
        let utc = OffsetDateTime::now_utc().date();
        let today = SystemClock.today();
        assert!((today - utc).whole_days().abs() <= 1);
    }
}
