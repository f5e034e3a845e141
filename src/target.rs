use std::io::Write;

use time::Date;
use tracing::debug;

use crate::{Clock, Error, format_date, next_month_first_day, next_saturday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    NextMonthFirstDay,
    NextSaturday,
}

impl Target {
    pub fn compute(self, today: Date) -> Result<Date, Error> {
        match self {
            Target::NextMonthFirstDay => next_month_first_day(today),
            Target::NextSaturday => next_saturday(today),
        }
    }
}

/// Reads the clock once and writes the formatted target date as a single line.
pub fn write_target(target: Target, clock: &dyn Clock, out: &mut impl Write) -> Result<(), Error> {
    let today = clock.today();
    let date = target.compute(today)?;
    debug!(?target, %today, %date, "Computed date");
    let line = format_date(date)?;
    writeln!(out, "{line}").map_err(Error::Write)?;
    out.flush().map_err(Error::Write)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use time::{Date, Month};

    use crate::{Error, FixedClock, Target, write_target};

    fn write_for(target: Target, date: Date) -> String {
        let mut out = Vec::new();
        write_target(target, &FixedClock(date), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn next_month_line() {
        assert_eq!(
            write_for(
                Target::NextMonthFirstDay,
                Date::from_calendar_date(2025, Month::November, 18).unwrap()
            ),
            "Mon, 01 Dec 2025\n"
        );
    }

    #[test]
    fn next_saturday_line() {
        assert_eq!(
            write_for(
                Target::NextSaturday,
                Date::from_calendar_date(2025, Month::June, 7).unwrap()
            ),
            "Sat, 14 Jun 2025\n"
        );
    }

    #[test]
    fn out_of_range_writes_nothing() {
        let mut out = Vec::new();
        let result = write_target(Target::NextMonthFirstDay, &FixedClock(Date::MAX), &mut out);
        assert!(matches!(result, Err(Error::OutOfRange)));
        assert!(out.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure() {
        let result = write_target(
            Target::NextSaturday,
            &FixedClock(Date::from_calendar_date(2025, Month::June, 2).unwrap()),
            &mut BrokenPipe,
        );
        assert!(matches!(result, Err(Error::Write(_))));
    }
}
