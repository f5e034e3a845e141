use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// `Mon, 01 Dec 2025`. English abbreviations regardless of locale.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short], [day padding:zero] [month repr:short] [year]");

pub fn format_date(date: Date) -> Result<String, Error> {
    date.format(DATE_FORMAT).map_err(Error::Format)
}
