mod calendar;
mod clock;
mod error;
mod format;
mod next_weekday;
mod start_of_next_month;
mod target;

pub use calendar::*;
pub use clock::*;
pub use error::*;
pub use format::*;
pub use next_weekday::*;
pub use start_of_next_month::*;
pub use target::*;
pub use time;
