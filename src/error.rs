use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Resulting date is out of the supported range")]
    OutOfRange,
    #[error("Failed to format date")]
    Format(time::error::Format),
    #[error("Failed to write output")]
    Write(io::Error),
}
