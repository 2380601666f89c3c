use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key outside the fixed domain of a direct addressed table.
    OutOfRange,
    /// A search or targeted delete found no matching entry.
    KeyNotFound,
    /// An unrecognized probe strategy selector.
    InvalidProbe,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}
