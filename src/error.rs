use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RopeError {
    /// A position or range fell outside `[0, len]`, or the range was inverted.
    /// Single positions are reported as the empty range `i..i`.
    #[error("range {start}..{end} is out of bounds for rope of length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },
}

impl RopeError {
    pub(crate) fn at(index: usize, len: usize) -> Self {
        RopeError::OutOfRange { start: index, end: index, len }
    }

    pub(crate) fn range(start: usize, end: usize, len: usize) -> Self {
        RopeError::OutOfRange { start, end, len }
    }
}

pub type Result<T> = std::result::Result<T, RopeError>;
