use thiserror::Error;

/// An error raised by the sizing helpers and the configuration loader.<br/>
/// Queue operations report through [`QueueError`](crate::QueueError) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueuesError {
  #[error("Invalid argument: {0} (must be greater than zero)")]
  InvalidArgument(isize),
  #[error("The next power of two of {0} does not fit in isize")]
  Overflow(isize),
  #[error("Invalid value for {key}: {value:?}")]
  InvalidConfig { key: String, value: String },
}
