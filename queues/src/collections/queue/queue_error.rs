use thiserror::Error;

/// An error that occurs when a queue operation fails.<br/>
/// キューの操作に失敗した場合に発生するエラー。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError<E> {
  /// The queue had no room; the element is handed back.
  #[error("Failed to offer an element: {0:?}")]
  Full(E),
  /// A bulk insert was refused; the elements that were not inserted are handed back.
  #[error("Failed to offer elements: {0:?}")]
  Rejected(Vec<E>),
  /// The queue held nothing to return.
  #[error("Failed to take an element: the queue is empty")]
  NoSuchElement,
  /// A blocking insert gave up; the element is handed back.
  #[error("Timed out offering an element: {0:?}")]
  Timeout(E),
}
