use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::collections::element::Element;
use crate::collections::queue::{CapacityClass, Queue, QueueBase, QueueError};

/// A bounded FIFO holding at most `length` elements.
///
/// The buffer grows on demand, so a large bound costs nothing until it is used.
#[derive(Debug)]
pub struct ArrayQueue<E> {
  buffer: Mutex<VecDeque<E>>,
  length: usize,
}

impl<E> ArrayQueue<E> {
  pub fn new(length: usize) -> Self {
    Self {
      buffer: Mutex::new(VecDeque::new()),
      length,
    }
  }

  /// Returns the configured bound.
  pub fn length(&self) -> usize {
    self.length
  }
}

impl<E: Element> QueueBase<E> for ArrayQueue<E> {
  fn len(&self) -> usize {
    self.buffer.lock().len()
  }

  fn capacity_class(&self) -> CapacityClass {
    CapacityClass::Exact(self.length)
  }
}

impl<E: Element> Queue<E> for ArrayQueue<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    let mut buffer = self.buffer.lock();
    if buffer.len() >= self.length {
      return Err(QueueError::Full(element));
    }
    buffer.push_back(element);
    Ok(())
  }

  fn poll(&self) -> Option<E> {
    self.buffer.lock().pop_front()
  }

  fn peek(&self) -> Option<E>
  where
    E: Clone, {
    self.buffer.lock().front().cloned()
  }

  fn clear(&self) {
    self.buffer.lock().clear();
  }
}
