use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::collections::element::Element;
use crate::collections::queue::{CapacityClass, Queue, QueueBase, QueueError};

/// A bounded FIFO whose `put`/`take` wait for room or for an element.
///
/// It reports its free space through [`QueueBase::remaining_capacity`], which is what
/// [`capacity_of`](crate::capacity_of) returns for it.
#[derive(Debug)]
pub struct BlockingArrayQueue<E> {
  buffer: Mutex<VecDeque<E>>,
  not_empty: Condvar,
  not_full: Condvar,
  capacity: usize,
}

impl<E> BlockingArrayQueue<E> {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: Mutex::new(VecDeque::with_capacity(capacity)),
      not_empty: Condvar::new(),
      not_full: Condvar::new(),
      capacity,
    }
  }

  /// Inserts `element`, waiting as long as it takes for room.
  pub fn put(&self, element: E) {
    let mut buffer = self.buffer.lock();
    while buffer.len() >= self.capacity {
      self.not_full.wait(&mut buffer);
    }
    buffer.push_back(element);
    self.not_empty.notify_one();
  }

  /// Inserts `element`, waiting at most `timeout` for room.
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If the element was inserted.
  /// - `Err(QueueError::Timeout(element))` - If no room appeared in time.
  pub fn put_timeout(&self, element: E, timeout: Duration) -> Result<(), QueueError<E>> {
    let deadline = Instant::now().checked_add(timeout);
    let mut buffer = self.buffer.lock();
    while buffer.len() >= self.capacity {
      match deadline {
        Some(deadline) => {
          if self.not_full.wait_until(&mut buffer, deadline).timed_out() && buffer.len() >= self.capacity {
            tracing::debug!("BlockingArrayQueue::put_timeout: no room after {:?}", timeout);
            return Err(QueueError::Timeout(element));
          }
        }
        None => self.not_full.wait(&mut buffer),
      }
    }
    buffer.push_back(element);
    self.not_empty.notify_one();
    Ok(())
  }

  /// Removes the head, waiting as long as it takes for one to arrive.
  pub fn take(&self) -> E {
    let mut buffer = self.buffer.lock();
    loop {
      if let Some(element) = buffer.pop_front() {
        self.not_full.notify_one();
        return element;
      }
      self.not_empty.wait(&mut buffer);
    }
  }

  /// Removes the head, waiting at most `timeout`. Returns `None` if nothing arrived.
  pub fn take_timeout(&self, timeout: Duration) -> Option<E> {
    let deadline = Instant::now().checked_add(timeout);
    let mut buffer = self.buffer.lock();
    loop {
      if let Some(element) = buffer.pop_front() {
        self.not_full.notify_one();
        return Some(element);
      }
      match deadline {
        Some(deadline) => {
          if self.not_empty.wait_until(&mut buffer, deadline).timed_out() {
            let element = buffer.pop_front();
            if element.is_some() {
              self.not_full.notify_one();
            }
            return element;
          }
        }
        None => self.not_empty.wait(&mut buffer),
      }
    }
  }
}

impl<E: Element> QueueBase<E> for BlockingArrayQueue<E> {
  fn len(&self) -> usize {
    self.buffer.lock().len()
  }

  fn capacity_class(&self) -> CapacityClass {
    CapacityClass::Exact(self.capacity)
  }

  fn remaining_capacity(&self) -> Option<usize> {
    Some(self.capacity.saturating_sub(self.buffer.lock().len()))
  }
}

impl<E: Element> Queue<E> for BlockingArrayQueue<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    let mut buffer = self.buffer.lock();
    if buffer.len() >= self.capacity {
      return Err(QueueError::Full(element));
    }
    buffer.push_back(element);
    self.not_empty.notify_one();
    Ok(())
  }

  fn poll(&self) -> Option<E> {
    let element = self.buffer.lock().pop_front();
    if element.is_some() {
      self.not_full.notify_one();
    }
    element
  }

  fn peek(&self) -> Option<E>
  where
    E: Clone, {
    self.buffer.lock().front().cloned()
  }

  fn clear(&self) {
    self.buffer.lock().clear();
    self.not_full.notify_all();
  }
}
