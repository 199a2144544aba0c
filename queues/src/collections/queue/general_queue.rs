use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::collections::element::Element;
use crate::collections::queue::{CapacityClass, Queue, QueueBase, QueueError};

// A plain locked deque, usable wherever a general-purpose unbounded queue is enough.
impl<E: Element> QueueBase<E> for Mutex<VecDeque<E>> {
  fn len(&self) -> usize {
    self.lock().len()
  }

  fn capacity_class(&self) -> CapacityClass {
    CapacityClass::Unbounded
  }
}

impl<E: Element> Queue<E> for Mutex<VecDeque<E>> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    self.lock().push_back(element);
    Ok(())
  }

  fn poll(&self) -> Option<E> {
    self.lock().pop_front()
  }

  fn peek(&self) -> Option<E>
  where
    E: Clone, {
    self.lock().front().cloned()
  }

  fn clear(&self) {
    self.lock().clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn locked_deque_acts_as_unbounded_queue() {
    let queue = Mutex::new(VecDeque::new());
    queue.offer_all((0..1000).collect()).unwrap();
    assert_eq!(QueueBase::len(&queue), 1000);
    assert_eq!(Queue::peek(&queue), Some(0));
    assert_eq!(Queue::poll(&queue), Some(0));
    Queue::clear(&queue);
    assert!(QueueBase::is_empty(&queue));
    assert_eq!(queue.capacity_class(), CapacityClass::Unbounded);
  }
}
