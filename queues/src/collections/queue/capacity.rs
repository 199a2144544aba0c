use crate::collections::queue::{CapacityClass, QueueBase};

/// Reported by [`capacity_of`] for queues without a fixed bound.
pub const CAPACITY_UNBOUNDED: isize = isize::MAX;

/// Reported by [`capacity_of`] when the capacity cannot be told with confidence.
pub const CAPACITY_UNSURE: isize = isize::MIN;

/// Returns the capacity of `queue`, best effort.
///
/// Bounded queues report their bound, queues without one report [`CAPACITY_UNBOUNDED`] and queues
/// that cannot tell report [`CAPACITY_UNSURE`]. Blocking queues report their *remaining* capacity,
/// which is the free space at the time of the call, not the total size.
///
/// Never fails and never mutates the queue.
pub fn capacity_of<E, Q>(queue: &Q) -> isize
where
  Q: QueueBase<E> + ?Sized, {
  if let Some(remaining) = queue.remaining_capacity() {
    return to_capacity(remaining);
  }
  match queue.capacity_class() {
    CapacityClass::Exact(value) => to_capacity(value),
    CapacityClass::Unbounded => CAPACITY_UNBOUNDED,
    CapacityClass::Unknown => CAPACITY_UNSURE,
  }
}

fn to_capacity(value: usize) -> isize {
  isize::try_from(value).unwrap_or(CAPACITY_UNBOUNDED)
}

#[cfg(test)]
mod tests {
  use std::collections::VecDeque;

  use parking_lot::Mutex;

  use super::*;
  use crate::collections::queue::{
    ArrayQueue, BlockingArrayQueue, EmptyQueue, LinkedArrayQueue, MpscLinkedQueue, OneSlotQueue, Queue, QueueError,
    QueueRef,
  };

  #[derive(Debug, Default)]
  struct OpaqueQueue {
    inner: Mutex<Vec<i32>>,
  }

  impl QueueBase<i32> for OpaqueQueue {
    fn len(&self) -> usize {
      self.inner.lock().len()
    }
  }

  impl Queue<i32> for OpaqueQueue {
    fn offer(&self, element: i32) -> Result<(), QueueError<i32>> {
      self.inner.lock().push(element);
      Ok(())
    }

    fn poll(&self) -> Option<i32> {
      self.inner.lock().pop()
    }

    fn peek(&self) -> Option<i32> {
      self.inner.lock().last().copied()
    }
  }

  #[test]
  fn degenerate_queues_report_exact_capacity() {
    assert_eq!(capacity_of(&EmptyQueue::<i32>::new()), 0);
    assert_eq!(capacity_of(&OneSlotQueue::<i32>::new()), 1);
  }

  #[test]
  fn bounded_queue_reports_its_length() {
    let queue = ArrayQueue::<i32>::new(100);
    queue.offer(1).unwrap();
    assert_eq!(capacity_of(&queue), 100);
  }

  #[test]
  fn unbounded_queues_report_sentinel() {
    assert_eq!(capacity_of(&LinkedArrayQueue::<i32>::new(16)), CAPACITY_UNBOUNDED);
    assert_eq!(capacity_of(&MpscLinkedQueue::<i32>::new()), CAPACITY_UNBOUNDED);
    assert_eq!(capacity_of(&Mutex::new(VecDeque::<i32>::new())), CAPACITY_UNBOUNDED);
  }

  #[test]
  fn blocking_queue_reports_remaining_capacity() {
    let queue = BlockingArrayQueue::<i32>::new(4);
    assert_eq!(capacity_of(&queue), 4);
    queue.offer(1).unwrap();
    queue.offer(2).unwrap();
    assert_eq!(capacity_of(&queue), 2);
    assert_eq!(queue.capacity_class(), CapacityClass::Exact(4));
  }

  #[test]
  fn unrecognized_queue_reports_unsure() {
    assert_eq!(capacity_of(&OpaqueQueue::default()), CAPACITY_UNSURE);
  }

  #[test]
  fn works_through_trait_objects() {
    let queue: QueueRef<i32> = std::sync::Arc::new(OneSlotQueue::new());
    assert_eq!(capacity_of(queue.as_ref()), 1);
  }
}
